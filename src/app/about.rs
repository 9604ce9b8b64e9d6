use leptos::{html, prelude::*};

use super::reveal::{stagger_style, use_reveal};

struct Highlight {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        icon: "⌨️",
        title: "Full Stack Development",
        description: "Building scalable applications with modern tech stack",
    },
    Highlight {
        icon: "📈",
        title: "Business Strategy",
        description: "Driving revenue growth through strategic sales approaches",
    },
    Highlight {
        icon: "🤝",
        title: "Client Relations",
        description: "Strengthening partnerships and maximizing client satisfaction",
    },
    Highlight {
        icon: "🎯",
        title: "Lead Generation",
        description: "Converting prospects into active clients via multiple channels",
    },
];

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_reveal(section_ref);

    view! {
        <section node_ref=section_ref id="about" class="py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <div class=move || reveal.get().class("reveal-up text-center mb-16")>
                    <h2 class="text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent">
                        "About Me"
                    </h2>
                    <p class="text-xl text-muted max-w-3xl mx-auto">
                        "A unique blend of technical expertise and business acumen"
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class=move || reveal.get().class("reveal-left space-y-6")>
                        <p class="text-lg leading-relaxed text-muted">
                            "I'm an ambitious and driven professional with a unique skill set spanning "
                            <span class="text-primary font-semibold">"Full Stack Development"</span> " and "
                            <span class="text-accent font-semibold">"Business Development"</span> "."
                        </p>
                        <p class="text-lg leading-relaxed text-muted">
                            "My experience ranges from engineering scalable web applications with responsive interfaces and robust backend systems to generating leads through strategic outreach and converting prospects into active clients."
                        </p>
                        <div class="card rounded-lg p-6 mt-8">
                            <h3 class="text-xl font-semibold text-primary mb-3">"Career Objective"</h3>
                            <p class="text-muted italic">
                                "\"Seeking opportunities where I can combine my technical knowledge with strategic sales and client engagement to deliver impactful business solutions.\""
                            </p>
                        </div>
                    </div>

                    <div class=move || reveal.get().class("reveal-right relative")>
                        <div class="relative overflow-hidden rounded-2xl">
                            <img
                                src="/about-image.jpg"
                                alt="Professional workspace"
                                class="w-full h-auto rounded-2xl"
                            />
                            <div class="absolute inset-0 bg-gradient-to-tr from-primary/20 to-accent/20 rounded-2xl"></div>
                        </div>
                    </div>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6 mt-16">
                    {HIGHLIGHTS
                        .iter()
                        .enumerate()
                        .map(|(i, highlight)| {
                            view! {
                                <div
                                    class=move || reveal.get().class("reveal-up")
                                    style=stagger_style(i)
                                >
                                    <div class="card rounded-lg p-6 h-full interactive-hover">
                                        <div class="text-primary text-2xl mb-4">{highlight.icon}</div>
                                        <h3 class="font-semibold text-lg mb-2">{highlight.title}</h3>
                                        <p class="text-muted text-sm">{highlight.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
