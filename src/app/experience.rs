use leptos::{html, prelude::*};

use super::reveal::{stagger_style, use_reveal};

struct Responsibility {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static RESPONSIBILITIES: [Responsibility; 4] = [
    Responsibility {
        icon: "⌨️",
        title: "Full Stack Development",
        description: "Engineered scalable full-stack applications with responsive interfaces and robust backend systems",
    },
    Responsibility {
        icon: "🎯",
        title: "Solution Architecture",
        description: "Recommended solutions highlighting the product's unique selling proposition (USP)",
    },
    Responsibility {
        icon: "📈",
        title: "Lead Generation",
        description: "Generated leads via LinkedIn, calls, and referrals, converting prospects into active clients",
    },
    Responsibility {
        icon: "🤝",
        title: "Client Relations",
        description: "Strengthened strategic client relationships, boosting upselling and cross-selling opportunities",
    },
];

static SKILLS_GAINED: [&str; 8] = [
    "Full Stack Development",
    "Client Relationship Management",
    "Lead Generation",
    "Sales Strategy",
    "Team Collaboration",
    "Product USP Development",
    "Customer Satisfaction",
    "Cross-functional Communication",
];

#[component]
pub fn Experience() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_reveal(section_ref);

    view! {
        <section node_ref=section_ref id="experience" class="py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <div class=move || reveal.get().class("reveal-up text-center mb-16")>
                    <h2 class="text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent">
                        "Professional Experience"
                    </h2>
                    <p class="text-xl text-muted max-w-3xl mx-auto">
                        "Hands-on experience combining technical development with business growth"
                    </p>
                </div>

                <div class="relative">
                    <div class="absolute left-1/2 -translate-x-1/2 w-1 h-full bg-gradient-to-b from-primary to-accent opacity-30 hidden lg:block"></div>

                    <div class=move || reveal.get().class("reveal-up relative")>
                        <div class="absolute left-1/2 -translate-x-1/2 w-6 h-6 bg-primary rounded-full border-4 border-background z-10 hidden lg:block"></div>

                        <div class="lg:w-1/2 lg:pr-12 lg:ml-auto">
                            <div class="card rounded-lg p-8 interactive-hover">
                                <div class="flex items-start justify-between mb-6">
                                    <div class="flex items-center gap-3">
                                        <div class="p-3 bg-primary/10 rounded-lg text-2xl">"🏢"</div>
                                        <div>
                                            <h3 class="text-2xl font-bold">"Algoforge Studios"</h3>
                                            <p class="text-lg font-semibold text-primary">
                                                "Full Stack Developer Intern"
                                            </p>
                                        </div>
                                    </div>
                                    <span class="chip chip-accent">"Internship"</span>
                                </div>

                                <div class="flex flex-wrap gap-4 mb-6 text-muted text-sm">
                                    <span>"📅 July 2024 – September 2024"</span>
                                    <span>"📍 Remote"</span>
                                </div>

                                <div class="space-y-4 mb-6">
                                    <h4 class="text-lg font-semibold">
                                        "Key Responsibilities & Achievements"
                                    </h4>
                                    <div class="grid gap-4">
                                        {RESPONSIBILITIES
                                            .iter()
                                            .enumerate()
                                            .map(|(i, responsibility)| {
                                                view! {
                                                    <div
                                                        class=move || {
                                                            reveal
                                                                .get()
                                                                .class(
                                                                    "reveal-left flex gap-4 p-4 rounded-lg bg-panel border border-edge",
                                                                )
                                                        }
                                                        style=stagger_style(i)
                                                    >
                                                        <div class="text-primary flex-shrink-0 mt-1">
                                                            {responsibility.icon}
                                                        </div>
                                                        <div>
                                                            <h5 class="font-semibold mb-1">{responsibility.title}</h5>
                                                            <p class="text-muted text-sm">
                                                                {responsibility.description}
                                                            </p>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>

                                <div class="bg-primary/5 border border-primary/20 rounded-lg p-4">
                                    <p class="text-sm text-muted italic">
                                        "\"Collaborated with the development team to enhance customer satisfaction and engagement while successfully bridging the gap between technical implementation and business objectives.\""
                                    </p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class=move || reveal.get().class("reveal-up mt-12 text-center")>
                    <h3 class="text-xl font-semibold mb-6">"Skills Gained & Enhanced"</h3>
                    <div class="flex flex-wrap justify-center gap-3">
                        {SKILLS_GAINED
                            .iter()
                            .enumerate()
                            .map(|(i, skill)| {
                                view! {
                                    <span
                                        class=move || reveal.get().class("reveal-scale chip")
                                        style=stagger_style(i)
                                    >
                                        {*skill}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
