use leptos::prelude::*;

use super::nav::scroll_to;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

// (label, section id) - ids must match the section roots exactly
static QUICK_LINKS: [(&str, &str); 6] = [
    ("About", "about"),
    ("Skills", "skills"),
    ("Experience", "experience"),
    ("Projects", "projects"),
    ("Education", "education"),
    ("Contact", "contact"),
];

struct SocialLink {
    icon: &'static str,
    href: &'static str,
    label: &'static str,
}

static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        icon: "devicon-github-plain",
        href: "https://github.com/maclare031",
        label: "GitHub",
    },
    SocialLink {
        icon: "extra-email",
        href: "mailto:shivamsrivastava1307@gmail.com",
        label: "Email",
    },
    SocialLink {
        icon: "extra-phone",
        href: "tel:+919450433061",
        label: "Phone",
    },
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 px-6 border-t border-edge bg-panel">
            <div class="max-w-6xl mx-auto">
                <div class="grid md:grid-cols-3 gap-8 mb-8">
                    <div class="space-y-4">
                        <h3 class="text-xl font-bold bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent">
                            "Shivam Kumar Srivastava"
                        </h3>
                        <p class="text-muted text-sm leading-relaxed">
                            "Full Stack Developer & Business Strategist passionate about creating scalable solutions and driving business growth through technology."
                        </p>
                    </div>

                    <div class="space-y-4">
                        <h4 class="font-semibold">"Quick Links"</h4>
                        <div class="grid grid-cols-2 gap-2 text-sm">
                            {QUICK_LINKS
                                .iter()
                                .map(|(label, id)| {
                                    view! {
                                        <button
                                            class="text-muted hover:text-primary transition-colors text-left"
                                            on:click=move |_| scroll_to(id)
                                        >
                                            {*label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="space-y-4">
                        <h4 class="font-semibold">"Connect"</h4>
                        <div class="space-y-2 text-muted text-sm">
                            <p>
                                <strong>"Location: "</strong>
                                "Lucknow, India"
                            </p>
                            <p>
                                <strong>"Email: "</strong>
                                "shivamsrivastava1307@gmail.com"
                            </p>
                            <p>
                                <strong>"Phone: "</strong>
                                "+91-945-043-3061"
                            </p>
                        </div>
                    </div>
                </div>

                <div class="border-t border-edge pt-8">
                    <div class="flex flex-col md:flex-row items-center justify-between gap-4">
                        <div class="flex items-center gap-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| {
                                    let external = social.href.starts_with("http");
                                    view! {
                                        <a
                                            href=social.href
                                            target={if external { "_blank" } else { "_self" }}
                                            rel={if external { "noopener noreferrer" } else { "" }}
                                            aria-label=social.label
                                            class="p-2 rounded-lg border border-edge text-muted hover:text-primary hover:border-primary/30 transition-all duration-300"
                                        >
                                            <i class=social.icon></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="flex items-center gap-2 text-muted text-sm">
                            <span>"© " {BUILD_YEAR} " Shivam Kumar Srivastava. Made with"</span>
                            <span class="text-red-500 animate-pulse">"♥"</span>
                            <span>"and lots of coffee."</span>
                        </div>
                    </div>
                </div>

                <div class="text-center mt-8 pt-4 border-t border-edge">
                    <p class="text-xs text-muted">
                        "Open to new opportunities and collaborations. Let's build something amazing together!"
                    </p>
                </div>
            </div>
        </footer>
    }
}
