use leptos::{html, prelude::*};

use super::reveal::{stagger_style, use_reveal};

struct EducationEntry {
    id: u32,
    degree: &'static str,
    field: &'static str,
    institution: &'static str,
    period: &'static str,
    status: &'static str,
    grade: Option<&'static str>,
    description: &'static str,
    icon: &'static str,
    achievements: &'static [&'static str],
}

static EDUCATION: [EducationEntry; 3] = [
    EducationEntry {
        id: 1,
        degree: "Bachelor of Technology",
        field: "Computer Science and Engineering",
        institution: "BBD Engineering College, Lucknow",
        period: "2022 - 2026 (Expected)",
        status: "In Progress",
        grade: None,
        description: "Focused on software engineering, algorithms, data structures, and modern development practices.",
        icon: "🎓",
        achievements: &[
            "Strong foundation in programming and software engineering",
            "Completed multiple full-stack development projects",
            "Active participation in technical workshops and seminars",
        ],
    },
    EducationEntry {
        id: 2,
        degree: "Intermediate",
        field: "Science Stream",
        institution: "RPM Children's Academy",
        period: "2020 - 2022",
        status: "Completed",
        grade: Some("65%"),
        description: "Completed intermediate education with focus on mathematics, physics, and chemistry.",
        icon: "📖",
        achievements: &[
            "Solid foundation in mathematics and analytical thinking",
            "Developed problem-solving and logical reasoning skills",
        ],
    },
    EducationEntry {
        id: 3,
        degree: "High School",
        field: "General Studies",
        institution: "RPM Children's Academy",
        period: "2018 - 2020",
        status: "Completed",
        grade: Some("77%"),
        description: "Completed secondary education with strong academic performance.",
        icon: "🏅",
        achievements: &[
            "Achieved 77% marks demonstrating consistent academic performance",
            "Built strong foundation for higher education",
        ],
    },
];

#[component]
pub fn Education() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_reveal(section_ref);

    view! {
        <section node_ref=section_ref id="education" class="py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <div class=move || reveal.get().class("reveal-up text-center mb-16")>
                    <h2 class="text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent">
                        "Education"
                    </h2>
                    <p class="text-xl text-muted max-w-3xl mx-auto">
                        "Academic journey building the foundation for technical and analytical excellence"
                    </p>
                </div>

                <div class="relative">
                    <div class="absolute left-4 md:left-1/2 md:-translate-x-1/2 w-1 h-full bg-gradient-to-b from-primary via-accent to-primary opacity-30"></div>

                    <div class="space-y-12">
                        {EDUCATION
                            .iter()
                            .enumerate()
                            .map(|(i, entry)| {
                                let row = if i % 2 == 0 { "md:flex-row" } else { "md:flex-row-reverse" };
                                let pad = if i % 2 == 0 { "md:pr-12" } else { "md:pl-12" };
                                view! {
                                    <div
                                        class=move || {
                                            reveal
                                                .get()
                                                .class(&format!("reveal-up relative flex items-center flex-col {row}"))
                                        }
                                        style=stagger_style(i * 3)
                                    >
                                        <div class="absolute left-4 md:left-1/2 md:-translate-x-1/2 w-6 h-6 bg-gradient-to-r from-primary to-accent rounded-full border-4 border-background z-10 flex items-center justify-center">
                                            <div class="w-2 h-2 bg-background rounded-full"></div>
                                        </div>

                                        <div class=format!("w-full md:w-5/12 ml-12 md:ml-0 {pad}")>
                                            <div class="card rounded-lg p-6 interactive-hover">
                                                <div class="flex items-start justify-between mb-4">
                                                    <div class="flex items-center gap-3">
                                                        <div class="p-2 bg-primary/10 rounded-lg text-xl">
                                                            {entry.icon}
                                                        </div>
                                                        <div>
                                                            <h3 class="text-lg font-bold">{entry.degree}</h3>
                                                            <p class="text-sm text-muted">{entry.field}</p>
                                                        </div>
                                                    </div>
                                                    <span class={if entry.status == "In Progress" {
                                                        "chip chip-primary"
                                                    } else {
                                                        "chip"
                                                    }}>{entry.status}</span>
                                                </div>

                                                <div class="space-y-2 mb-4">
                                                    <p class="font-semibold">{entry.institution}</p>
                                                    <div class="flex items-center gap-2 text-muted text-sm">
                                                        <span>"📅 " {entry.period}</span>
                                                        {entry
                                                            .grade
                                                            .map(|grade| {
                                                                view! {
                                                                    <span class="mx-2">"•"</span>
                                                                    <span class="font-medium">"Grade: " {grade}</span>
                                                                }
                                                            })}
                                                    </div>
                                                </div>

                                                <p class="text-muted text-sm mb-4">{entry.description}</p>

                                                <div>
                                                    <h4 class="font-semibold text-sm mb-2">"Key Highlights:"</h4>
                                                    <ul class="space-y-1">
                                                        {entry
                                                            .achievements
                                                            .iter()
                                                            .map(|achievement| {
                                                                view! {
                                                                    <li class="flex items-start gap-2 text-xs text-muted">
                                                                        <div class="w-1.5 h-1.5 bg-primary rounded-full flex-shrink-0 mt-1.5"></div>
                                                                        {*achievement}
                                                                    </li>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </ul>
                                                </div>
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class=move || reveal.get().class("reveal-up mt-16 text-center")>
                    <div class="card rounded-lg p-8 max-w-4xl mx-auto">
                        <h3 class="text-xl font-semibold mb-4 text-primary">"Academic Focus Areas"</h3>
                        <div class="grid md:grid-cols-3 gap-6">
                            <div class="text-center">
                                <div class="text-2xl font-bold text-accent mb-2">"2026"</div>
                                <p class="text-sm text-muted">"Expected Graduation"</p>
                            </div>
                            <div class="text-center">
                                <div class="text-2xl font-bold text-primary mb-2">"CSE"</div>
                                <p class="text-sm text-muted">"Computer Science & Engineering"</p>
                            </div>
                            <div class="text-center">
                                <div class="text-2xl font-bold text-accent mb-2">"4+"</div>
                                <p class="text-sm text-muted">"Years of Technical Study"</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_ids_are_unique() {
        let mut ids = EDUCATION.iter().map(|e| e.id).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), EDUCATION.len());
    }
}
