use leptos::{html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::reveal::{stagger_style, use_reveal, Reveal};

/// Extra wait after the section reveals before the bars start filling, so the
/// container finishes its own entrance first.
const FILL_DELAY_MS: f64 = 500.0;

#[derive(Debug, Clone, Copy)]
struct Skill {
    name: &'static str,
    level: u8,
}

struct SkillCategory {
    icon: &'static str,
    title: &'static str,
    skills: [Skill; 4],
}

static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        icon: "⌨️",
        title: "Programming Languages",
        skills: [
            Skill { name: "Python", level: 85 },
            Skill { name: "JavaScript", level: 90 },
            Skill { name: "Java", level: 75 },
            Skill { name: "C", level: 70 },
        ],
    },
    SkillCategory {
        icon: "🌐",
        title: "Web Technologies",
        skills: [
            Skill { name: "Next.js", level: 90 },
            Skill { name: "Node.js", level: 85 },
            Skill { name: "HTML/CSS", level: 95 },
            Skill { name: "React", level: 88 },
        ],
    },
    SkillCategory {
        icon: "☁️",
        title: "Deployment & Tools",
        skills: [
            Skill { name: "Vercel", level: 90 },
            Skill { name: "Render", level: 85 },
            Skill { name: "Git/GitHub", level: 88 },
            Skill { name: "MongoDB", level: 80 },
        ],
    },
    SkillCategory {
        icon: "💼",
        title: "Business Skills",
        skills: [
            Skill { name: "Lead Generation", level: 90 },
            Skill { name: "Sales Strategy", level: 85 },
            Skill { name: "Client Relations", level: 92 },
            Skill { name: "Problem Solving", level: 88 },
        ],
    },
];

static STRENGTHS: [&str; 6] = [
    "Leadership",
    "Communication",
    "Problem Solving",
    "Upselling & Cross-Selling",
    "Competitor Analysis",
    "Team Collaboration",
];

/// Width of a bar's fill. Zero until the gate opens, then the target level.
/// Level 0 stays a legal, zero-width fill rather than an omitted one.
fn fill_width(level: u8, open: bool) -> String {
    let shown = if open { level.min(100) } else { 0 };
    format!("width: {shown}%")
}

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_reveal(section_ref);

    view! {
        <section node_ref=section_ref id="skills" class="py-20 px-6 bg-panel">
            <div class="max-w-6xl mx-auto">
                <div class=move || reveal.get().class("reveal-up text-center mb-16")>
                    <h2 class="text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent">
                        "Skills & Expertise"
                    </h2>
                    <p class="text-xl text-muted max-w-3xl mx-auto">
                        "A comprehensive skill set spanning technical development and business strategy"
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(ci, category)| {
                            view! {
                                <div
                                    class=move || reveal.get().class("reveal-up")
                                    style=stagger_style(ci * 2)
                                >
                                    <div class="card rounded-lg p-8 h-full">
                                        <div class="flex items-center gap-3 mb-6">
                                            <span class="text-primary text-2xl">{category.icon}</span>
                                            <h3 class="text-xl font-semibold">{category.title}</h3>
                                        </div>
                                        <div class="space-y-6">
                                            {category
                                                .skills
                                                .iter()
                                                .enumerate()
                                                .map(|(si, skill)| {
                                                    view! {
                                                        <SkillBar
                                                            name=skill.name
                                                            level=skill.level
                                                            reveal
                                                            delay_index={ci * 4 + si}
                                                        />
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div
                    class=move || reveal.get().class("reveal-up mt-12 text-center")
                    style=stagger_style(8)
                >
                    <div class="card rounded-lg p-8 max-w-4xl mx-auto">
                        <h3 class="text-2xl font-semibold mb-4 text-primary">"Additional Strengths"</h3>
                        <div class="flex flex-wrap justify-center gap-4">
                            {STRENGTHS
                                .iter()
                                .enumerate()
                                .map(|(i, strength)| {
                                    view! {
                                        <span
                                            class=move || {
                                                reveal.get().class("reveal-scale chip chip-primary")
                                            }
                                            style=stagger_style(i)
                                        >
                                            {*strength}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// A single levelled skill with an animated fill.
///
/// The fill holds at zero until the section reveals plus [`FILL_DELAY_MS`],
/// then transitions to `level` exactly once. `reveal` is monotonic, so the
/// timer arms at most once per mount.
#[component]
fn SkillBar(
    name: &'static str,
    level: u8,
    reveal: Signal<Reveal>,
    delay_index: usize,
) -> impl IntoView {
    let (filled, set_filled) = signal(false);
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            let _ = set_filled.try_set(true);
        },
        FILL_DELAY_MS,
    );

    Effect::new(move |_| {
        if reveal.get().is_revealed() {
            start(());
        }
    });

    view! {
        <div class="space-y-2">
            <div class="flex justify-between items-center">
                <span class="font-medium">{name}</span>
                <span class="text-sm text-muted">{level}"%"</span>
            </div>
            <div class="relative h-2 rounded-full bg-track overflow-hidden">
                <div
                    class="progress-fill absolute top-0 left-0 h-2 rounded-full"
                    style=move || format!("{}; {}", fill_width(level, filled.get()), stagger_style(delay_index))
                ></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_is_zero_before_gate_opens() {
        assert_eq!(fill_width(85, false), "width: 0%");
    }

    #[test]
    fn fill_reaches_target_after_gate_opens() {
        assert_eq!(fill_width(85, true), "width: 85%");
    }

    #[test]
    fn zero_level_renders_empty_not_omitted() {
        assert_eq!(fill_width(0, true), "width: 0%");
    }

    #[test]
    fn full_level_does_not_overflow() {
        assert_eq!(fill_width(100, true), "width: 100%");
        // out-of-range levels clamp to full
        assert_eq!(fill_width(120, true), "width: 100%");
    }

    #[test]
    fn seeded_levels_are_in_range() {
        for category in &SKILL_CATEGORIES {
            for skill in &category.skills {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }
}
