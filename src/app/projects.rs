use leptos::{html, prelude::*};

use super::reveal::{stagger_style, use_reveal};

/// How many tech badges a project card shows before collapsing into "+N".
const CARD_BADGE_LIMIT: usize = 3;

#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub tech_stack: &'static [&'static str],
    pub features: &'static [&'static str],
    pub github_url: &'static str,
    pub demo_url: &'static str,
}

static PROJECTS: [Project; 3] = [
    Project {
        id: 1,
        title: "Learning Management System (LMS)",
        description: "A comprehensive LMS platform enabling course creation, student enrollment, and progress tracking with secure authentication and role-based access control.",
        icon: "🖥️",
        tech_stack: &["Next.js", "Node.js", "MongoDB", "HTML/CSS", "JavaScript"],
        features: &[
            "Secure user authentication & role-based access",
            "Interactive dashboards for students and instructors",
            "Course creation and enrollment system",
            "Progress tracking and analytics",
            "Responsive design for all devices",
        ],
        github_url: "https://github.com/maclare031",
        demo_url: "#",
    },
    Project {
        id: 2,
        title: "AI Chatbot with Gemini API",
        description: "An intelligent AI-powered chatbot leveraging Google's Gemini API for natural language understanding and context-aware responses.",
        icon: "🤖",
        tech_stack: &["JavaScript", "Node.js", "Gemini API", "HTML/CSS"],
        features: &[
            "Google Gemini API integration for intelligent responses",
            "Context-aware conversation handling",
            "Natural language understanding capabilities",
            "Clean and intuitive web interface",
            "Real-time chat functionality",
        ],
        github_url: "https://github.com/maclare031",
        demo_url: "#",
    },
    Project {
        id: 3,
        title: "Waste Type Classifier",
        description: "A machine learning model that classifies waste into categories (organic, recyclable, hazardous) with real-time prediction capabilities.",
        icon: "♻️",
        tech_stack: &["Python", "TensorFlow/Keras", "OpenCV", "Flask"],
        features: &[
            "ML model for waste classification",
            "Image preprocessing and data augmentation",
            "Real-time prediction web interface",
            "Multiple waste category support",
            "High accuracy classification results",
        ],
        github_url: "https://github.com/maclare031",
        demo_url: "#",
    },
];

pub fn project_by_id(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Which project's detail modal is open, if any.
///
/// At most one project can be selected: `open` replaces any current
/// selection, `close` is idempotent. An id that matches no seeded project
/// resolves to no project, so the modal renders nothing instead of crashing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectSelection(Option<u32>);

impl ProjectSelection {
    pub fn open(&mut self, id: u32) {
        self.0 = Some(id);
    }

    pub fn close(&mut self) {
        self.0 = None;
    }

    pub fn selected(self) -> Option<&'static Project> {
        self.0.and_then(project_by_id)
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_reveal(section_ref);
    let selection = RwSignal::new(ProjectSelection::default());

    view! {
        <section node_ref=section_ref id="projects" class="py-20 px-6 bg-panel">
            <div class="max-w-6xl mx-auto">
                <div class=move || reveal.get().class("reveal-up text-center mb-16")>
                    <h2 class="text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent">
                        "Featured Projects"
                    </h2>
                    <p class="text-xl text-muted max-w-3xl mx-auto">
                        "Showcasing technical expertise through innovative web applications and intelligent systems"
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            let hidden_techs = project.tech_stack.len().saturating_sub(CARD_BADGE_LIMIT);
                            view! {
                                <div
                                    class=move || reveal.get().class("reveal-up")
                                    style=stagger_style(i * 2)
                                >
                                    <div class="card rounded-lg overflow-hidden h-full group">
                                        <div class="p-6">
                                            <div class="text-primary text-3xl mb-4">{project.icon}</div>
                                            <h3 class="text-xl font-bold mb-2 group-hover:text-primary transition-colors">
                                                {project.title}
                                            </h3>
                                            <p class="text-muted text-sm mb-4 line-clamp-3">
                                                {project.description}
                                            </p>

                                            <div class="flex flex-wrap gap-2 mb-4">
                                                {project
                                                    .tech_stack
                                                    .iter()
                                                    .take(CARD_BADGE_LIMIT)
                                                    .map(|tech| view! { <span class="chip text-xs">{*tech}</span> })
                                                    .collect_view()}
                                                {(hidden_techs > 0)
                                                    .then(|| {
                                                        view! {
                                                            <span class="chip text-xs">"+" {hidden_techs}</span>
                                                        }
                                                    })}
                                            </div>

                                            <div class="flex gap-2">
                                                <button
                                                    class="flex-1 bg-primary hover:bg-primary/90 text-background px-4 py-2 rounded-md text-sm font-semibold"
                                                    on:click=move |_| selection.update(|s| s.open(project.id))
                                                >
                                                    "View Details"
                                                </button>
                                                <a
                                                    href=project.github_url
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    aria-label="GitHub Repository"
                                                    class="px-3 py-2 rounded-md border border-edge hover:bg-primary/10"
                                                >
                                                    <i class="devicon-github-plain"></i>
                                                </a>
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <ProjectModal selection />
            </div>
        </section>
    }
}

#[component]
fn ProjectModal(selection: RwSignal<ProjectSelection>) -> impl IntoView {
    view! {
        {move || {
            selection
                .get()
                .selected()
                .map(|project| {
                    view! {
                        <div class="fixed inset-0 z-40 flex items-center justify-center px-4">
                            <div
                                class="absolute inset-0 bg-background/80"
                                on:click=move |_| selection.update(|s| s.close())
                            ></div>
                            <div class="card relative z-50 w-full max-w-4xl max-h-[90vh] overflow-y-auto rounded-lg p-8">
                                <button
                                    class="absolute top-4 right-4 text-muted hover:text-foreground"
                                    aria-label="Close"
                                    on:click=move |_| selection.update(|s| s.close())
                                >
                                    "✕"
                                </button>

                                <div class="flex items-center gap-3 mb-2">
                                    <span class="text-primary text-2xl">{project.icon}</span>
                                    <h3 class="text-2xl font-bold">{project.title}</h3>
                                </div>
                                <p class="text-muted mb-6">{project.description}</p>

                                <h4 class="text-lg font-semibold mb-3">"Key Features"</h4>
                                <ul class="grid md:grid-cols-2 gap-2 mb-6">
                                    {project
                                        .features
                                        .iter()
                                        .map(|feature| {
                                            view! {
                                                <li class="flex items-center gap-2 text-sm text-muted">
                                                    <div class="w-1.5 h-1.5 bg-primary rounded-full flex-shrink-0"></div>
                                                    {*feature}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>

                                <h4 class="text-lg font-semibold mb-3">"Technology Stack"</h4>
                                <div class="flex flex-wrap gap-2 mb-6">
                                    {project
                                        .tech_stack
                                        .iter()
                                        .map(|tech| view! { <span class="chip">{*tech}</span> })
                                        .collect_view()}
                                </div>

                                <div class="flex gap-3 pt-4">
                                    <a
                                        href=project.github_url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex-1 text-center bg-primary hover:bg-primary/90 text-background px-4 py-2 rounded-md font-semibold"
                                    >
                                        "View on GitHub"
                                    </a>
                                    <a
                                        href=project.demo_url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex-1 text-center border border-edge hover:bg-primary/10 px-4 py-2 rounded-md font-semibold"
                                    >
                                        "Live Demo"
                                    </a>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_then_close_leaves_nothing_selected() {
        for id in [1, 2, 3] {
            let mut selection = ProjectSelection::default();
            selection.open(id);
            assert_eq!(selection.selected().map(|p| p.id), Some(id));
            selection.close();
            assert!(selection.selected().is_none());
        }
    }

    #[test]
    fn opening_replaces_previous_selection() {
        let mut selection = ProjectSelection::default();
        selection.open(1);
        selection.open(2);
        assert_eq!(selection.selected().map(|p| p.id), Some(2));
    }

    #[test]
    fn close_is_idempotent() {
        let mut selection = ProjectSelection::default();
        selection.open(3);
        selection.close();
        let after_one = selection;
        selection.close();
        assert_eq!(selection, after_one);
        assert_eq!(selection, ProjectSelection::default());
    }

    #[test]
    fn unknown_id_resolves_to_no_project() {
        let mut selection = ProjectSelection::default();
        selection.open(99);
        assert!(selection.selected().is_none());
    }

    #[test]
    fn project_ids_are_unique() {
        let mut ids = PROJECTS.iter().map(|p| p.id).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }
}
