mod about;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod nav;
mod projects;
mod reveal;
mod skills;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use contact::{Contact, SimulatedTransport};
use education::Education;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use projects::Projects;
use skills::Skills;
use toast::{provide_toasts, ToastHost};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_toasts();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Shivam Kumar Srivastava - {title}") />

        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=PortfolioPage />
                </Routes>
            </main>
        </Router>
        <ToastHost />
    }
}

/// The single portfolio page: every section renders in order and animates
/// itself into view independently.
#[component]
fn PortfolioPage() -> impl IntoView {
    view! {
        <Title text="Full Stack Developer & Business Strategist" />
        <Hero />
        <About />
        <Skills />
        <Experience />
        <Projects />
        <Education />
        <Contact transport=SimulatedTransport::default() />
        <Footer />
    }
}
