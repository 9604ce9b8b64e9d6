use leptos::prelude::*;

use super::nav::scroll_to;

/// Banner section. Unlike the other sections it animates on load rather than
/// on scroll, so there is no reveal gate here.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 bg-gradient-hero"></div>

            // floating accents, pure CSS motion
            <div class="absolute top-20 left-10 w-4 h-4 bg-primary rounded-full opacity-60 float-slow"></div>
            <div class="absolute bottom-32 right-16 w-6 h-6 bg-accent rounded-full opacity-40 float-slower"></div>
            <div class="absolute top-1/3 right-20 w-2 h-2 bg-primary rounded-full opacity-80 float-fast"></div>

            <div class="relative z-10 text-center px-6 max-w-4xl mx-auto">
                <div class="space-y-6">
                    <h1 class="hero-enter text-5xl md:text-7xl font-bold bg-gradient-to-r from-foreground via-primary to-accent bg-clip-text text-transparent leading-tight">
                        "Shivam Kumar Srivastava"
                    </h1>
                    <p class="hero-enter hero-enter-1 text-xl md:text-2xl text-muted font-medium">
                        "Full Stack Developer & Business Strategist"
                    </p>
                    <p class="hero-enter hero-enter-2 text-lg text-muted max-w-2xl mx-auto leading-relaxed">
                        "Building scalable web applications while driving business growth through strategic lead generation and client relations."
                    </p>
                    <div class="hero-enter hero-enter-3 flex flex-col sm:flex-row gap-4 justify-center items-center pt-6">
                        <button
                            class="bg-primary hover:bg-primary/90 text-background px-8 py-4 rounded-md text-lg font-semibold interactive-hover"
                            on:click=move |_| scroll_to("projects")
                        >
                            "View Projects"
                        </button>
                        <button
                            class="border border-primary/50 hover:bg-primary/10 px-8 py-4 rounded-md text-lg font-semibold interactive-hover"
                            on:click=move |_| scroll_to("contact")
                        >
                            "Contact Me"
                        </button>
                        <a
                            href="/Shivam_Kumar_Srivastava_Resume.pdf"
                            download="Shivam_Kumar_Srivastava_Resume.pdf"
                            class="bg-accent hover:bg-accent/90 text-background px-8 py-4 rounded-md text-lg font-semibold interactive-hover"
                        >
                            "Download Resume"
                        </a>
                    </div>
                </div>

                <div class="hero-enter hero-enter-4 absolute bottom-8 left-1/2 -translate-x-1/2">
                    <button
                        class="bounce-slow cursor-pointer text-primary text-3xl"
                        aria-label="Scroll to About"
                        on:click=move |_| scroll_to("about")
                    >
                        "⌄"
                    </button>
                </div>
            </div>
        </section>
    }
}
