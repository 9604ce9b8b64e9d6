use std::time::Duration;

use leptos::{either::Either, html, prelude::*};
use thiserror::Error;

use super::reveal::{stagger_style, use_reveal};
use super::toast::use_toasts;

/// Delivery failure surfaced to the user as a destructive toast. The
/// simulated transport never produces one; a real client would map its
/// failures here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("transport failure: {0}")]
    Transport(String),
}

/// A completed message, ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Capability for delivering a contact message.
///
/// `done` must be invoked exactly once with the outcome. Swapping the
/// simulated transport for a real network client means implementing this
/// trait; the form controller stays unchanged.
pub trait MessageTransport: Clone + 'static {
    fn deliver(&self, message: ContactMessage, done: Box<dyn FnOnce(Result<(), DeliveryError>)>);
}

/// Placeholder transport: waits a fixed delay, then reports success without
/// sending anything anywhere.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1500),
        }
    }
}

impl MessageTransport for SimulatedTransport {
    fn deliver(&self, _message: ContactMessage, done: Box<dyn FnOnce(Result<(), DeliveryError>)>) {
        set_timeout(move || done(Ok(())), self.delay);
    }
}

/// The contact form's fields plus the in-flight submission flag.
///
/// Fields are replaced wholesale on every input event. The only validation
/// is the HTML `required` attribute on the inputs themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    in_flight: bool,
}

impl ContactForm {
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Starts a submission, returning the message to deliver. Refuses while
    /// an earlier submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Records the submission outcome. Success clears the fields; failure
    /// keeps them so the user does not have to retype the message.
    pub fn finish_submit(&mut self, outcome: &Result<(), DeliveryError>) {
        self.in_flight = false;
        if outcome.is_ok() {
            self.name.clear();
            self.email.clear();
            self.message.clear();
        }
    }
}

struct ContactChannel {
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    href: &'static str,
}

static CONTACT_CHANNELS: [ContactChannel; 4] = [
    ContactChannel {
        icon: "✉️",
        label: "Email",
        value: "shivamsrivastava1307@gmail.com",
        href: "mailto:shivamsrivastava1307@gmail.com",
    },
    ContactChannel {
        icon: "📞",
        label: "Phone",
        value: "+91-945-043-3061",
        href: "tel:+919450433061",
    },
    ContactChannel {
        icon: "💻",
        label: "GitHub",
        value: "github.com/maclare031",
        href: "https://github.com/maclare031",
    },
    ContactChannel {
        icon: "📍",
        label: "Location",
        value: "Lucknow, India",
        href: "#",
    },
];

#[component]
pub fn Contact<T: MessageTransport>(transport: T) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_reveal(section_ref);
    let form = RwSignal::new(ContactForm::default());
    let toasts = use_toasts();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(message) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        transport.deliver(
            message,
            Box::new(move |outcome| {
                // The delivery may outlive this component; a late completion
                // must not touch disposed signals.
                let _ = form.try_update(|f| f.finish_submit(&outcome));
                match outcome {
                    Ok(()) => toasts.success(
                        "Message sent successfully!",
                        "Thank you for reaching out. I'll get back to you soon.",
                    ),
                    Err(_) => toasts.error(
                        "Error sending message",
                        "Please try again later or contact me directly via email.",
                    ),
                }
            }),
        );
    };

    view! {
        <section node_ref=section_ref id="contact" class="py-20 px-6 bg-panel">
            <div class="max-w-6xl mx-auto">
                <div class=move || reveal.get().class("reveal-up text-center mb-16")>
                    <h2 class="text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent">
                        "Let's Connect"
                    </h2>
                    <p class="text-xl text-muted max-w-3xl mx-auto">
                        "Ready to collaborate on your next project or discuss business opportunities? Let's start a conversation."
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12">
                    <div class=move || reveal.get().class("reveal-left space-y-8")>
                        <div>
                            <h3 class="text-2xl font-bold mb-6">"Get in Touch"</h3>
                            <p class="text-muted mb-8 leading-relaxed">
                                "I'm always interested in discussing new opportunities, innovative projects, or simply connecting with fellow developers and business professionals. Whether you have a project in mind or want to explore potential collaborations, I'd love to hear from you."
                            </p>
                        </div>

                        <div class="space-y-4">
                            {CONTACT_CHANNELS
                                .iter()
                                .enumerate()
                                .map(|(i, channel)| {
                                    let external = channel.href.starts_with("http");
                                    view! {
                                        <div
                                            class=move || reveal.get().class("reveal-up")
                                            style=stagger_style(i)
                                        >
                                            <div class="card rounded-lg p-4 interactive-hover">
                                                <a
                                                    href=channel.href
                                                    target={if external { "_blank" } else { "_self" }}
                                                    rel={if external { "noopener noreferrer" } else { "" }}
                                                    class="flex items-center gap-4 group"
                                                >
                                                    <div class="p-3 bg-panel rounded-lg text-xl group-hover:scale-110 transition-transform duration-200">
                                                        {channel.icon}
                                                    </div>
                                                    <div>
                                                        <p class="font-semibold group-hover:text-primary transition-colors">
                                                            {channel.label}
                                                        </p>
                                                        <p class="text-muted text-sm">{channel.value}</p>
                                                    </div>
                                                </a>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class=move || {
                            reveal.get().class("reveal-up bg-primary/10 border border-primary/20 rounded-lg p-4")
                        }>
                            <div class="flex items-center gap-3">
                                <div class="w-3 h-3 bg-primary rounded-full animate-pulse"></div>
                                <p class="text-primary font-semibold">"Available for new opportunities"</p>
                            </div>
                            <p class="text-muted text-sm mt-2">
                                "Currently open to full-time positions, freelance projects, and consulting opportunities."
                            </p>
                        </div>

                        <div class=move || reveal.get().class("reveal-up")>
                            <a
                                href="/Shivam_Kumar_Srivastava_Resume.pdf"
                                download="Shivam_Kumar_Srivastava_Resume.pdf"
                                class="block w-full text-center bg-accent hover:bg-accent/90 text-background font-semibold px-4 py-3 rounded-md interactive-hover"
                            >
                                "📄 Download My Resume"
                            </a>
                        </div>
                    </div>

                    <div class=move || reveal.get().class("reveal-right")>
                        <div class="card rounded-lg p-8">
                            <h3 class="text-2xl font-bold mb-6">"Send a Message"</h3>

                            <form on:submit=submit class="space-y-6">
                                <div class="space-y-2">
                                    <label for="name" class="flex items-center gap-2 text-sm font-medium">
                                        "Your Name"
                                    </label>
                                    <input
                                        id="name"
                                        name="name"
                                        type="text"
                                        placeholder="Enter your full name"
                                        required=true
                                        prop:value=move || form.with(|f| f.name.clone())
                                        on:input=move |ev| {
                                            form.update(|f| f.name = event_target_value(&ev))
                                        }
                                        class="w-full px-4 py-2 rounded-md border border-edge bg-background/50 focus:outline-none focus:ring-2 focus:ring-primary"
                                    />
                                </div>

                                <div class="space-y-2">
                                    <label for="email" class="flex items-center gap-2 text-sm font-medium">
                                        "Email Address"
                                    </label>
                                    <input
                                        id="email"
                                        name="email"
                                        type="email"
                                        placeholder="Enter your email address"
                                        required=true
                                        prop:value=move || form.with(|f| f.email.clone())
                                        on:input=move |ev| {
                                            form.update(|f| f.email = event_target_value(&ev))
                                        }
                                        class="w-full px-4 py-2 rounded-md border border-edge bg-background/50 focus:outline-none focus:ring-2 focus:ring-primary"
                                    />
                                </div>

                                <div class="space-y-2">
                                    <label for="message" class="flex items-center gap-2 text-sm font-medium">
                                        "Message"
                                    </label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        rows=6
                                        placeholder="Tell me about your project or opportunity..."
                                        required=true
                                        prop:value=move || form.with(|f| f.message.clone())
                                        on:input=move |ev| {
                                            form.update(|f| f.message = event_target_value(&ev))
                                        }
                                        class="w-full px-4 py-2 rounded-md border border-edge bg-background/50 focus:outline-none focus:ring-2 focus:ring-primary resize-none"
                                    ></textarea>
                                </div>

                                <button
                                    type="submit"
                                    prop:disabled=move || form.with(|f| f.in_flight())
                                    class="w-full flex justify-center items-center bg-primary hover:bg-primary/90 disabled:opacity-70 text-background py-4 text-lg font-semibold rounded-md interactive-hover"
                                >
                                    {move || {
                                        if form.with(|f| f.in_flight()) {
                                            Either::Left(
                                                view! { <span class="spinner" aria-hidden="true"></span> },
                                            )
                                        } else {
                                            Either::Right("Send Message")
                                        }
                                    }}
                                </button>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
            ..Default::default()
        }
    }

    /// Test transport that completes synchronously with a fixed outcome.
    #[derive(Clone)]
    struct ImmediateTransport {
        outcome: Result<(), DeliveryError>,
        deliveries: Rc<Cell<u32>>,
    }

    impl ImmediateTransport {
        fn new(outcome: Result<(), DeliveryError>) -> Self {
            Self {
                outcome,
                deliveries: Rc::new(Cell::new(0)),
            }
        }
    }

    impl MessageTransport for ImmediateTransport {
        fn deliver(
            &self,
            _message: ContactMessage,
            done: Box<dyn FnOnce(Result<(), DeliveryError>)>,
        ) {
            self.deliveries.set(self.deliveries.get() + 1);
            done(self.outcome.clone());
        }
    }

    #[test]
    fn begin_submit_captures_fields_and_blocks_reentry() {
        let mut form = filled_form();

        let message = form.begin_submit().expect("first submit should start");
        assert_eq!(message.name, "Ada");
        assert_eq!(message.email, "ada@example.com");
        assert_eq!(message.message, "Hello");
        assert!(form.in_flight());

        // A second submission while in flight is refused.
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn success_resets_all_fields() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.finish_submit(&Ok(()));

        assert!(!form.in_flight());
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn failure_keeps_fields_intact() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.finish_submit(&Err(DeliveryError::Transport("connection reset".into())));

        assert!(!form.in_flight());
        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.message, "Hello");
    }

    #[test]
    fn resubmission_allowed_after_completion() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.finish_submit(&Err(DeliveryError::Transport("timeout".into())));
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn transport_completes_exactly_once_per_submission() {
        let transport = ImmediateTransport::new(Ok(()));
        let completions = Rc::new(Cell::new(0));

        let mut form = filled_form();
        let message = form.begin_submit().unwrap();
        let counter = Rc::clone(&completions);
        transport.deliver(
            message,
            Box::new(move |outcome| {
                assert!(outcome.is_ok());
                counter.set(counter.get() + 1);
            }),
        );

        assert_eq!(transport.deliveries.get(), 1);
        assert_eq!(completions.get(), 1);
    }
}
