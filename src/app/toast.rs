use std::time::Duration;

use leptos::prelude::*;

/// How long a toast stays on screen before auto-dismissing.
const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub detail: String,
}

/// Single-slot toast queue: the newest toast replaces whatever is showing.
///
/// Ids are monotonic so the dismiss scheduled for a replaced toast cannot
/// take down its successor.
#[derive(Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    current: Option<Toast>,
}

impl ToastQueue {
    pub fn push(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(Toast {
            id,
            kind,
            title: title.into(),
            detail: detail.into(),
        });
        id
    }

    /// Clears the toast with `id` if it is still showing. Dismissing a toast
    /// that was already replaced or cleared is a no-op.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

/// Handle for raising fire-and-forget notifications from anywhere under
/// [`provide_toasts`].
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
}

impl Toasts {
    pub fn success(&self, title: &str, detail: &str) {
        self.show(ToastKind::Success, title, detail);
    }

    pub fn error(&self, title: &str, detail: &str) {
        self.show(ToastKind::Error, title, detail);
    }

    fn show(&self, kind: ToastKind, title: &str, detail: &str) {
        let queue = self.queue;
        if let Some(id) = queue.try_update(|q| q.push(kind, title, detail)) {
            set_timeout(
                move || {
                    queue.try_update(|q| q.dismiss(id));
                },
                TOAST_DURATION,
            );
        }
    }
}

pub fn provide_toasts() {
    provide_context(Toasts {
        queue: RwSignal::new(ToastQueue::default()),
    });
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="fixed bottom-6 right-6 z-50">
            {move || {
                toasts
                    .queue
                    .with(|q| q.current().cloned())
                    .map(|toast| {
                        let tone = match toast.kind {
                            ToastKind::Success => "toast-success",
                            ToastKind::Error => "toast-error",
                        };
                        view! {
                            <div class=format!("toast {tone}") role="status">
                                <p class="font-semibold">{toast.title}</p>
                                <p class="text-sm opacity-80">{toast.detail}</p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_replaces_current() {
        let mut queue = ToastQueue::default();
        queue.push(ToastKind::Success, "first", "");
        let second = queue.push(ToastKind::Error, "second", "");

        let current = queue.current().expect("a toast should be showing");
        assert_eq!(current.id, second);
        assert_eq!(current.title, "second");
        assert_eq!(current.kind, ToastKind::Error);
    }

    #[test]
    fn dismiss_clears_matching_toast() {
        let mut queue = ToastQueue::default();
        let id = queue.push(ToastKind::Success, "hello", "");
        queue.dismiss(id);
        assert!(queue.current().is_none());

        // Dismissing again is a no-op.
        queue.dismiss(id);
        assert!(queue.current().is_none());
    }

    #[test]
    fn stale_dismiss_leaves_newer_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "first", "");
        let second = queue.push(ToastKind::Success, "second", "");

        queue.dismiss(first);
        assert_eq!(queue.current().map(|t| t.id), Some(second));
    }
}
