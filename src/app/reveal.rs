use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

/// How much of a section must intersect the viewport before it counts as seen.
const REVEAL_THRESHOLD: f64 = 0.15;

const STAGGER_STEP_MS: u32 = 100;

/// One-shot visibility state for a mounted section.
///
/// `Revealed` is terminal: scrolling a section back out of the viewport never
/// un-reveals it, so entrance animations play at most once per mount. A
/// section that is never scrolled to stays `Hidden` forever, which is correct
/// behavior rather than a failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Hidden,
    Revealed,
}

impl Reveal {
    pub fn reveal(&mut self) {
        *self = Reveal::Revealed;
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, Reveal::Revealed)
    }

    /// Entrance classes for an animated element. `animation` names the hidden
    /// baseline (see input.css); `revealed` switches the transition on.
    pub fn class(self, animation: &str) -> String {
        if self.is_revealed() {
            format!("{animation} revealed")
        } else {
            animation.to_string()
        }
    }
}

/// Observes `target` and returns a signal that flips to [`Reveal::Revealed`]
/// the first time the element intersects the viewport. The observer
/// disconnects after the first hit.
pub fn use_reveal(target: NodeRef<html::Section>) -> Signal<Reveal> {
    let (reveal, set_reveal) = signal(Reveal::default());

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_reveal.update(Reveal::reveal);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    Effect::new(move |_| {
        if reveal.get().is_revealed() {
            stop();
        }
    });

    reveal.into()
}

/// Transition delay for the `index`-th item of a staggered list. Only the
/// ordering is contractual: later items never animate before earlier ones.
/// The step size is cosmetic.
pub fn stagger_ms(index: usize) -> u32 {
    index as u32 * STAGGER_STEP_MS
}

/// Inline `transition-delay` style for staggered children.
pub fn stagger_style(index: usize) -> String {
    format!("transition-delay: {}ms", stagger_ms(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_starts_hidden() {
        assert_eq!(Reveal::default(), Reveal::Hidden);
        assert!(!Reveal::default().is_revealed());
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut state = Reveal::default();
        state.reveal();
        assert!(state.is_revealed());

        // Further intersection events (enter or exit) keep it revealed.
        state.reveal();
        assert!(state.is_revealed());
    }

    #[test]
    fn entrance_class_toggles_on_reveal() {
        assert_eq!(Reveal::Hidden.class("reveal-up"), "reveal-up");
        assert_eq!(Reveal::Revealed.class("reveal-up"), "reveal-up revealed");
    }

    #[test]
    fn stagger_delays_increase_with_index() {
        let delays = (0..8).map(stagger_ms).collect::<Vec<_>>();
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(delays[0], 0);
    }
}
