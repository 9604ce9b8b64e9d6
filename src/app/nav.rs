use leptos::prelude::*;

/// Scrolls the viewport to the section with the given element id.
///
/// Targets must match the section root ids exactly; an id with no matching
/// element is a silent no-op rather than an error. Smooth behavior comes from
/// `scroll-behavior: smooth` on the document root.
pub fn scroll_to(id: &str) {
    if let Some(el) = document().get_element_by_id(id) {
        el.scroll_into_view();
    }
}
