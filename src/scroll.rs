// src/scroll.rs
//
// Scroll plumbing shared by the navigation coordinator: the navbar style
// threshold, fixed-header offset math for smooth in-page scrolling, the body
// scroll lock used by the sidebar and the modals, and the reveal-on-scroll
// visibility check. The math is kept separate from the DOM calls so it can
// be tested directly.

use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Vertical scroll offset past which the navbar switches to its compact
/// "scrolled" style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;

/// Elements reveal once their top edge is this far inside the viewport.
pub const REVEAL_MARGIN: f64 = 60.0;

/// Threshold-crossing check for the navbar style. Returns the new state only
/// when the 100px line was actually crossed, so scroll events that stay on
/// one side of it write nothing.
pub fn navbar_crossing(scrolled: bool, scroll_y: f64) -> Option<bool> {
    let should_be = scroll_y > NAVBAR_SCROLL_THRESHOLD;
    (should_be != scrolled).then_some(should_be)
}

/// Document-relative scroll target for an in-page anchor: the element's
/// viewport-relative top plus the current scroll offset, minus the fixed
/// header so the section heading is not hidden behind it.
pub fn anchor_target(rect_top: f64, page_offset: f64, header_height: f64) -> f64 {
    (rect_top + page_offset - header_height).max(0.0)
}

/// One-shot reveal check: the element's top edge has scrolled far enough
/// into the viewport.
pub fn should_reveal(rect_top: f64, viewport_height: f64) -> bool {
    rect_top < viewport_height - REVEAL_MARGIN
}

/// Smoothly scroll to the section with the given id, compensating for the
/// fixed header, and record the anchor in the history without reloading.
/// Unknown ids are a no-op. The animation is fire-and-forget; a second
/// navigation simply restarts it towards the new target.
pub fn scroll_to_anchor(target_id: &str, header_height: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(element) = document.get_element_by_id(target_id) else {
        return;
    };

    let rect_top = element.get_bounding_client_rect().top();
    let page_offset = window.page_y_offset().unwrap_or(0.0);
    let top = anchor_target(rect_top, page_offset, header_height);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);

    if let Ok(history) = window.history() {
        let anchor = format!("#{}", target_id);
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&anchor));
    }
}

/// Suspend or restore page scrolling. The lock is a single flag on the body,
/// not a counter: whichever caller closes last restores scrolling for
/// everyone.
pub fn set_scroll_lock(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let result = if locked {
        body.style().set_property("overflow", "hidden")
    } else {
        body.style().remove_property("overflow").map(|_| ())
    };
    if result.is_err() {
        log::warn!("failed to toggle the body scroll lock");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_state_changes_only_on_crossing() {
        assert_eq!(navbar_crossing(false, 0.0), None);
        assert_eq!(navbar_crossing(false, 100.0), None);
        assert_eq!(navbar_crossing(false, 101.0), Some(true));
        assert_eq!(navbar_crossing(true, 250.0), None);
        assert_eq!(navbar_crossing(true, 40.0), Some(false));
    }

    #[test]
    fn anchor_target_subtracts_the_fixed_header() {
        assert_eq!(anchor_target(500.0, 1000.0, 80.0), 1420.0);
        assert_eq!(anchor_target(500.0, 0.0, 80.0), 420.0);
    }

    #[test]
    fn anchor_target_never_goes_negative() {
        assert_eq!(anchor_target(10.0, 0.0, 80.0), 0.0);
    }

    #[test]
    fn reveal_waits_for_the_margin() {
        assert!(should_reveal(500.0, 900.0));
        assert!(!should_reveal(850.0, 900.0));
        assert!(!should_reveal(840.0, 900.0));
        assert!(should_reveal(839.0, 900.0));
    }
}
