use web_sys::{ScrollBehavior, ScrollToOptions};

/// Height of the fixed header, subtracted so anchored sections are not
/// covered by it.
pub const HEADER_OFFSET: f64 = 80.0;

/// Scroll depth past which the header switches to its opaque treatment.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

/// Viewport width above which the burger menu no longer applies.
pub const MOBILE_BREAKPOINT: f64 = 968.0;

/// Absolute document position to scroll to for an anchor target, given the
/// target's viewport-relative top and the current scroll offset.
pub fn anchor_target_y(element_top: f64, page_y_offset: f64) -> f64 {
    element_top + page_y_offset - HEADER_OFFSET
}

pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

/// Whether the mobile menu may stay open after the viewport resizes.
pub fn menu_open_after_resize(open: bool, viewport_width: f64) -> bool {
    open && viewport_width <= MOBILE_BREAKPOINT
}

/// Smooth-scrolls to the element with the given id, compensating for the
/// fixed header. Unknown ids are a no-op.
pub fn scroll_to_anchor(id: &str) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(target) = document.get_element_by_id(id) else { return };

    let element_top = target.get_bounding_client_rect().top();
    let page_y_offset = window.page_y_offset().unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(anchor_target_y(element_top, page_y_offset));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_compensates_for_the_header() {
        // Section 500px down the viewport, page already scrolled 200px.
        assert_eq!(anchor_target_y(500.0, 200.0), 620.0);
    }

    #[test]
    fn anchor_above_the_fold_scrolls_up() {
        assert_eq!(anchor_target_y(-300.0, 1000.0), 620.0);
    }

    #[test]
    fn header_threshold_is_exclusive() {
        assert!(!header_is_scrolled(0.0));
        assert!(!header_is_scrolled(100.0));
        assert!(header_is_scrolled(100.5));
    }

    #[test]
    fn resize_above_breakpoint_forces_menu_closed() {
        assert!(!menu_open_after_resize(true, 969.0));
        assert!(!menu_open_after_resize(true, 1920.0));
        assert!(menu_open_after_resize(true, 968.0));
        assert!(menu_open_after_resize(true, 375.0));
        assert!(!menu_open_after_resize(false, 375.0));
    }
}
