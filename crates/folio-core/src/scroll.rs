use crate::constants::*;

#[inline]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_OFFSET
}

#[inline]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_OFFSET
}

/// Pointer-driven effects only run on wide viewports.
#[inline]
pub fn is_desktop(inner_width: f64) -> bool {
    inner_width > DESKTOP_MIN_WIDTH
}

/// A nav link is active when it points at the section in view.
pub fn link_targets_section(href: Option<&str>, section_id: &str) -> bool {
    match href.and_then(|h| h.strip_prefix('#')) {
        Some(rest) => rest == section_id,
        None => false,
    }
}

/// Selector for an in-page anchor, or `None` when the click should keep its
/// default behavior (bare `#` or not a fragment link).
pub fn anchor_selector(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}
