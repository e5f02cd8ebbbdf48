use crate::constants::PARALLAX_SHIFT_PX;
use glam::DVec2;

/// Client-space rectangle, as returned by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

pub const PARALLAX_REST_TRANSFORM: &str = "translate(0, 0)";
pub const PARALLAX_RESET_TRANSITION: &str = "transform 0.5s ease";

/// Offset of the hero image for a pointer at `client` over `rect`. The
/// pointer position is normalized to \[-0.5, 0.5\] around the rect center
/// and scaled by the shift; a zero-sized rect gives no shift.
#[inline]
pub fn parallax_offset(client: DVec2, rect: &ViewRect) -> DVec2 {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return DVec2::ZERO;
    }
    let x = (client.x - rect.left) / rect.width - 0.5;
    let y = (client.y - rect.top) / rect.height - 0.5;
    DVec2::new(x, y) * PARALLAX_SHIFT_PX
}

#[inline]
pub fn translate_css(offset: DVec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

#[inline]
pub fn css_px(v: f64) -> String {
    format!("{v}px")
}
