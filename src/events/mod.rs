pub mod nav;
pub mod pointer;
pub mod scroll;

pub use nav::wire_nav_menu;
pub use pointer::{wire_cursor_glow, wire_parallax};
pub use scroll::{wire_back_to_top, wire_scroll_state, wire_smooth_anchors};
