//! Platform-free core of the portfolio hero page: the particle field
//! simulator plus the small state machines behind the page effects.
//! Everything here runs on the host; the web front end only wires it to the DOM.

pub mod color;
pub mod config;
pub mod constants;
pub mod counter;
pub mod field;
pub mod input;
pub mod particle;
pub mod reveal;
pub mod scroll;
pub mod surface;
pub mod task;
pub mod typing;

pub use color::*;
pub use config::*;
pub use counter::*;
pub use field::*;
pub use particle::*;
pub use surface::*;
pub use task::*;
pub use typing::*;
