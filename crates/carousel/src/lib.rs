//! Responsive carousel layout and paging.
//!
//! The engine lays out a horizontally scrollable row of cards so that a whole
//! number of cards fills the viewport, pages by exactly one viewport width and
//! keeps the scroll offset snapped to page boundaries across resizes. It never
//! touches the DOM: callers feed it measurements and apply the
//! [`ScrollCommand`]s and [`ArrowState`]s it returns.

pub mod breakpoints;
pub mod config;
pub mod engine;
pub mod keyboard;
pub mod layout;
pub mod state;

pub use breakpoints::*;
pub use config::*;
pub use engine::*;
pub use keyboard::*;
pub use layout::*;
pub use state::*;
