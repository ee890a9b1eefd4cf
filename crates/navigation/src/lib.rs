//! Scroll-container navigation: header-aware anchor scrolling, one-way section
//! reveal, scrollspy and the reduced-motion guard.

pub mod anchor;
pub mod motion;
pub mod reveal;
pub mod scrollspy;

pub use anchor::*;
pub use motion::*;
pub use reveal::*;
pub use scrollspy::*;
