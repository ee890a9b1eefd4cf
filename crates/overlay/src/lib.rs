//! Modal overlays: the embedded video player and the image lightbox.
//!
//! Each overlay is a two-state machine. Transitions return the ordered list of
//! [`Effect`]s the DOM layer must apply; the rendered state is available as an
//! [`OverlayView`] projection.

pub mod lightbox;
pub mod links;
pub mod machine;
pub mod thumbnail;
pub mod video;
pub mod youtube;

pub use lightbox::*;
pub use links::*;
pub use machine::*;
pub use thumbnail::*;
pub use video::*;
pub use youtube::*;
