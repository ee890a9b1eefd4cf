pub mod debounce;
pub mod frame_gate;
pub mod hold;

pub use debounce::*;
pub use frame_gate::*;
pub use hold::*;
