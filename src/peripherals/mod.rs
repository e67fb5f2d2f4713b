//! Memory-mapped I/O devices hung off the [`crate::bus::DeviceBus`].

pub mod char_output;
pub mod controller;
pub mod framebuffer;
pub mod number_display;
pub mod rng;

pub use char_output::CharOutput;
pub use controller::Controller;
pub use framebuffer::Framebuffer;
pub use number_display::NumberDisplay;
pub use rng::{RandomByteSource, Rng};
