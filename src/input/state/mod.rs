mod actions;
mod controls;
mod core;
mod mouse;

pub use core::{DrawingState, InputState};
