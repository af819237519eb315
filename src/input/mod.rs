//! Input handling and tool state.
//!
//! This module translates host pointer, keyboard and control events into
//! command log mutations. It maintains the current tool state (color, width,
//! angle, sticker palette), the cursor preview and the active stroke marker.

pub mod events;
pub mod modifiers;
pub mod state;
pub mod tool;

pub use events::Key;
pub use modifiers::Modifiers;
pub use state::{DrawingState, InputState};
pub use tool::{Tool, ToolError, ToolState};
