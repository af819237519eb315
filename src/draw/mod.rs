//! Drawing commands, the command log and Cairo rendering.
//!
//! This module defines the core drawing types of a sketch:
//! - [`Color`]: RGBA color with hex parsing and predefined constants
//! - [`Command`]: a committed [`Stroke`] or [`Sticker`], each carrying its own style
//! - [`CommandLog`]: committed commands plus the redo buffer
//! - [`CursorPreview`]: the per-frame pointer indicator
//! - [`Canvas`] and rendering functions for Cairo-based output

pub mod canvas;
pub mod color;
pub mod command;
pub mod command_log;
pub mod cursor;
pub mod font;
pub mod point;
pub mod render;

// Re-export commonly used types at module level
pub use canvas::{Canvas, CanvasError};
pub use color::{Color, ColorError};
pub use command::{Command, Sticker, Stroke};
pub use command_log::CommandLog;
pub use cursor::{CursorPreview, CursorStyle};
pub use font::FontDescriptor;
pub use point::Point;
pub use render::{clear_surface, fill_background, render_commands};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
