//! PNG export of the committed drawing.
//!
//! Exports replay the command log onto a fresh offscreen surface, so the cursor
//! preview never appears in the output and the live canvas is not touched.

pub mod file;
pub mod png;

pub use file::{expand_tilde, generate_filename, save_png, write_png};
pub use png::export_png;

use crate::draw::CanvasError;
use thiserror::Error;

/// Errors that can occur while exporting.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export scale must be at least 1, got {0}")]
    InvalidScale(u32),

    #[error("export of {width}x{height} at {scale}x is too large")]
    TooLarge { width: i32, height: i32, scale: u32 },

    #[error("failed to render export: {0}")]
    Canvas(#[from] CanvasError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
