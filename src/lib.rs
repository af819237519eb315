//! Library exports for the boopadoop sketchpad.
//!
//! The drawing model (command log, tool state, cursor preview) lives here so the
//! playback binary, the schema dumper and integration tests share one
//! implementation.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod playback;
pub mod render_loop;
pub mod util;

pub use config::Config;
