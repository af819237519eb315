//! Headless host: replays recorded input scripts on a timer-driven event loop.

pub mod player;
pub mod script;

pub use player::{PlaybackReport, Player};
pub use script::{Script, ScriptError, ScriptEvent};
