//! JSON input scripts.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid canvas size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
}

/// One recorded host event.
///
/// Serialized as an object tagged by `"type"`, for example
/// `{"type": "pointer_move", "x": 10, "y": 20}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    PointerLeave,
    Undo,
    Redo,
    Clear,
    SetWidth { value: f64 },
    SetAngle { value: f64 },
    SetColor { value: String },
    SelectPen,
    SelectSticker { glyph: String },
    RegisterSticker { glyph: String },
    KeyPress { key: String },
    KeyRelease { key: String },
    /// Ends the current frame and idles for `frames` more
    Wait { frames: u32 },
    /// Snapshot the drawing as PNG
    Export,
}

/// A canvas size plus the events to replay on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Canvas width; the configured default when absent
    #[serde(default)]
    pub width: Option<i32>,
    /// Canvas height; the configured default when absent
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Parses a script from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ScriptError> {
        let script: Script = serde_json::from_str(text)?;
        let (width, height) = (script.width.unwrap_or(1), script.height.unwrap_or(1));
        if width <= 0 || height <= 0 {
            return Err(ScriptError::InvalidSize { width, height });
        }
        Ok(script)
    }

    /// Reads and parses the script at `path`.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let script = Self::from_json(&text)?;
        log::info!(
            "Loaded script {} ({} events)",
            path.display(),
            script.events.len()
        );
        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_events() {
        let script = Script::from_json(
            r##"{
                "width": 64,
                "height": 32,
                "events": [
                    {"type": "pointer_down", "x": 1, "y": 2.5},
                    {"type": "set_color", "value": "#f00"},
                    {"type": "select_sticker", "glyph": "🐸"},
                    {"type": "key_press", "key": "Ctrl"},
                    {"type": "wait", "frames": 3},
                    {"type": "undo"}
                ]
            }"##,
        )
        .unwrap();

        assert_eq!(script.width, Some(64));
        assert_eq!(script.events.len(), 6);
        assert_eq!(script.events[0], ScriptEvent::PointerDown { x: 1.0, y: 2.5 });
        assert_eq!(
            script.events[1],
            ScriptEvent::SetColor {
                value: "#f00".to_string()
            }
        );
        assert_eq!(script.events[4], ScriptEvent::Wait { frames: 3 });
        assert_eq!(script.events[5], ScriptEvent::Undo);
    }

    #[test]
    fn size_is_optional() {
        let script = Script::from_json(r#"{"events": []}"#).unwrap();
        assert_eq!(script.width, None);
        assert!(script.events.is_empty());
    }

    #[test]
    fn rejects_unknown_event_types() {
        let err = Script::from_json(r#"{"events": [{"type": "teleport"}]}"#).unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn rejects_non_positive_size() {
        let err = Script::from_json(r#"{"width": 0, "height": 10}"#).unwrap_err();
        assert!(matches!(
            err,
            ScriptError::InvalidSize {
                width: 0,
                height: 10
            }
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Script::load(Path::new("/nonexistent/script.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/script.json"));
    }
}
