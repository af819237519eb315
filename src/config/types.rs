//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool state a session starts with. Users can change these
/// values at runtime using keybindings or script events.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default pen color - a named color (red, green, blue, yellow, orange, pink, white, black),
    /// a hex string like `"#ff0000"`, or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default brush width in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_width")]
    pub default_width: f64,

    /// Default sticker rotation in degrees (wrapped into 0 - 360)
    #[serde(default)]
    pub default_angle: f64,

    /// Maximum number of committed commands (0 = unlimited)
    #[serde(default)]
    pub max_commands: usize,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
            default_angle: 0.0,
            max_commands: 0,
        }
    }
}

/// Cursor preview appearance.
///
/// The pen glyph is drawn at `size_scale * ln(width / size_ratio)` pixels so
/// that width steps stay visible at small sizes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CursorConfig {
    /// Glyph shown under the pointer while the stroke tool is active
    #[serde(default = "default_pen_glyph")]
    pub pen_glyph: String,

    /// Multiplier applied to the logarithmic size curve
    #[serde(default = "default_size_scale")]
    pub size_scale: f64,

    /// Width at which the size curve crosses zero (must be positive)
    #[serde(default = "default_size_ratio")]
    pub size_ratio: f64,

    /// Font family used for the pen glyph
    #[serde(default = "default_font_family")]
    pub font_family: String,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            pen_glyph: default_pen_glyph(),
            size_scale: default_size_scale(),
            size_ratio: default_size_ratio(),
            font_family: default_font_family(),
        }
    }
}

/// Sticker palette settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StickerConfig {
    /// Glyphs registered at startup, in button order
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    /// Size of stamped stickers in pixels (valid range: 8.0 - 256.0)
    #[serde(default = "default_sticker_size")]
    pub size: f64,
}

impl Default for StickerConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            size: default_sticker_size(),
        }
    }
}

/// Drawing surface settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels when a script does not specify one
    #[serde(default = "default_canvas_size")]
    pub width: i32,

    /// Surface height in pixels when a script does not specify one
    #[serde(default = "default_canvas_size")]
    pub height: i32,

    /// Optional fill painted under the strokes; transparent when unset
    #[serde(default)]
    pub background: Option<ColorSpec>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
            background: None,
        }
    }
}

/// PNG export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Resolution multiplier applied to the canvas size (valid range: 1 - 16)
    #[serde(default = "default_export_scale")]
    pub scale: u32,

    /// Directory exports are written to (`~` is expanded)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// chrono format string for export filenames (without extension)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: default_export_scale(),
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
        }
    }
}

/// Script playback settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PlaybackConfig {
    /// Frames per second for the playback timer (valid range: 1 - 240)
    #[serde(default = "default_fps")]
    pub fps: u32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { fps: default_fps() }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_width() -> f64 {
    1.0
}

fn default_pen_glyph() -> String {
    crate::draw::cursor::DEFAULT_PEN_GLYPH.to_string()
}

fn default_size_scale() -> f64 {
    8.0
}

fn default_size_ratio() -> f64 {
    0.25
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_palette() -> Vec<String> {
    vec!["✨".to_string(), "🐸".to_string(), "🌮".to_string()]
}

fn default_sticker_size() -> f64 {
    32.0
}

fn default_canvas_size() -> i32 {
    256
}

fn default_export_scale() -> u32 {
    4
}

fn default_save_directory() -> String {
    "~/Pictures/Boopadoop".to_string()
}

fn default_filename_template() -> String {
    "sketch_%Y-%m-%d_%H%M%S".to_string()
}

fn default_fps() -> u32 {
    60
}
