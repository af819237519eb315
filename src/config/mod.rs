//! Configuration file support for boopadoop.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/boopadoop/config.toml`. Settings include drawing defaults,
//! cursor and sticker appearance, canvas size, export and playback options, and keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

pub use enums::ColorSpec;
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{
    CanvasConfig, CursorConfig, DrawingConfig, ExportConfig, PlaybackConfig, StickerConfig,
};

use crate::draw::{Color, CursorStyle, FontDescriptor};
use crate::input::ToolState;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "red"
/// default_width = 3.0
///
/// [stickers]
/// palette = ["✨", "🐸"]
/// size = 48.0
///
/// [export]
/// scale = 2
///
/// [keybindings]
/// undo = ["Ctrl+Z", "U"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Initial tool settings (color, width, angle) and command limit
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Cursor preview appearance
    #[serde(default)]
    pub cursor: CursorConfig,

    /// Sticker palette and stamp size
    #[serde(default)]
    pub stickers: StickerConfig,

    /// Default surface size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// PNG export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Script playback timing
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to their
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_width`: 1.0 - 20.0
    /// - `default_angle`: wrapped into 0 - 360
    /// - `cursor.size_scale`, `cursor.size_ratio`: positive
    /// - `stickers.size`: 8.0 - 256.0
    /// - `canvas.width`, `canvas.height`: 1 - 8192
    /// - `export.scale`: 1 - 16
    /// - `playback.fps`: 1 - 240
    pub fn validate_and_clamp(&mut self) {
        let defaults = Config::default();

        // Width: 1.0 - 20.0
        if !(1.0..=20.0).contains(&self.drawing.default_width) {
            log::warn!(
                "Invalid default_width {:.1}, clamping to 1.0-20.0 range",
                self.drawing.default_width
            );
            self.drawing.default_width = if self.drawing.default_width.is_nan() {
                defaults.drawing.default_width
            } else {
                self.drawing.default_width.clamp(1.0, 20.0)
            };
        }

        if !self.drawing.default_angle.is_finite() {
            log::warn!("Invalid default_angle, falling back to 0");
            self.drawing.default_angle = 0.0;
        }
        self.drawing.default_angle = self.drawing.default_angle.rem_euclid(360.0);

        if self.cursor.pen_glyph.trim().is_empty() {
            log::warn!(
                "Empty pen_glyph, falling back to '{}'",
                defaults.cursor.pen_glyph
            );
            self.cursor.pen_glyph = defaults.cursor.pen_glyph.clone();
        }

        if !(self.cursor.size_scale.is_finite() && self.cursor.size_scale > 0.0) {
            log::warn!(
                "Invalid cursor size_scale {}, falling back to {}",
                self.cursor.size_scale,
                defaults.cursor.size_scale
            );
            self.cursor.size_scale = defaults.cursor.size_scale;
        }

        if !(self.cursor.size_ratio.is_finite() && self.cursor.size_ratio > 0.0) {
            log::warn!(
                "Invalid cursor size_ratio {}, falling back to {}",
                self.cursor.size_ratio,
                defaults.cursor.size_ratio
            );
            self.cursor.size_ratio = defaults.cursor.size_ratio;
        }

        // Sticker size: 8.0 - 256.0
        if !(8.0..=256.0).contains(&self.stickers.size) {
            log::warn!(
                "Invalid sticker size {:.1}, clamping to 8.0-256.0 range",
                self.stickers.size
            );
            self.stickers.size = if self.stickers.size.is_nan() {
                defaults.stickers.size
            } else {
                self.stickers.size.clamp(8.0, 256.0)
            };
        }

        // Canvas: 1 - 8192 pixels per side
        if !(1..=8192).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(1, 8192);
        }
        if !(1..=8192).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(1, 8192);
        }

        // Export scale: 1 - 16
        if !(1..=16).contains(&self.export.scale) {
            log::warn!(
                "Invalid export scale {}, clamping to 1-16 range",
                self.export.scale
            );
            self.export.scale = self.export.scale.clamp(1, 16);
        }

        if self.export.filename_template.trim().is_empty() {
            log::warn!(
                "Empty filename_template, falling back to '{}'",
                defaults.export.filename_template
            );
            self.export.filename_template = defaults.export.filename_template;
        }

        // FPS: 1 - 240
        if !(1..=240).contains(&self.playback.fps) {
            log::warn!(
                "Invalid playback fps {}, clamping to 1-240 range",
                self.playback.fps
            );
            self.playback.fps = self.playback.fps.clamp(1, 240);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/boopadoop/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("boopadoop");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or if the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file is missing.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config directory.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;
        Self::create_default_file_at(&config_path)?;
        Ok(config_path)
    }

    /// Writes the example config to `config_path`.
    ///
    /// # Errors
    /// Returns an error if a file already exists at the target path, or if the
    /// directory or file cannot be written.
    pub fn create_default_file_at(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Tool state a new session starts with.
    pub fn initial_tool_state(&self) -> ToolState {
        ToolState::new(
            self.drawing.default_color.to_color(),
            self.drawing.default_width,
            self.drawing.default_angle,
            self.stickers.palette.clone(),
        )
    }

    /// Cursor preview appearance derived from `[cursor]` and `[stickers]`.
    pub fn cursor_style(&self) -> CursorStyle {
        CursorStyle {
            pen_glyph: self.cursor.pen_glyph.clone(),
            size_scale: self.cursor.size_scale,
            size_ratio: self.cursor.size_ratio,
            font: FontDescriptor::with_family(&self.cursor.font_family),
            sticker_size: self.stickers.size,
        }
    }

    /// Resolved canvas background, if one is configured.
    pub fn background(&self) -> Option<Color> {
        self.canvas.background.as_ref().map(ColorSpec::to_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.drawing.default_width, 1.0);
        assert_eq!(config.stickers.palette.len(), 3);
        assert_eq!(config.playback.fps, 60);
        assert!(config.background().is_none());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[drawing]\ndefault_color = \"#f00\"\n\n[canvas]\nbackground = \"white\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.default_color.to_color(), RED);
        assert_eq!(config.canvas.width, 256);
        assert!(config.background().is_some());
        assert_eq!(config.export.scale, 4);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[drawing]
default_width = 50.0
default_angle = 450.0

[cursor]
pen_glyph = "  "
size_ratio = -1.0

[export]
scale = 0

[playback]
fps = 1000
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.default_width, 20.0);
        assert_eq!(config.drawing.default_angle, 90.0);
        assert_eq!(config.cursor.pen_glyph, "*");
        assert_eq!(config.cursor.size_ratio, 0.25);
        assert_eq!(config.export.scale, 1);
        assert_eq!(config.playback.fps, 240);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[drawing\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn example_config_parses_and_matches_defaults() {
        let config: Config = toml::from_str(include_str!("../../config.example.toml")).unwrap();
        let defaults = Config::default();
        assert_eq!(config.drawing.default_width, defaults.drawing.default_width);
        assert_eq!(config.stickers.palette, defaults.stickers.palette);
        assert_eq!(config.export.filename_template, defaults.export.filename_template);
        assert!(config.keybindings.build_action_map().is_ok());
    }

    #[test]
    fn create_default_file_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        Config::create_default_file_at(&path).unwrap();
        assert!(path.exists());
        assert!(Config::create_default_file_at(&path).is_err());
    }

    #[test]
    fn initial_tool_state_follows_config() {
        let mut config = Config::default();
        config.drawing.default_width = 6.0;
        let tools = config.initial_tool_state();
        assert_eq!(tools.width(), 6.0);
        assert_eq!(tools.color(), BLACK);
        assert_eq!(tools.palette().len(), 3);
        assert_eq!(tools.sticker(), None);
        assert_eq!(config.cursor_style().sticker_size, 32.0);
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema.get("properties").unwrap();
        for section in ["drawing", "cursor", "stickers", "canvas", "export", "playback"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
