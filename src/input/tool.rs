//! Drawing tool selection and brush parameters.

use crate::draw::color::{BLACK, Color, ColorError};
use thiserror::Error;

/// Narrowest brush the width control accepts.
pub const MIN_WIDTH: f64 = 1.0;
/// Widest brush the width control accepts.
pub const MAX_WIDTH: f64 = 20.0;

/// Drawing tool selection.
///
/// The active tool decides what a pointer gesture produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Freehand stroke following the pointer (default)
    #[default]
    Stroke,
    /// Stamp the selected sticker glyph on pointer release
    Sticker,
}

/// Rejected tool control input.
#[derive(Debug, Error, PartialEq)]
pub enum ToolError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("sticker glyph must not be empty")]
    EmptyGlyph,

    #[error("no sticker registered at index {0}")]
    UnknownSticker(usize),

    #[error("brush value must be a finite number, got {0}")]
    NotFinite(f64),
}

/// Current drawing-mode configuration.
///
/// Owned by the input adapter; read by the drawing path (to stamp new commands)
/// and by the cursor preview every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    tool: Tool,
    width: f64,
    angle: f64,
    color: Color,
    sticker: Option<String>,
    palette: Vec<String>,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(BLACK, MIN_WIDTH, 0.0, Vec::new())
    }
}

impl ToolState {
    /// Creates tool state with the stroke tool active and no sticker selected.
    ///
    /// Width is clamped and angle wrapped; blank palette entries are dropped.
    pub fn new(color: Color, width: f64, angle: f64, palette: Vec<String>) -> Self {
        let mut state = Self {
            tool: Tool::Stroke,
            width: MIN_WIDTH,
            angle: 0.0,
            color,
            sticker: None,
            palette: Vec::new(),
        };
        let _ = state.set_width(width);
        let _ = state.set_angle(angle);
        for glyph in palette {
            let _ = state.register_sticker(&glyph);
        }
        state
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Sticker rotation in degrees, always within `[0, 360)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Glyph stamped by the sticker tool, if one has been chosen.
    pub fn sticker(&self) -> Option<&str> {
        self.sticker.as_deref()
    }

    /// Registered sticker glyphs in button order.
    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Switches back to the freehand stroke tool.
    pub fn select_pen(&mut self) {
        self.tool = Tool::Stroke;
    }

    /// Sets the brush width, clamped to [`MIN_WIDTH`]..=[`MAX_WIDTH`].
    ///
    /// Returns the width actually applied.
    pub fn set_width(&mut self, width: f64) -> Result<f64, ToolError> {
        if !width.is_finite() {
            return Err(ToolError::NotFinite(width));
        }
        self.width = width.clamp(MIN_WIDTH, MAX_WIDTH);
        Ok(self.width)
    }

    /// Adjusts the width by `delta`, clamping like [`ToolState::set_width`].
    pub fn adjust_width(&mut self, delta: f64) -> f64 {
        let target = self.width + delta;
        self.set_width(target).unwrap_or(self.width)
    }

    /// Sets the sticker angle, wrapping into `[0, 360)`.
    pub fn set_angle(&mut self, degrees: f64) -> Result<f64, ToolError> {
        if !degrees.is_finite() {
            return Err(ToolError::NotFinite(degrees));
        }
        self.angle = degrees.rem_euclid(360.0);
        Ok(self.angle)
    }

    /// Rotates the sticker angle by `delta` degrees.
    pub fn rotate(&mut self, delta: f64) -> f64 {
        let target = self.angle + delta;
        self.set_angle(target).unwrap_or(self.angle)
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the color from a 3- or 6-digit hex string.
    ///
    /// Invalid input is logged and leaves the current color unchanged.
    pub fn set_color_hex(&mut self, hex: &str) -> Result<Color, ToolError> {
        match Color::from_hex(hex) {
            Ok(color) => {
                self.color = color;
                Ok(color)
            }
            Err(err) => {
                log::warn!("Ignoring color input: {err}");
                Err(err.into())
            }
        }
    }

    /// Activates the sticker tool with `glyph`.
    pub fn select_sticker(&mut self, glyph: &str) {
        self.tool = Tool::Sticker;
        self.sticker = Some(glyph.to_string());
    }

    /// Activates the sticker tool with the palette entry at `index`.
    pub fn select_palette_entry(&mut self, index: usize) -> Result<&str, ToolError> {
        let glyph = self
            .palette
            .get(index)
            .ok_or(ToolError::UnknownSticker(index))?
            .clone();
        self.select_sticker(&glyph);
        Ok(self.sticker.as_deref().unwrap_or_default())
    }

    /// Selects the palette entry after the current sticker, wrapping around.
    ///
    /// Returns `None` when the palette is empty.
    pub fn next_sticker(&mut self) -> Option<&str> {
        if self.palette.is_empty() {
            return None;
        }
        let next = match self.sticker.as_deref() {
            Some(current) if self.tool == Tool::Sticker => self
                .palette
                .iter()
                .position(|glyph| glyph == current)
                .map_or(0, |i| (i + 1) % self.palette.len()),
            _ => 0,
        };
        self.select_palette_entry(next).ok()
    }

    /// Adds a sticker glyph to the palette and returns its index.
    ///
    /// Surrounding whitespace is trimmed. Registering a glyph that already
    /// exists returns the existing index.
    pub fn register_sticker(&mut self, glyph: &str) -> Result<usize, ToolError> {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            log::warn!("Ignoring empty sticker glyph");
            return Err(ToolError::EmptyGlyph);
        }
        if let Some(index) = self.palette.iter().position(|g| g == glyph) {
            return Ok(index);
        }
        self.palette.push(glyph.to_string());
        log::debug!("Registered sticker '{}' at {}", glyph, self.palette.len() - 1);
        Ok(self.palette.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    #[test]
    fn width_is_clamped() {
        let mut tools = ToolState::default();
        assert_eq!(tools.set_width(0.0), Ok(MIN_WIDTH));
        assert_eq!(tools.set_width(35.0), Ok(MAX_WIDTH));
        assert_eq!(tools.set_width(7.5), Ok(7.5));
        assert_eq!(tools.adjust_width(100.0), MAX_WIDTH);
    }

    #[test]
    fn non_finite_width_is_rejected() {
        let mut tools = ToolState::default();
        tools.set_width(5.0).unwrap();
        assert!(matches!(tools.set_width(f64::NAN), Err(ToolError::NotFinite(_))));
        assert_eq!(tools.width(), 5.0);
    }

    #[test]
    fn angle_wraps() {
        let mut tools = ToolState::default();
        assert_eq!(tools.set_angle(370.0), Ok(10.0));
        assert_eq!(tools.set_angle(360.0), Ok(0.0));
        assert_eq!(tools.set_angle(-90.0), Ok(270.0));
        assert_eq!(tools.rotate(100.0), 10.0);
    }

    #[test]
    fn invalid_color_keeps_previous() {
        let mut tools = ToolState::default();
        tools.set_color(RED);
        assert!(matches!(
            tools.set_color_hex("#12345"),
            Err(ToolError::Color(ColorError::InvalidHex(_)))
        ));
        assert_eq!(tools.color(), RED);

        assert_eq!(tools.set_color_hex("#000").unwrap(), BLACK);
        assert_eq!(tools.color(), BLACK);
    }

    #[test]
    fn sticker_selection_switches_tool() {
        let mut tools = ToolState::default();
        assert_eq!(tools.sticker(), None);
        tools.select_sticker("🐸");
        assert_eq!(tools.tool(), Tool::Sticker);
        assert_eq!(tools.sticker(), Some("🐸"));

        tools.select_pen();
        assert_eq!(tools.tool(), Tool::Stroke);
        // The glyph stays selected for the next time the sticker tool is used.
        assert_eq!(tools.sticker(), Some("🐸"));
    }

    #[test]
    fn register_sticker_rejects_blank_and_dedupes() {
        let mut tools = ToolState::new(BLACK, 1.0, 0.0, vec!["✨".into(), " ".into()]);
        assert_eq!(tools.palette(), &["✨".to_string()]);
        assert_eq!(tools.register_sticker("   "), Err(ToolError::EmptyGlyph));
        assert_eq!(tools.register_sticker(" 🌮 "), Ok(1));
        assert_eq!(tools.register_sticker("✨"), Ok(0));
        assert_eq!(tools.palette().len(), 2);
    }

    #[test]
    fn next_sticker_cycles_palette() {
        let mut tools = ToolState::new(BLACK, 1.0, 0.0, vec!["a".into(), "b".into()]);
        assert_eq!(tools.next_sticker(), Some("a"));
        assert_eq!(tools.next_sticker(), Some("b"));
        assert_eq!(tools.next_sticker(), Some("a"));
        assert_eq!(tools.select_palette_entry(5), Err(ToolError::UnknownSticker(5)));
    }
}
