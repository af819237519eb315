//! History and tool controls exposed to the host.

use crate::draw::Color;
use crate::input::tool::ToolError;
use crate::util;

use super::InputState;

impl InputState {
    /// Undoes the most recent command. Ends any active stroke first.
    pub fn undo(&mut self) -> bool {
        self.end_stroke();
        let changed = self.log.undo();
        self.needs_redraw |= changed;
        changed
    }

    /// Re-applies the most recently undone command. Ends any active stroke first.
    pub fn redo(&mut self) -> bool {
        self.end_stroke();
        let changed = self.log.redo();
        self.needs_redraw |= changed;
        changed
    }

    /// Discards all committed and undone commands.
    pub fn clear(&mut self) {
        self.end_stroke();
        self.log.clear();
        self.needs_redraw = true;
    }

    /// Sets the brush width (clamped). Returns the width applied.
    pub fn set_width(&mut self, width: f64) -> Result<f64, ToolError> {
        let applied = self.tools.set_width(width)?;
        self.needs_redraw = true;
        Ok(applied)
    }

    /// Sets the sticker angle in degrees (wrapped into `[0, 360)`).
    pub fn set_angle(&mut self, degrees: f64) -> Result<f64, ToolError> {
        let applied = self.tools.set_angle(degrees)?;
        self.needs_redraw = true;
        Ok(applied)
    }

    pub fn set_color(&mut self, color: Color) {
        self.tools.set_color(color);
        log::debug!("Color set to {}", util::color_to_name(&color));
        self.needs_redraw = true;
    }

    /// Sets the color from hex input. Invalid input leaves the color unchanged.
    pub fn set_color_hex(&mut self, hex: &str) -> Result<Color, ToolError> {
        let color = self.tools.set_color_hex(hex)?;
        self.needs_redraw = true;
        Ok(color)
    }

    /// Activates the sticker tool with `glyph`.
    pub fn select_sticker(&mut self, glyph: &str) {
        self.end_stroke();
        self.tools.select_sticker(glyph);
        self.needs_redraw = true;
    }

    /// Switches back to the stroke tool.
    pub fn select_pen(&mut self) {
        self.tools.select_pen();
        self.needs_redraw = true;
    }

    /// Adds a glyph to the sticker palette. Returns its index.
    pub fn register_sticker(&mut self, glyph: &str) -> Result<usize, ToolError> {
        self.tools.register_sticker(glyph)
    }
}
