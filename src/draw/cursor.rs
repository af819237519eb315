//! Per-frame pointer indicator that is never committed to the log.

use super::command::Sticker;
use super::font::FontDescriptor;
use super::point::Point;
use super::render;
use crate::input::{Tool, ToolState};

/// Default glyph shown under the pointer while the stroke tool is active.
pub const DEFAULT_PEN_GLYPH: &str = "*";

/// Appearance settings for the cursor preview.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorStyle {
    /// Glyph drawn for the stroke tool
    pub pen_glyph: String,
    /// `k` in `size = k * ln(width / r)`
    pub size_scale: f64,
    /// `r` in `size = k * ln(width / r)`
    pub size_ratio: f64,
    /// Font used for the pen glyph
    pub font: FontDescriptor,
    /// Size at which the selected sticker is previewed
    pub sticker_size: f64,
}

impl Default for CursorStyle {
    fn default() -> Self {
        Self {
            pen_glyph: DEFAULT_PEN_GLYPH.to_string(),
            size_scale: 8.0,
            size_ratio: 0.25,
            font: FontDescriptor::default(),
            sticker_size: 32.0,
        }
    }
}

impl CursorStyle {
    /// Pen glyph size for a brush `width`.
    ///
    /// Logarithmic so that steps at thin widths are visible and thick widths
    /// level off. Never smaller than one pixel.
    pub fn pen_glyph_size(&self, width: f64) -> f64 {
        if width <= 0.0 || self.size_ratio <= 0.0 {
            return 1.0;
        }
        (self.size_scale * (width / self.size_ratio).ln()).max(1.0)
    }
}

/// Current pointer location plus how to draw it.
#[derive(Debug, Clone, Default)]
pub struct CursorPreview {
    location: Option<Point>,
    style: CursorStyle,
}

impl CursorPreview {
    pub fn new(style: CursorStyle) -> Self {
        Self {
            location: None,
            style,
        }
    }

    pub fn location(&self) -> Option<Point> {
        self.location
    }

    pub fn set_location(&mut self, point: Point) {
        self.location = Some(point);
    }

    /// Hides the preview (pointer left the surface).
    pub fn clear_location(&mut self) {
        self.location = None;
    }

    pub fn style(&self) -> &CursorStyle {
        &self.style
    }

    /// Draws the indicator for the live tool state at the current location.
    pub fn render(&self, ctx: &cairo::Context, tools: &ToolState) {
        let Some(location) = self.location else {
            return;
        };

        match tools.tool() {
            Tool::Stroke => {
                let size = self.style.pen_glyph_size(tools.width());
                render::render_centered_glyph(
                    ctx,
                    &self.style.pen_glyph,
                    location,
                    size,
                    &self.style.font,
                    tools.color(),
                );
            }
            Tool::Sticker => {
                // Same path as the stamped command, so the preview matches it.
                if let Some(glyph) = tools.sticker() {
                    let sticker =
                        Sticker::new(location, glyph, self.style.sticker_size, tools.angle());
                    render::render_sticker(ctx, &sticker);
                }
            }
        }
    }
}
