//! Drawing commands: the units stored in the command log.

use super::color::Color;
use super::point::Point;
use super::render;

/// Freehand polyline traced between pointer-down and pointer-up.
///
/// The stroke is stamped with the width and color active when it was started,
/// so replaying it never depends on the tool state at replay time.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Points in the order they were traced (never empty)
    pub points: Vec<Point>,
    /// Line width in pixels
    pub width: f64,
    /// Line color
    pub color: Color,
}

impl Stroke {
    /// Starts a stroke at `start`.
    pub fn new(start: Point, width: f64, color: Color) -> Self {
        Self {
            points: vec![start],
            width,
            color,
        }
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Number of straight segments this stroke renders.
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

/// A glyph stamped onto the surface at a single anchor point.
#[derive(Clone, Debug, PartialEq)]
pub struct Sticker {
    /// Anchor the glyph is centered on
    pub location: Point,
    /// Text to draw (usually a single emoji)
    pub glyph: String,
    /// Font size in pixels
    pub size: f64,
    /// Rotation about the anchor, in degrees
    pub angle: f64,
}

impl Sticker {
    pub fn new(location: Point, glyph: impl Into<String>, size: f64, angle: f64) -> Self {
        Self {
            location,
            glyph: glyph.into(),
            size,
            angle,
        }
    }
}

/// A self-contained renderable unit of drawing state.
///
/// Each variant stores every style attribute it needs to render itself.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Command {
    /// Renders this command onto `ctx` using only its own stored style.
    pub fn render(&self, ctx: &cairo::Context) {
        match self {
            Command::Stroke(stroke) => render::render_stroke(ctx, stroke),
            Command::Sticker(sticker) => render::render_sticker(ctx, sticker),
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Command::Stroke(stroke) => Some(stroke),
            Command::Sticker(_) => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Command::Sticker(sticker) => Some(sticker),
            Command::Stroke(_) => None,
        }
    }
}

impl From<Stroke> for Command {
    fn from(stroke: Stroke) -> Self {
        Command::Stroke(stroke)
    }
}

impl From<Sticker> for Command {
    fn from(sticker: Sticker) -> Self {
        Command::Sticker(sticker)
    }
}
