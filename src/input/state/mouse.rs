use crate::draw::{Point, Sticker};
use crate::input::tool::Tool;

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a pointer press.
    ///
    /// With the stroke tool this commits a one-point stroke in the current
    /// width and color and starts extending it. The sticker tool acts on release.
    pub fn on_pointer_down(&mut self, point: Point) {
        self.needs_redraw = true;

        if self.tools.tool() != Tool::Stroke {
            return;
        }

        if self
            .log
            .begin_stroke(point, self.tools.width(), self.tools.color())
        {
            self.state = DrawingState::Drawing;
        } else {
            self.state = DrawingState::Idle;
        }
    }

    /// Processes pointer motion. Extends the active stroke, if any, and moves the cursor.
    pub fn on_pointer_move(&mut self, point: Point) {
        if self.state == DrawingState::Drawing && !self.log.extend_active_stroke(point) {
            self.state = DrawingState::Idle;
        }
        self.cursor.set_location(point);
        self.needs_redraw = true;
    }

    /// Processes a pointer release.
    ///
    /// Finishes the active stroke with `point`. With the sticker tool, stamps the
    /// selected glyph at `point` if the pointer is over the surface. Only motion
    /// moves the cursor, so a release after the pointer left keeps it hidden.
    pub fn on_pointer_up(&mut self, point: Point) {
        if self.state == DrawingState::Drawing {
            self.log.extend_active_stroke(point);
            self.state = DrawingState::Idle;
        } else if self.tools.tool() == Tool::Sticker && self.cursor.location().is_some() {
            if let Some(glyph) = self.tools.sticker() {
                let sticker = Sticker::new(
                    point,
                    glyph,
                    self.cursor.style().sticker_size,
                    self.tools.angle(),
                );
                self.log.commit_sticker(sticker);
            }
        }
        self.needs_redraw = true;
    }

    /// Processes the pointer leaving the surface. Hides the cursor preview.
    pub fn on_pointer_leave(&mut self) {
        self.cursor.clear_location();
        self.needs_redraw = true;
    }
}
