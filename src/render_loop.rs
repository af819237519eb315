//! Per-frame redraw of the canvas from the command log.

use crate::draw::{Canvas, CanvasError, Color, clear_surface, fill_background};
use crate::input::InputState;
use log::debug;

/// Repaints the canvas once per tick.
///
/// Every tick clears the surface, fills the optional background, replays the
/// committed log and draws the cursor preview on top. Nothing is cached between
/// frames, so the preview never leaves trails.
#[derive(Debug, Default)]
pub struct RenderLoop {
    background: Option<Color>,
    frames: u64,
    last_generation: Option<u64>,
}

impl RenderLoop {
    pub fn new(background: Option<Color>) -> Self {
        Self {
            background,
            frames: 0,
            last_generation: None,
        }
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Redraws `canvas` from `input` and clears its redraw flag.
    ///
    /// # Errors
    /// Returns an error if a drawing context cannot be created for the canvas.
    pub fn tick(&mut self, canvas: &Canvas, input: &mut InputState) -> Result<(), CanvasError> {
        let ctx = canvas.context()?;

        clear_surface(&ctx);
        if let Some(background) = self.background {
            fill_background(&ctx, background);
        }

        input.log().render_all(&ctx);
        input.cursor().render(&ctx, input.tools());

        let generation = input.log().generation();
        if self.last_generation != Some(generation) {
            let log = input.log();
            debug!(
                "Frame {}: log changed ({} commands, generation {}, undo {}, redo {})",
                self.frames,
                log.len(),
                generation,
                log.can_undo(),
                log.can_redo()
            );
            self.last_generation = Some(generation);
        }

        input.needs_redraw = false;
        self.frames += 1;
        Ok(())
    }
}
