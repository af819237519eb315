//! Undo/redo-capable log of committed drawing commands.

use std::collections::VecDeque;

use super::color::Color;
use super::command::{Command, Sticker, Stroke};
use super::point::Point;
use super::render;

/// Ordered store of everything drawn in the current session.
///
/// `committed` is replayed oldest first. `redo_buffer` holds undone commands,
/// most recently undone at the front. A command is in at most one of the two.
///
/// Every mutation that actually changes either sequence bumps the log's
/// generation, which the render loop and input adapter use as the "drawing
/// changed" signal.
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    committed: Vec<Command>,
    redo_buffer: VecDeque<Command>,
    /// Maximum number of committed commands (0 = unlimited)
    max_commands: usize,
    generation: u64,
}

impl CommandLog {
    /// Creates an empty, unlimited log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty log that refuses new commands past `max` (0 = unlimited).
    pub fn with_limit(max: usize) -> Self {
        Self {
            max_commands: max,
            ..Self::default()
        }
    }

    /// Starts a new stroke containing only `point`.
    ///
    /// Clears the redo buffer. Returns `false` if the command limit refused it.
    pub fn begin_stroke(&mut self, point: Point, width: f64, color: Color) -> bool {
        self.push_new(Stroke::new(point, width, color).into())
    }

    /// Appends `point` to the most recently committed stroke.
    ///
    /// Does nothing when the log is empty or the newest command is a sticker.
    /// The redo buffer is left alone: extending a stroke is not a new branch.
    pub fn extend_active_stroke(&mut self, point: Point) -> bool {
        match self.committed.last_mut() {
            Some(Command::Stroke(stroke)) => {
                stroke.push(point);
                self.touch();
                true
            }
            _ => false,
        }
    }

    /// Commits a sticker. Clears the redo buffer.
    pub fn commit_sticker(&mut self, sticker: Sticker) -> bool {
        self.push_new(sticker.into())
    }

    /// Moves the newest committed command to the front of the redo buffer.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(command) => {
                self.redo_buffer.push_front(command);
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Moves the most recently undone command back onto the committed list.
    pub fn redo(&mut self) -> bool {
        match self.redo_buffer.pop_front() {
            Some(command) => {
                self.committed.push(command);
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Empties both the committed list and the redo buffer.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo_buffer.clear();
        self.touch();
    }

    /// Replays every committed command onto `ctx`, oldest first.
    pub fn render_all(&self, ctx: &cairo::Context) {
        render::render_commands(ctx, &self.committed);
    }

    pub fn committed(&self) -> &[Command] {
        &self.committed
    }

    pub fn redo_buffer(&self) -> &VecDeque<Command> {
        &self.redo_buffer
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_buffer.is_empty()
    }

    /// Mutation counter; changes whenever the log content changes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn max_commands(&self) -> usize {
        self.max_commands
    }

    fn push_new(&mut self, command: Command) -> bool {
        if self.max_commands != 0 && self.committed.len() >= self.max_commands {
            log::warn!(
                "Command limit ({}) reached; discarding new command",
                self.max_commands
            );
            return false;
        }
        self.committed.push(command);
        self.redo_buffer.clear();
        self.touch();
        true
    }

    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}
