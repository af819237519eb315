//! Drawing state machine and input state management.

use crate::config::{Action, Config, KeyBinding};
use crate::draw::{CommandLog, CursorPreview, CursorStyle};
use crate::input::{modifiers::Modifiers, tool::ToolState};
use anyhow::{Context, Result};
use std::collections::HashMap;

/// Whether a stroke is being extended by pointer motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// Not actively drawing - waiting for a pointer press
    Idle,
    /// The last committed command is a stroke still receiving points
    Drawing,
}

/// Main input state containing all drawing session state.
///
/// Owns the command log, the tool state and the cursor preview. Pointer,
/// keyboard and control events mutate it synchronously; the render loop
/// borrows it once per frame.
pub struct InputState {
    pub(super) log: CommandLog,
    pub(super) tools: ToolState,
    pub(super) cursor: CursorPreview,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Active stroke marker
    pub state: DrawingState,
    /// Whether an exit was requested (Exit keybinding)
    pub should_exit: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    pub(super) export_requested: bool,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
}

impl InputState {
    /// Creates a new InputState with specified defaults.
    ///
    /// # Arguments
    /// * `tools` - Initial tool state (color, width, angle, palette)
    /// * `cursor_style` - Cursor preview appearance
    /// * `action_map` - Keybinding action map
    /// * `max_commands` - Command log limit (0 = unlimited)
    pub fn with_defaults(
        tools: ToolState,
        cursor_style: CursorStyle,
        action_map: HashMap<KeyBinding, Action>,
        max_commands: usize,
    ) -> Self {
        let command_log = CommandLog::with_limit(max_commands);
        if command_log.max_commands() != 0 {
            log::debug!("Command log limited to {} commands", command_log.max_commands());
        }

        Self {
            log: command_log,
            tools,
            cursor: CursorPreview::new(cursor_style),
            modifiers: Modifiers::new(),
            state: DrawingState::Idle,
            should_exit: false,
            needs_redraw: true,
            export_requested: false,
            action_map,
        }
    }

    /// Builds the session state described by `config`.
    ///
    /// # Errors
    /// Returns an error if a keybinding cannot be parsed or is bound twice.
    pub fn from_config(config: &Config) -> Result<Self> {
        let action_map = config
            .keybindings
            .build_action_map()
            .map_err(anyhow::Error::msg)
            .context("Invalid keybindings")?;

        Ok(Self::with_defaults(
            config.initial_tool_state(),
            config.cursor_style(),
            action_map,
            config.drawing.max_commands,
        ))
    }

    /// Committed commands and redo buffer.
    pub fn log(&self) -> &CommandLog {
        &self.log
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn cursor(&self) -> &CursorPreview {
        &self.cursor
    }

    /// Returns `true` while pointer motion is extending a stroke.
    pub fn is_drawing(&self) -> bool {
        self.state == DrawingState::Drawing
    }

    /// Returns whether an export was requested since the last call, and resets the flag.
    pub fn take_export_request(&mut self) -> bool {
        std::mem::take(&mut self.export_requested)
    }

    /// Looks up the action bound to `key_str` under the current modifiers.
    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        for (binding, action) in &self.action_map {
            if binding.matches(key_str, &self.modifiers) {
                return Some(*action);
            }
        }
        None
    }

    /// Stops extending the current stroke. The partial stroke stays committed.
    pub(super) fn end_stroke(&mut self) {
        if self.state == DrawingState::Drawing {
            log::debug!("Ending active stroke");
            self.state = DrawingState::Idle;
        }
    }
}
