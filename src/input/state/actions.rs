use crate::config::Action;
use crate::draw::color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
use crate::input::events::Key;

use super::InputState;

/// Width change per IncreaseWidth/DecreaseWidth press.
const WIDTH_STEP: f64 = 1.0;
/// Rotation per RotateClockwise/RotateCounterClockwise press, in degrees.
const ROTATION_STEP: f64 = 15.0;

impl InputState {
    /// Processes a key press event.
    ///
    /// Modifier keys update the modifier state; every other key is looked up in
    /// the keybinding table together with the held modifiers.
    pub fn on_key_press(&mut self, key: Key) {
        if self.modifiers.update(key, true) {
            return;
        }

        let Some(key_str) = key.binding_name() else {
            log::debug!("Ignoring unbound key {:?}", key);
            return;
        };

        if let Some(action) = self.find_action(&key_str) {
            self.handle_action(action);
        }
    }

    /// Processes a key release event.
    ///
    /// Only modifier releases matter.
    pub fn on_key_release(&mut self, key: Key) {
        self.modifiers.update(key, false);
    }

    /// Handle an action triggered by a keybinding.
    pub fn handle_action(&mut self, action: Action) {
        log::debug!("Action {:?}", action);
        match action {
            Action::Exit => {
                if self.is_drawing() {
                    self.end_stroke();
                } else {
                    self.should_exit = true;
                }
            }
            Action::Undo => {
                self.undo();
            }
            Action::Redo => {
                self.redo();
            }
            Action::ClearCanvas => self.clear(),
            Action::IncreaseWidth => {
                self.tools.adjust_width(WIDTH_STEP);
                self.needs_redraw = true;
            }
            Action::DecreaseWidth => {
                self.tools.adjust_width(-WIDTH_STEP);
                self.needs_redraw = true;
            }
            Action::RotateClockwise => {
                self.tools.rotate(ROTATION_STEP);
                self.needs_redraw = true;
            }
            Action::RotateCounterClockwise => {
                self.tools.rotate(-ROTATION_STEP);
                self.needs_redraw = true;
            }
            Action::SelectPen => self.select_pen(),
            Action::NextSticker => {
                if self.tools.next_sticker().is_none() {
                    log::warn!("No stickers registered");
                }
                self.needs_redraw = true;
            }
            Action::Export => {
                self.export_requested = true;
            }
            Action::SetColorRed => self.set_color(RED),
            Action::SetColorGreen => self.set_color(GREEN),
            Action::SetColorBlue => self.set_color(BLUE),
            Action::SetColorYellow => self.set_color(YELLOW),
            Action::SetColorOrange => self.set_color(ORANGE),
            Action::SetColorPink => self.set_color(PINK),
            Action::SetColorWhite => self.set_color(WHITE),
            Action::SetColorBlack => self.set_color(BLACK),
        }
    }
}
