//! Keyboard modifier state tracking.

use super::events::Key;

/// Keyboard modifier state.
///
/// Tracks which modifier keys are held so keybindings like `Ctrl+Z` and
/// `Ctrl+Shift+Z` can be told apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key pressed
    pub shift: bool,
    /// Ctrl key pressed
    pub ctrl: bool,
    /// Alt key pressed
    pub alt: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a press or release. Returns `true` if `key` was a modifier.
    pub fn update(&mut self, key: Key, pressed: bool) -> bool {
        match key {
            Key::Shift => self.shift = pressed,
            Key::Ctrl => self.ctrl = pressed,
            Key::Alt => self.alt = pressed,
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_press_and_release() {
        let mut mods = Modifiers::new();
        assert!(mods.update(Key::Ctrl, true));
        assert!(mods.update(Key::Shift, true));
        assert!(mods.ctrl && mods.shift && !mods.alt);

        assert!(mods.update(Key::Ctrl, false));
        assert!(!mods.ctrl);
        assert!(!mods.update(Key::Char('z'), true));

        assert!(mods.update(Key::Shift, false));
        assert_eq!(mods, Modifiers::default());
    }
}
