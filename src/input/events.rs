//! Generic input event types.

/// Generic key representation.
///
/// Hosts map their native key codes to these values so keyboard shortcuts go
/// through one keybinding table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key
    Escape,
    /// Return/Enter key
    Return,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Space bar
    Space,
    /// Shift modifier
    Shift,
    /// Ctrl modifier
    Ctrl,
    /// Alt modifier
    Alt,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Parses a key name as written in scripts and config files.
    ///
    /// Single characters map to [`Key::Char`]; named keys are case-insensitive.
    pub fn from_name(name: &str) -> Key {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return if c == ' ' { Key::Space } else { Key::Char(c) };
        }

        match name.to_ascii_lowercase().as_str() {
            "escape" | "esc" => Key::Escape,
            "return" | "enter" => Key::Return,
            "backspace" => Key::Backspace,
            "delete" | "del" => Key::Delete,
            "space" => Key::Space,
            "shift" => Key::Shift,
            "ctrl" | "control" => Key::Ctrl,
            "alt" => Key::Alt,
            _ => Key::Unknown,
        }
    }

    /// Name used for keybinding lookup, or `None` for modifiers and unknown keys.
    pub fn binding_name(&self) -> Option<String> {
        match self {
            Key::Char(c) => Some(c.to_string()),
            Key::Escape => Some("Escape".to_string()),
            Key::Return => Some("Return".to_string()),
            Key::Backspace => Some("Backspace".to_string()),
            Key::Delete => Some("Delete".to_string()),
            Key::Space => Some("Space".to_string()),
            Key::Shift | Key::Ctrl | Key::Alt | Key::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_characters_and_named_keys() {
        assert_eq!(Key::from_name("z"), Key::Char('z'));
        assert_eq!(Key::from_name("+"), Key::Char('+'));
        assert_eq!(Key::from_name(" "), Key::Space);
        assert_eq!(Key::from_name("Ctrl"), Key::Ctrl);
        assert_eq!(Key::from_name("ESCAPE"), Key::Escape);
        assert_eq!(Key::from_name("F13"), Key::Unknown);
    }

    #[test]
    fn modifiers_have_no_binding_name() {
        assert_eq!(Key::Shift.binding_name(), None);
        assert_eq!(Key::Char('e').binding_name().as_deref(), Some("e"));
    }
}
