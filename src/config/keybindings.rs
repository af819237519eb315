//! Keybinding configuration types and parsing.
//!
//! Keyboard shortcuts are user-configurable: each action maps to a list of key
//! strings, which are parsed into a lookup table once at startup.

use crate::input::Modifiers;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Exit and cancellation
    Exit,

    // History
    Undo,
    Redo,
    ClearCanvas,

    // Brush controls
    IncreaseWidth,
    DecreaseWidth,
    RotateClockwise,
    RotateCounterClockwise,

    // Tool selection
    SelectPen,
    NextSticker,

    // Output
    Export,

    // Color selections
    SetColorRed,
    SetColorGreen,
    SetColorBlue,
    SetColorYellow,
    SetColorOrange,
    SetColorPink,
    SetColorWhite,
    SetColorBlack,
}

/// A single keybinding: a key character with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parses `"Escape"`, `"Ctrl+S"`, `"Shift + Ctrl + Z"` or `"Ctrl++"`.
    ///
    /// Modifiers come first in any order; the last part is the key. A trailing
    /// `++` (or a lone `+`) binds the plus key itself.
    pub fn parse(s: &str) -> Result<Self, String> {
        let compact = s.split('+').map(str::trim).collect::<Vec<_>>().join("+");
        if compact.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let (modifiers, key) = if compact == "+" {
            ("", "+")
        } else if let Some(rest) = compact.strip_suffix("++") {
            (rest, "+")
        } else {
            compact.rsplit_once('+').unwrap_or(("", compact.as_str()))
        };

        if key.is_empty() || is_modifier_name(key) {
            return Err(format!("No key specified in: {}", s.trim()));
        }

        let mut binding = Self {
            key: key.to_string(),
            ctrl: false,
            shift: false,
            alt: false,
        };
        for part in modifiers.split('+').filter(|part| !part.is_empty()) {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => binding.ctrl = true,
                "shift" => binding.shift = true,
                "alt" => binding.alt = true,
                other => return Err(format!("Unknown modifier '{other}' in: {}", s.trim())),
            }
        }
        Ok(binding)
    }

    /// True when `key` (case-insensitive) is pressed with exactly these modifiers held.
    pub fn matches(&self, key: &str, modifiers: &Modifiers) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == modifiers.ctrl
            && self.shift == modifiers.shift
            && self.alt == modifiers.alt
    }
}

fn is_modifier_name(part: &str) -> bool {
    matches!(
        part.to_lowercase().as_str(),
        "ctrl" | "control" | "shift" | "alt"
    )
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// redo = ["Ctrl+Shift+Z", "Ctrl+Y"]
/// clear_canvas = ["E"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_exit")]
    pub exit: Vec<String>,

    #[serde(default = "default_undo")]
    pub undo: Vec<String>,

    #[serde(default = "default_redo")]
    pub redo: Vec<String>,

    #[serde(default = "default_clear_canvas")]
    pub clear_canvas: Vec<String>,

    #[serde(default = "default_increase_width")]
    pub increase_width: Vec<String>,

    #[serde(default = "default_decrease_width")]
    pub decrease_width: Vec<String>,

    #[serde(default = "default_rotate_clockwise")]
    pub rotate_clockwise: Vec<String>,

    #[serde(default = "default_rotate_counter_clockwise")]
    pub rotate_counter_clockwise: Vec<String>,

    #[serde(default = "default_select_pen")]
    pub select_pen: Vec<String>,

    #[serde(default = "default_next_sticker")]
    pub next_sticker: Vec<String>,

    #[serde(default = "default_export")]
    pub export: Vec<String>,

    #[serde(default = "default_set_color_red")]
    pub set_color_red: Vec<String>,

    #[serde(default = "default_set_color_green")]
    pub set_color_green: Vec<String>,

    #[serde(default = "default_set_color_blue")]
    pub set_color_blue: Vec<String>,

    #[serde(default = "default_set_color_yellow")]
    pub set_color_yellow: Vec<String>,

    #[serde(default = "default_set_color_orange")]
    pub set_color_orange: Vec<String>,

    #[serde(default = "default_set_color_pink")]
    pub set_color_pink: Vec<String>,

    #[serde(default = "default_set_color_white")]
    pub set_color_white: Vec<String>,

    #[serde(default = "default_set_color_black")]
    pub set_color_black: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            exit: default_exit(),
            undo: default_undo(),
            redo: default_redo(),
            clear_canvas: default_clear_canvas(),
            increase_width: default_increase_width(),
            decrease_width: default_decrease_width(),
            rotate_clockwise: default_rotate_clockwise(),
            rotate_counter_clockwise: default_rotate_counter_clockwise(),
            select_pen: default_select_pen(),
            next_sticker: default_next_sticker(),
            export: default_export(),
            set_color_red: default_set_color_red(),
            set_color_green: default_set_color_green(),
            set_color_blue: default_set_color_blue(),
            set_color_yellow: default_set_color_yellow(),
            set_color_orange: default_set_color_orange(),
            set_color_pink: default_set_color_pink(),
            set_color_white: default_set_color_white(),
            set_color_black: default_set_color_black(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions for efficient matching.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        let mut insert_binding = |binding_str: &str, action: Action| -> Result<(), String> {
            let binding = KeyBinding::parse(binding_str)?;
            if let Some(existing_action) = map.insert(binding.clone(), action) {
                return Err(format!(
                    "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                    binding_str, existing_action, action
                ));
            }
            Ok(())
        };

        let table: [(&[String], Action); 19] = [
            (self.exit.as_slice(), Action::Exit),
            (self.undo.as_slice(), Action::Undo),
            (self.redo.as_slice(), Action::Redo),
            (self.clear_canvas.as_slice(), Action::ClearCanvas),
            (self.increase_width.as_slice(), Action::IncreaseWidth),
            (self.decrease_width.as_slice(), Action::DecreaseWidth),
            (self.rotate_clockwise.as_slice(), Action::RotateClockwise),
            (self.rotate_counter_clockwise.as_slice(), Action::RotateCounterClockwise),
            (self.select_pen.as_slice(), Action::SelectPen),
            (self.next_sticker.as_slice(), Action::NextSticker),
            (self.export.as_slice(), Action::Export),
            (self.set_color_red.as_slice(), Action::SetColorRed),
            (self.set_color_green.as_slice(), Action::SetColorGreen),
            (self.set_color_blue.as_slice(), Action::SetColorBlue),
            (self.set_color_yellow.as_slice(), Action::SetColorYellow),
            (self.set_color_orange.as_slice(), Action::SetColorOrange),
            (self.set_color_pink.as_slice(), Action::SetColorPink),
            (self.set_color_white.as_slice(), Action::SetColorWhite),
            (self.set_color_black.as_slice(), Action::SetColorBlack),
        ];

        for (bindings, action) in table {
            for binding_str in bindings {
                insert_binding(binding_str, action)?;
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_exit() -> Vec<String> {
    vec!["Escape".to_string(), "Ctrl+Q".to_string()]
}

fn default_undo() -> Vec<String> {
    vec!["Ctrl+Z".to_string()]
}

fn default_redo() -> Vec<String> {
    vec!["Ctrl+Shift+Z".to_string(), "Ctrl+Y".to_string()]
}

fn default_clear_canvas() -> Vec<String> {
    vec!["E".to_string()]
}

fn default_increase_width() -> Vec<String> {
    vec!["+".to_string(), "=".to_string()]
}

fn default_decrease_width() -> Vec<String> {
    vec!["-".to_string(), "_".to_string()]
}

fn default_rotate_clockwise() -> Vec<String> {
    vec!["]".to_string()]
}

fn default_rotate_counter_clockwise() -> Vec<String> {
    vec!["[".to_string()]
}

fn default_select_pen() -> Vec<String> {
    vec!["D".to_string()]
}

fn default_next_sticker() -> Vec<String> {
    vec!["S".to_string()]
}

fn default_export() -> Vec<String> {
    vec!["Ctrl+S".to_string()]
}

fn default_set_color_red() -> Vec<String> {
    vec!["R".to_string()]
}

fn default_set_color_green() -> Vec<String> {
    vec!["G".to_string()]
}

fn default_set_color_blue() -> Vec<String> {
    vec!["B".to_string()]
}

fn default_set_color_yellow() -> Vec<String> {
    vec!["Y".to_string()]
}

fn default_set_color_orange() -> Vec<String> {
    vec!["O".to_string()]
}

fn default_set_color_pink() -> Vec<String> {
    vec!["P".to_string()]
}

fn default_set_color_white() -> Vec<String> {
    vec!["W".to_string()]
}

fn default_set_color_black() -> Vec<String> {
    vec!["K".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(ctrl: bool, shift: bool, alt: bool) -> Modifiers {
        Modifiers { shift, ctrl, alt }
    }

    #[test]
    fn test_parse_plain_keys() {
        for (text, key) in [("Escape", "Escape"), ("[", "["), ("]", "]"), ("S", "S")] {
            let binding = KeyBinding::parse(text).unwrap();
            assert_eq!(binding.key, key);
            assert!(!binding.ctrl && !binding.shift && !binding.alt);
        }
    }

    #[test]
    fn test_parse_export_binding() {
        let binding = KeyBinding::parse("Ctrl+S").unwrap();
        assert_eq!(binding.key, "S");
        assert!(binding.ctrl && !binding.shift && !binding.alt);
    }

    #[test]
    fn test_parse_redo_binding_in_any_modifier_order() {
        let expected = KeyBinding::parse("Ctrl+Shift+Z").unwrap();
        assert!(expected.ctrl && expected.shift);
        assert_eq!(KeyBinding::parse("Shift+Ctrl+Z").unwrap(), expected);
        assert_eq!(KeyBinding::parse("shift + control + Z").unwrap().key, "Z");
    }

    #[test]
    fn test_parse_plus_key() {
        let plain = KeyBinding::parse("+").unwrap();
        assert_eq!(plain.key, "+");
        assert!(!plain.ctrl);

        let with_ctrl = KeyBinding::parse("Ctrl++").unwrap();
        assert_eq!(with_ctrl.key, "+");
        assert!(with_ctrl.ctrl);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(KeyBinding::parse("Ctrl+Shift").is_err());
        assert!(KeyBinding::parse("  ").is_err());
        assert!(KeyBinding::parse("Ctrl+").is_err());
        assert!(KeyBinding::parse("Super+S").is_err());
    }

    #[test]
    fn test_matches_requires_exact_modifiers() {
        let export = KeyBinding::parse("Ctrl+S").unwrap();
        assert!(export.matches("s", &held(true, false, false)));
        assert!(!export.matches("S", &held(false, false, false)));
        assert!(!export.matches("S", &held(true, true, false)));

        let rotate = KeyBinding::parse("]").unwrap();
        assert!(rotate.matches("]", &Modifiers::default()));
        assert!(!rotate.matches("[", &Modifiers::default()));
    }

    #[test]
    fn test_build_action_map() {
        let map = KeybindingsConfig::default().build_action_map().unwrap();
        let action = |text: &str| map.get(&KeyBinding::parse(text).unwrap()).copied();

        assert_eq!(action("Escape"), Some(Action::Exit));
        assert_eq!(action("Ctrl+Z"), Some(Action::Undo));
        assert_eq!(action("Shift+Ctrl+Z"), Some(Action::Redo));
        assert_eq!(action("Ctrl+S"), Some(Action::Export));
        assert_eq!(action("S"), Some(Action::NextSticker));
        assert_eq!(action("]"), Some(Action::RotateClockwise));
        assert_eq!(action("["), Some(Action::RotateCounterClockwise));
        assert_eq!(action("+"), Some(Action::IncreaseWidth));
    }

    #[test]
    fn test_duplicate_keybinding_detection() {
        let mut config = KeybindingsConfig::default();
        config.clear_canvas = vec!["S".to_string()];

        let err = config.build_action_map().unwrap_err();
        assert!(err.contains("Duplicate keybinding"));
        assert!(err.contains('S'));
    }

    #[test]
    fn test_duplicate_with_different_modifier_order() {
        let mut config = KeybindingsConfig::default();
        config.export = vec!["Ctrl+Shift+S".to_string()];
        config.redo = vec!["Shift+Ctrl+S".to_string()];

        let err = config.build_action_map().unwrap_err();
        assert!(err.contains("Duplicate keybinding"));
    }
}
