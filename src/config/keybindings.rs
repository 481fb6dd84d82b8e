//! Keybinding configuration types and parsing.
//!
//! Every sketch operation and front-end toggle can be bound to one or more key
//! chords such as `"Ctrl+Z"` or `"Return"`.

use crate::sketch::{DrawMode, UserAction};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Front end
    Exit,
    ToggleHelp,
    ToggleStatusBar,

    // Draw modes
    SelectPoint,
    SelectMultipoint,
    SelectPolyline,
    SelectPolygon,
    SelectFreehandPolyline,
    SelectFreehandPolygon,

    // Session
    Undo,
    Redo,
    Commit,
    Clear,
    Restart,
}

impl Action {
    /// Maps the action to a sketch controller operation.
    ///
    /// Front-end actions (exit, help, status bar) return `None`.
    pub fn to_user_action(self) -> Option<UserAction> {
        let action = match self {
            Action::Exit | Action::ToggleHelp | Action::ToggleStatusBar => return None,
            Action::SelectPoint => UserAction::SelectMode(DrawMode::Point),
            Action::SelectMultipoint => UserAction::SelectMode(DrawMode::Multipoint),
            Action::SelectPolyline => UserAction::SelectMode(DrawMode::Polyline),
            Action::SelectPolygon => UserAction::SelectMode(DrawMode::Polygon),
            Action::SelectFreehandPolyline => UserAction::SelectMode(DrawMode::FreehandPolyline),
            Action::SelectFreehandPolygon => UserAction::SelectMode(DrawMode::FreehandPolygon),
            Action::Undo => UserAction::Undo,
            Action::Redo => UserAction::Redo,
            Action::Commit => UserAction::Commit,
            Action::Clear => UserAction::Clear,
            Action::Restart => UserAction::Restart,
        };
        Some(action)
    }

    /// Short description for the help listing.
    pub fn describe(self) -> &'static str {
        match self {
            Action::Exit => "Quit",
            Action::ToggleHelp => "Toggle this help",
            Action::ToggleStatusBar => "Toggle status line",
            Action::SelectPoint => "Draw point",
            Action::SelectMultipoint => "Draw multipoint",
            Action::SelectPolyline => "Draw polyline",
            Action::SelectPolygon => "Draw polygon",
            Action::SelectFreehandPolyline => "Draw freehand polyline",
            Action::SelectFreehandPolygon => "Draw freehand polygon",
            Action::Undo => "Undo last edit",
            Action::Redo => "Redo last undone edit",
            Action::Commit => "Add sketch to map",
            Action::Clear => "Discard current sketch",
            Action::Restart => "Discard sketch and all graphics",
        }
    }
}

/// Command words of the input front end.
///
/// A line starting with one of these is always read as a command, so an
/// unmodified chord using the same key could never fire.
pub const COMMAND_WORDS: [&str; 7] = ["at", "trace", "part", "select", "move", "delete", "list"];

/// A single keybinding: a key with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a chord like `"Ctrl+Shift+Z"`, `"ctrl + y"` or `"Return"`.
    ///
    /// Modifiers may appear in any order. The key itself is stored lowercased
    /// so that bindings compare case-insensitively, and `+` may be used as the
    /// key (`"Ctrl++"`).
    pub fn parse(s: &str) -> Result<Self, String> {
        let chord = s.trim();
        if chord.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let mut binding = Self {
            key: String::new(),
            ctrl: false,
            shift: false,
            alt: false,
        };

        let mut rest = chord;
        loop {
            let Some((head, tail)) = rest.split_once('+') else {
                break;
            };
            let flag = match head.trim().to_lowercase().as_str() {
                "ctrl" | "control" => &mut binding.ctrl,
                "shift" => &mut binding.shift,
                "alt" => &mut binding.alt,
                _ => break,
            };
            *flag = true;
            rest = tail;
        }

        let key = rest.trim();
        if key.is_empty() {
            // "Ctrl+" leaves nothing; "Ctrl++" leaves "+"
            return Err(format!("No key specified in: {}", chord));
        }
        binding.key = key.to_lowercase();
        Ok(binding)
    }

    /// Returns true for a chord without modifiers whose key is a command word.
    pub fn is_command_word(&self) -> bool {
        !(self.ctrl || self.shift || self.alt) && COMMAND_WORDS.contains(&self.key.as_str())
    }

}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.shift {
            f.write_str("Shift+")?;
        }
        if self.alt {
            f.write_str("Alt+")?;
        }
        let mut chars = self.key.chars();
        match chars.next() {
            Some(first) if self.key.chars().count() > 1 => {
                write!(f, "{}{}", first.to_uppercase(), chars.as_str())
            }
            _ => f.write_str(&self.key.to_uppercase()),
        }
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// undo = ["Ctrl+Z", "U"]
/// commit = ["Return"]
/// select_polygon = ["4", "G"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_exit")]
    pub exit: Vec<String>,

    #[serde(default = "default_toggle_help")]
    pub toggle_help: Vec<String>,

    #[serde(default = "default_toggle_status_bar")]
    pub toggle_status_bar: Vec<String>,

    #[serde(default = "default_select_point")]
    pub select_point: Vec<String>,

    #[serde(default = "default_select_multipoint")]
    pub select_multipoint: Vec<String>,

    #[serde(default = "default_select_polyline")]
    pub select_polyline: Vec<String>,

    #[serde(default = "default_select_polygon")]
    pub select_polygon: Vec<String>,

    #[serde(default = "default_select_freehand_polyline")]
    pub select_freehand_polyline: Vec<String>,

    #[serde(default = "default_select_freehand_polygon")]
    pub select_freehand_polygon: Vec<String>,

    #[serde(default = "default_undo")]
    pub undo: Vec<String>,

    #[serde(default = "default_redo")]
    pub redo: Vec<String>,

    #[serde(default = "default_commit")]
    pub commit: Vec<String>,

    #[serde(default = "default_clear")]
    pub clear: Vec<String>,

    #[serde(default = "default_restart")]
    pub restart: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            exit: default_exit(),
            toggle_help: default_toggle_help(),
            toggle_status_bar: default_toggle_status_bar(),
            select_point: default_select_point(),
            select_multipoint: default_select_multipoint(),
            select_polyline: default_select_polyline(),
            select_polygon: default_select_polygon(),
            select_freehand_polyline: default_select_freehand_polyline(),
            select_freehand_polygon: default_select_freehand_polygon(),
            undo: default_undo(),
            redo: default_redo(),
            commit: default_commit(),
            clear: default_clear(),
            restart: default_restart(),
        }
    }
}

impl KeybindingsConfig {
    /// Chord lists paired with their action, in help-listing order.
    pub fn entries(&self) -> [(Action, &[String]); 14] {
        [
            (Action::SelectPoint, self.select_point.as_slice()),
            (Action::SelectMultipoint, self.select_multipoint.as_slice()),
            (Action::SelectPolyline, self.select_polyline.as_slice()),
            (Action::SelectPolygon, self.select_polygon.as_slice()),
            (
                Action::SelectFreehandPolyline,
                self.select_freehand_polyline.as_slice(),
            ),
            (
                Action::SelectFreehandPolygon,
                self.select_freehand_polygon.as_slice(),
            ),
            (Action::Undo, self.undo.as_slice()),
            (Action::Redo, self.redo.as_slice()),
            (Action::Commit, self.commit.as_slice()),
            (Action::Clear, self.clear.as_slice()),
            (Action::Restart, self.restart.as_slice()),
            (Action::ToggleHelp, self.toggle_help.as_slice()),
            (Action::ToggleStatusBar, self.toggle_status_bar.as_slice()),
            (Action::Exit, self.exit.as_slice()),
        ]
    }

    /// Build a lookup map from keybindings to actions.
    ///
    /// Returns an error if any keybinding string is invalid, shadows a
    /// command word, or if the same chord is bound twice.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        for (action, chords) in self.entries() {
            for chord in chords {
                let binding = KeyBinding::parse(chord)?;
                if binding.is_command_word() {
                    return Err(format!(
                        "Keybinding '{}' for {:?} is reserved for the '{}' command",
                        chord, action, binding.key
                    ));
                }
                if let Some(existing) = map.insert(binding, action) {
                    return Err(format!(
                        "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                        chord, existing, action
                    ));
                }
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_exit() -> Vec<String> {
    vec!["Ctrl+Q".to_string()]
}

fn default_toggle_help() -> Vec<String> {
    vec!["F1".to_string()]
}

fn default_toggle_status_bar() -> Vec<String> {
    vec!["F12".to_string()]
}

fn default_select_point() -> Vec<String> {
    vec!["1".to_string()]
}

fn default_select_multipoint() -> Vec<String> {
    vec!["2".to_string()]
}

fn default_select_polyline() -> Vec<String> {
    vec!["3".to_string()]
}

fn default_select_polygon() -> Vec<String> {
    vec!["4".to_string()]
}

fn default_select_freehand_polyline() -> Vec<String> {
    vec!["5".to_string()]
}

fn default_select_freehand_polygon() -> Vec<String> {
    vec!["6".to_string()]
}

fn default_undo() -> Vec<String> {
    vec!["Ctrl+Z".to_string()]
}

fn default_redo() -> Vec<String> {
    vec!["Ctrl+Y".to_string(), "Ctrl+Shift+Z".to_string()]
}

fn default_commit() -> Vec<String> {
    vec!["Return".to_string()]
}

fn default_clear() -> Vec<String> {
    vec!["Escape".to_string()]
}

fn default_restart() -> Vec<String> {
    vec!["Ctrl+R".to_string()]
}
