//! Keybinding configuration types and parsing.
//!
//! This module defines the configurable keybinding system that allows users
//! to customize keyboard shortcuts for editor actions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Remove the most recently committed segment
    Undo,
    /// Remove the selected segment
    DeleteSelection,
    /// Remove every committed segment
    ClearAll,
    /// Flip between draw mode and drag mode
    ToggleMode,
    /// Snap every committed segment to the current grid
    ResnapAll,
    /// Abort the in-progress draw/move, or drop the selection
    Cancel,
}

/// A single keybinding: a key name with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+Z" or "Delete".
    ///
    /// Modifiers can appear in any order and spaces around '+' are allowed.
    /// `Mod` stands for the platform shortcut modifier: Cmd (Meta) on macOS,
    /// Ctrl everywhere else.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let s_normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");
        let parts: Vec<&str> = s_normalized.split('+').collect();

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut meta = false;
        let mut key_parts = Vec::new();

        for part in parts {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" | "option" => alt = true,
                "meta" | "cmd" | "command" | "super" => meta = true,
                "mod" => {
                    if cfg!(target_os = "macos") {
                        meta = true;
                    } else {
                        ctrl = true;
                    }
                }
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(format!("No key specified in: {}", s));
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]; the key is '+'
        let key = key_parts.join("+");
        let key = if key.is_empty() { "+".to_string() } else { key };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
            meta,
        })
    }

    /// Check if this keybinding matches the current input state.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
            && self.meta == meta
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// undo = ["Mod+Z"]
/// delete_selection = ["Delete", "Backspace"]
/// toggle_mode = ["M"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_undo")]
    pub undo: Vec<String>,

    #[serde(default = "default_delete_selection")]
    pub delete_selection: Vec<String>,

    #[serde(default = "default_clear_all")]
    pub clear_all: Vec<String>,

    #[serde(default = "default_toggle_mode")]
    pub toggle_mode: Vec<String>,

    #[serde(default = "default_resnap_all")]
    pub resnap_all: Vec<String>,

    #[serde(default = "default_cancel")]
    pub cancel: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            undo: default_undo(),
            delete_selection: default_delete_selection(),
            clear_all: default_clear_all(),
            toggle_mode: default_toggle_mode(),
            resnap_all: default_resnap_all(),
            cancel: default_cancel(),
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
            if let Some(existing_action) = map.insert(binding, action) {
                return Err(format!(
                    "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                    binding_str, existing_action, action
                ));
            }
            Ok(())
        };

        let groups = [
            (&self.undo, Action::Undo),
            (&self.delete_selection, Action::DeleteSelection),
            (&self.clear_all, Action::ClearAll),
            (&self.toggle_mode, Action::ToggleMode),
            (&self.resnap_all, Action::ResnapAll),
            (&self.cancel, Action::Cancel),
        ];

        for (bindings, action) in groups {
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

fn default_undo() -> Vec<String> {
    vec!["Mod+Z".to_string()]
}

fn default_delete_selection() -> Vec<String> {
    vec!["Delete".to_string(), "Backspace".to_string()]
}

fn default_clear_all() -> Vec<String> {
    vec!["Ctrl+Shift+Delete".to_string()]
}

fn default_toggle_mode() -> Vec<String> {
    vec!["M".to_string()]
}

fn default_resnap_all() -> Vec<String> {
    vec!["Ctrl+G".to_string()]
}

fn default_cancel() -> Vec<String> {
    vec!["Escape".to_string()]
}
