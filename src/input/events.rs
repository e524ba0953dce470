//! Generic input event types for cross-backend compatibility.

/// Generic key representation for cross-backend compatibility.
///
/// Hosts map their native key identifiers to these values; see
/// [`Key::from_name`] for the DOM `KeyboardEvent.key` mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Delete key
    Delete,
    /// Backspace key
    Backspace,
    /// Escape key
    Escape,
    /// Return/Enter key
    Return,
    /// Space bar
    Space,
    /// Shift modifier
    Shift,
    /// Ctrl modifier
    Ctrl,
    /// Alt/Option modifier
    Alt,
    /// Meta/Cmd/Super modifier
    Meta,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Maps a key name (as used in keybinding strings and DOM events) to a key.
    pub fn from_name(name: &str) -> Self {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return if c == ' ' { Key::Space } else { Key::Char(c) };
        }
        match name.to_lowercase().as_str() {
            "delete" | "del" => Key::Delete,
            "backspace" => Key::Backspace,
            "escape" | "esc" => Key::Escape,
            "return" | "enter" => Key::Return,
            "space" => Key::Space,
            "shift" => Key::Shift,
            "ctrl" | "control" => Key::Ctrl,
            "alt" | "option" => Key::Alt,
            "meta" | "cmd" | "command" | "super" | "os" => Key::Meta,
            _ => Key::Unknown,
        }
    }

    /// Name used for keybinding lookup, or `None` for modifier/unknown keys.
    pub fn binding_name(&self) -> Option<String> {
        let name = match self {
            Key::Char(c) => return Some(c.to_string()),
            Key::Delete => "Delete",
            Key::Backspace => "Backspace",
            Key::Escape => "Escape",
            Key::Return => "Return",
            Key::Space => "Space",
            Key::Shift | Key::Ctrl | Key::Alt | Key::Meta | Key::Unknown => return None,
        };
        Some(name.to_string())
    }
}

/// Pointer button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary button (draws, selects, moves)
    Left,
    /// Secondary button (cancels the current action)
    Right,
    /// Middle button (unused)
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_maps_dom_names() {
        assert_eq!(Key::from_name("Delete"), Key::Delete);
        assert_eq!(Key::from_name("Enter"), Key::Return);
        assert_eq!(Key::from_name("z"), Key::Char('z'));
        assert_eq!(Key::from_name(" "), Key::Space);
        assert_eq!(Key::from_name("Control"), Key::Ctrl);
        assert_eq!(Key::from_name("F13"), Key::Unknown);
    }

    #[test]
    fn binding_name_skips_modifiers() {
        assert_eq!(Key::Char('Z').binding_name().as_deref(), Some("Z"));
        assert_eq!(Key::Delete.binding_name().as_deref(), Some("Delete"));
        assert_eq!(Key::Ctrl.binding_name(), None);
        assert_eq!(Key::Unknown.binding_name(), None);
    }
}
