//! Shared draw/drag mode flag.

use std::cell::Cell;
use std::rc::Rc;

/// How pointer-down on an existing segment is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionMode {
    /// Clicking a segment selects it; clicking empty space draws (default)
    #[default]
    Draw,
    /// Clicking a segment selects it and starts moving it
    Drag,
}

impl std::str::FromStr for InteractionMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draw" => Ok(Self::Draw),
            "drag" => Ok(Self::Drag),
            _ => Err(()),
        }
    }
}

/// Process-wide mode toggle.
///
/// Cloning yields another handle onto the same flag, so a toolbar and the
/// session can share it without global state. All access happens on the UI
/// thread, hence `Rc<Cell<_>>`.
#[derive(Debug, Clone, Default)]
pub struct ModeStore {
    drag_mode: Rc<Cell<bool>>,
}

impl ModeStore {
    pub fn new(mode: InteractionMode) -> Self {
        Self {
            drag_mode: Rc::new(Cell::new(mode == InteractionMode::Drag)),
        }
    }

    pub fn is_drag_mode(&self) -> bool {
        self.drag_mode.get()
    }

    pub fn mode(&self) -> InteractionMode {
        if self.is_drag_mode() {
            InteractionMode::Drag
        } else {
            InteractionMode::Draw
        }
    }

    /// Flips the flag and returns the new mode.
    pub fn toggle(&self) -> InteractionMode {
        self.drag_mode.set(!self.drag_mode.get());
        let mode = self.mode();
        log::info!("Switched to {:?} mode", mode);
        mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn default_mode_is_draw() {
        assert_eq!(ModeStore::default().mode(), InteractionMode::Draw);
        assert_eq!(InteractionMode::default(), InteractionMode::Draw);
    }

    #[test]
    fn toggle_flips_and_reports_new_mode() {
        let store = ModeStore::new(InteractionMode::Draw);
        assert_eq!(store.toggle(), InteractionMode::Drag);
        assert!(store.is_drag_mode());
        assert_eq!(store.toggle(), InteractionMode::Draw);
        assert!(!store.is_drag_mode());
    }

    #[test]
    fn clones_share_the_same_flag() {
        let toolbar = ModeStore::default();
        let session = toolbar.clone();
        toolbar.toggle();
        assert!(session.is_drag_mode());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(InteractionMode::from_str("Drag").unwrap(), InteractionMode::Drag);
        assert_eq!(InteractionMode::from_str("DRAW").unwrap(), InteractionMode::Draw);
        assert!(InteractionMode::from_str("pan").is_err());
    }
}
