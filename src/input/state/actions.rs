use crate::config::Action;
use crate::input::events::Key;
use log::{debug, info};

use super::{EditorState, LineEditor};

impl LineEditor {
    /// Processes a key press event.
    ///
    /// Modifier keys update the tracked modifier state; any other key is
    /// looked up in the keybinding map together with the current modifiers.
    /// Keys without a binding are ignored.
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Shift => {
                self.modifiers.shift = true;
                return;
            }
            Key::Ctrl => {
                self.modifiers.ctrl = true;
                return;
            }
            Key::Alt => {
                self.modifiers.alt = true;
                return;
            }
            Key::Meta => {
                self.modifiers.meta = true;
                return;
            }
            _ => {}
        }

        let Some(key_str) = key.binding_name() else {
            return;
        };

        if let Some(action) = self.find_action(&key_str) {
            self.handle_action(action);
        }
    }

    /// Processes a key release event.
    ///
    /// Only tracks modifier key releases to update the modifier state.
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = false,
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Alt => self.modifiers.alt = false,
            Key::Meta => self.modifiers.meta = false,
            _ => {}
        }
    }

    /// Handle an action triggered by a keybinding or toolbar button.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Undo => {
                self.undo();
            }
            Action::DeleteSelection => {
                self.delete_selection();
            }
            Action::ClearAll => self.clear_all(),
            Action::ResnapAll => {
                self.resnap_all();
            }
            Action::Cancel => self.cancel(),
            Action::ToggleMode => {
                // The mode flag belongs to the session
                debug!("Action {:?} pending for session", action);
                self.set_pending_action(action);
            }
        }
    }

    /// Removes the most recently committed segment.
    ///
    /// Returns `false` when there was nothing to undo. A selection pointing
    /// at the removed segment is dropped.
    pub fn undo(&mut self) -> bool {
        self.abort_move();
        let Some(removed) = self.frame.undo() else {
            return false;
        };
        debug!("Undo removed segment {:?}", removed);
        if self.selected == Some(self.frame.len()) {
            self.selected = None;
        }
        self.needs_redraw = true;
        true
    }

    /// Removes the selected segment and clears the selection.
    ///
    /// Returns `false` when nothing is selected.
    pub fn delete_selection(&mut self) -> bool {
        self.abort_move();
        let Some(index) = self.selected.take() else {
            return false;
        };
        let removed = self.frame.remove(index).is_some();
        if removed {
            debug!("Deleted segment #{}", index);
        }
        self.needs_redraw = true;
        removed
    }

    /// Removes every committed segment. An in-progress draw is kept.
    pub fn clear_all(&mut self) {
        self.abort_move();
        let count = self.frame.len();
        self.frame.clear();
        self.selected = None;
        self.needs_redraw = true;
        info!("Cleared {} segment(s)", count);
    }

    /// Snaps every committed segment to the current grid.
    ///
    /// Returns the number of segments whose coordinates changed.
    pub fn resnap_all(&mut self) -> usize {
        self.abort_move();
        let (cw, rh) = (self.column_width(), self.row_height());
        let mut changed = 0;
        for segment in &mut self.frame.segments {
            let snapped = segment.snapped(cw, rh);
            if snapped != *segment {
                *segment = snapped;
                changed += 1;
            }
        }
        if changed > 0 {
            self.needs_redraw = true;
        }
        info!("Resnapped {} segment(s) to the current grid", changed);
        changed
    }

    /// Aborts the in-progress draw or move without committing.
    ///
    /// When idle, drops the selection instead.
    pub fn cancel(&mut self) {
        match self.state {
            EditorState::Drawing { .. } => {
                self.state = EditorState::Idle;
                self.needs_redraw = true;
            }
            EditorState::Moving { .. } => self.abort_move(),
            EditorState::Idle => self.clear_selection(),
        }
    }

    /// Restores the segment being moved to its original position.
    fn abort_move(&mut self) {
        if let EditorState::Moving {
            index, original, ..
        } = self.state
        {
            self.frame.replace(index, original);
            self.state = EditorState::Idle;
            self.needs_redraw = true;
        }
    }
}
