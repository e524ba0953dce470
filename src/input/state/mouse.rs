use crate::draw::Segment;
use crate::input::events::MouseButton;
use log::{debug, warn};

use super::{EditorState, LineEditor};

impl LineEditor {
    /// Processes a pointer press in local coordinates.
    ///
    /// # Arguments
    /// * `button` - Which button was pressed
    /// * `x` - Local X coordinate
    /// * `y` - Local Y coordinate
    /// * `target` - Index of the segment under the pointer, if the press hit one
    ///
    /// # Behavior
    /// - Left press on a segment: selects it and discards any in-progress draw
    /// - Left press on empty surface: clears the selection and starts a
    ///   zero-length segment at the pointer
    /// - Right press: cancels the current draw or move
    pub fn on_pointer_down(&mut self, button: MouseButton, x: f64, y: f64, target: Option<usize>) {
        match button {
            MouseButton::Left => {
                if matches!(self.state, EditorState::Moving { .. }) {
                    self.cancel();
                }
                match target {
                    Some(index) => {
                        self.select(index);
                    }
                    None => self.begin_draw(x, y),
                }
            }
            MouseButton::Right => self.cancel(),
            MouseButton::Middle => {}
        }
    }

    fn begin_draw(&mut self, x: f64, y: f64) {
        if self.is_drawing() {
            debug!("Press while drawing; restarting segment at ({x:.1}, {y:.1})");
        }
        self.selected = None;
        self.state = EditorState::Drawing {
            segment: Segment::at(x, y),
        };
        self.needs_redraw = true;
    }

    /// Selects segment `index` and starts moving it with the pointer.
    ///
    /// Returns `false` if the index does not name a committed segment.
    pub fn begin_move(&mut self, index: usize, x: f64, y: f64) -> bool {
        if matches!(self.state, EditorState::Moving { .. }) {
            self.cancel();
        }
        let Some(original) = self.frame.get(index).copied() else {
            debug!("Ignoring move of unknown segment {}", index);
            return false;
        };
        self.select(index);
        self.state = EditorState::Moving {
            index,
            grab_x: x,
            grab_y: y,
            original,
        };
        true
    }

    /// Processes pointer motion in local coordinates.
    ///
    /// - Drawing: moves only the segment's end point
    /// - Moving: translates the grabbed segment by the offset from the grab point
    /// - Idle: ignored
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        match &mut self.state {
            EditorState::Drawing { segment } => {
                segment.x2 = x;
                segment.y2 = y;
                self.needs_redraw = true;
            }
            EditorState::Moving {
                index,
                grab_x,
                grab_y,
                original,
            } => {
                let moved = original.translated(x - *grab_x, y - *grab_y);
                let index = *index;
                self.frame.replace(index, moved);
                self.needs_redraw = true;
            }
            EditorState::Idle => {}
        }
    }

    /// Processes pointer release in local coordinates.
    ///
    /// # Behavior
    /// - Drawing: the end point is set to the release position, both
    ///   endpoints are snapped to the grid independently, and the segment is
    ///   appended to the frame (degenerate segments included)
    /// - Moving: the translated segment is snapped and written back in place
    /// - Idle: no-op
    pub fn on_pointer_up(&mut self, x: f64, y: f64) {
        match std::mem::replace(&mut self.state, EditorState::Idle) {
            EditorState::Drawing { mut segment } => {
                segment.x2 = x;
                segment.y2 = y;
                let segment = self.finalize(segment);

                if self.frame.try_add_segment(segment, self.max_segments) {
                    debug!(
                        "Committed segment #{} ({}, {}) -> ({}, {})",
                        self.frame.len() - 1,
                        segment.x1,
                        segment.y1,
                        segment.x2,
                        segment.y2
                    );
                } else {
                    warn!(
                        "Segment limit ({}) reached; discarding new segment",
                        self.max_segments
                    );
                }
                self.needs_redraw = true;
            }
            EditorState::Moving {
                index,
                grab_x,
                grab_y,
                original,
            } => {
                let moved = self.finalize(original.translated(x - grab_x, y - grab_y));
                self.frame.replace(index, moved);
                debug!("Moved segment #{} by ({:.1}, {:.1})", index, x - grab_x, y - grab_y);
                self.needs_redraw = true;
            }
            EditorState::Idle => {}
        }
    }
}
