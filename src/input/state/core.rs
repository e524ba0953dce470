//! Editing state machine and line editor state.

use crate::config::{Action, KeyBinding};
use crate::draw::{Frame, Segment};
use crate::input::modifiers::Modifiers;
use crate::util;
use std::collections::HashMap;

/// Current editing mode state machine.
///
/// Tracks whether the user is idle, drawing a new segment, or moving a
/// committed one. Selection is tracked separately on [`LineEditor`] and is
/// never set while a draw is in progress.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorState {
    /// Not actively drawing - waiting for user input
    Idle,
    /// Pointer held on empty surface; the segment follows the pointer
    Drawing {
        /// In-progress segment; `x1/y1` stay at the press position
        segment: Segment,
    },
    /// Pointer held on a segment in drag mode; the segment follows the pointer
    Moving {
        /// Index of the segment in the frame
        index: usize,
        /// X coordinate where the pointer grabbed the segment
        grab_x: f64,
        /// Y coordinate where the pointer grabbed the segment
        grab_y: f64,
        /// Segment as it was before the move started
        original: Segment,
    },
}

/// Line editor: committed segments, the in-progress segment, and selection.
///
/// All coordinates passed to the pointer handlers are local surface
/// coordinates; translating client coordinates is the viewport's job.
pub struct LineEditor {
    /// Committed segments
    pub frame: Frame,
    /// Current editing state
    pub state: EditorState,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Whether the view needs to re-read state and redraw
    pub needs_redraw: bool,
    /// Maximum number of committed segments (0 = unlimited)
    pub max_segments: usize,
    /// Snap endpoints to the grid on release
    pub snap_on_release: bool,
    /// Index of the selected segment, if any
    pub(super) selected: Option<usize>,
    /// Current grid spacing (0 until the surface is measured)
    column_width: f64,
    row_height: f64,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
    /// Action the editor cannot handle itself (left for the session)
    pending_action: Option<Action>,
}

impl LineEditor {
    /// Creates an idle editor with no segments.
    ///
    /// Grid spacing starts at zero and must be set via
    /// [`LineEditor::set_grid_spacing`] once the surface has been measured;
    /// until then snapping leaves coordinates untouched.
    pub fn with_defaults(
        max_segments: usize,
        snap_on_release: bool,
        action_map: HashMap<KeyBinding, Action>,
    ) -> Self {
        Self {
            frame: Frame::new(),
            state: EditorState::Idle,
            modifiers: Modifiers::new(),
            needs_redraw: true,
            max_segments,
            snap_on_release,
            selected: None,
            column_width: 0.0,
            row_height: 0.0,
            action_map,
            pending_action: None,
        }
    }

    /// Updates the grid spacing used for snapping. Existing segments are untouched.
    pub fn set_grid_spacing(&mut self, column_width: f64, row_height: f64) {
        self.column_width = column_width;
        self.row_height = row_height;
    }

    pub fn column_width(&self) -> f64 {
        self.column_width
    }

    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Snaps a local point to the nearest grid intersection.
    pub fn snap(&self, x: f64, y: f64) -> (f64, f64) {
        util::snap_to_grid(x, y, self.column_width, self.row_height)
    }

    pub(super) fn finalize(&self, segment: Segment) -> Segment {
        if self.snap_on_release {
            segment.snapped(self.column_width, self.row_height)
        } else {
            segment
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.frame.segments
    }

    /// Segment currently being drawn, if any.
    pub fn active_segment(&self) -> Option<&Segment> {
        match &self.state {
            EditorState::Drawing { segment } => Some(segment),
            _ => None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, EditorState::Drawing { .. })
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Selects a committed segment, discarding any in-progress draw.
    ///
    /// Returns `false` (and changes nothing) if `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.frame.len() {
            log::debug!("Ignoring selection of unknown segment {}", index);
            return false;
        }
        if self.is_drawing() {
            self.state = EditorState::Idle;
        }
        self.selected = Some(index);
        self.needs_redraw = true;
        true
    }

    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.needs_redraw = true;
        }
    }

    /// Returns and clears the redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        self.action_map.iter().find_map(|(binding, action)| {
            binding
                .matches(
                    key_str,
                    self.modifiers.ctrl,
                    self.modifiers.shift,
                    self.modifiers.alt,
                    self.modifiers.meta,
                )
                .then_some(*action)
        })
    }

    pub(super) fn set_pending_action(&mut self, action: Action) {
        self.pending_action = Some(action);
    }

    /// Takes the action left for the owner to handle (e.g. mode toggle).
    pub fn take_pending_action(&mut self) -> Option<Action> {
        self.pending_action.take()
    }
}
