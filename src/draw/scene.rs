//! Read-only snapshot of everything the view layer draws.

use super::segment::{GridLine, Segment};
use crate::viewport::ViewBox;
use serde::Serialize;

/// Output surface handed to the view layer after each mutation.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    /// Surface width in CSS pixels
    pub width: f64,
    /// Surface height in CSS pixels
    pub height: f64,
    /// Visible window after zoom
    pub view_box: ViewBox,
    /// Background grid, columns first
    pub grid: Vec<GridLine>,
    /// Committed segments in draw order
    pub segments: Vec<Segment>,
    /// Segment currently under the pointer, if drawing
    pub active: Option<Segment>,
    /// Index of the selected committed segment
    pub selected: Option<usize>,
    /// Whether pointer-down on a segment moves it instead of only selecting
    pub drag_mode: bool,
}
