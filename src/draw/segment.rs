//! Line segment definitions for grid sketches.

use crate::util;
use serde::{Deserialize, Serialize};

/// A straight line between two points in local surface coordinates.
///
/// Committed segments never change except while being moved; the segment
/// under construction is mutated on every pointer motion until release.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    /// Starting X coordinate
    pub x1: f64,
    /// Starting Y coordinate
    pub y1: f64,
    /// Ending X coordinate
    pub x2: f64,
    /// Ending Y coordinate
    pub y2: f64,
}

/// Grid lines share the segment shape but are derived from the surface size.
pub type GridLine = Segment;

impl Segment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Creates a zero-length segment anchored at `(x, y)`.
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(x, y, x, y)
    }

    /// Returns a copy with both endpoints snapped independently to the grid.
    pub fn snapped(&self, column_width: f64, row_height: f64) -> Self {
        let (x1, y1) = util::snap_to_grid(self.x1, self.y1, column_width, row_height);
        let (x2, y2) = util::snap_to_grid(self.x2, self.y2, column_width, row_height);
        Self { x1, y1, x2, y2 }
    }

    /// Returns a copy shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            x2: self.x2 + dx,
            y2: self.y2 + dy,
        }
    }

    /// True when both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.x1 == self.x2 && self.y1 == self.y2
    }

    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }
}
