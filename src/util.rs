//! Utility functions for grid snapping and small geometry helpers.
//!
//! This module provides:
//! - [`Point`], a plain 2D coordinate used for pointer and element origins
//! - Grid snapping arithmetic shared by the editor and resnap action

use serde::{Deserialize, Serialize};

// ============================================================================
// Points
// ============================================================================

/// A 2D coordinate in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    pub fn offset_from(self, other: Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

// ============================================================================
// Grid Snapping
// ============================================================================

/// Snaps a single coordinate to the nearest multiple of `cell`.
///
/// Ties round half away from zero (`f64::round`). A non-positive or
/// non-finite cell size means the grid has not been measured yet, in which
/// case the value is returned untouched.
pub fn snap_axis(value: f64, cell: f64) -> f64 {
    if !(cell.is_finite() && cell > 0.0) {
        return value;
    }
    (value / cell).round() * cell
}

/// Snaps a point to the nearest grid intersection.
///
/// # Arguments
/// * `x` - Local X coordinate
/// * `y` - Local Y coordinate
/// * `column_width` - Horizontal grid spacing
/// * `row_height` - Vertical grid spacing
///
/// # Returns
/// `(round(x / column_width) * column_width, round(y / row_height) * row_height)`
pub fn snap_to_grid(x: f64, y: f64, column_width: f64, row_height: f64) -> (f64, f64) {
    (snap_axis(x, column_width), snap_axis(y, row_height))
}
