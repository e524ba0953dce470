//! Configuration type definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Grid layout settings.
///
/// The surface is divided into `columns` x `rows` equal cells; committed
/// segment endpoints snap to the cell corners.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GridConfig {
    /// Number of grid columns (valid range: 1 - 500)
    #[serde(default = "default_columns")]
    pub columns: u32,

    /// Number of grid rows (valid range: 1 - 500)
    #[serde(default = "default_rows")]
    pub rows: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            rows: default_rows(),
        }
    }
}

/// Zoom behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ZoomConfig {
    /// Divisor applied to wheel deltas before they are added to the zoom value
    /// (valid range: 1.0 - 1000.0). Larger values zoom more slowly.
    #[serde(default = "default_zoom_scale")]
    pub scale: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            scale: default_zoom_scale(),
        }
    }
}

/// Line editor behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EditorConfig {
    /// Maximum number of committed segments (0 = unlimited)
    #[serde(default)]
    pub max_segments: usize,

    /// Snap segment endpoints to the grid when the pointer is released.
    /// Disable for free-hand straight lines.
    #[serde(default = "default_snap_on_release")]
    pub snap_on_release: bool,

    /// Start the session in drag mode instead of draw mode
    #[serde(default)]
    pub start_in_drag_mode: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_segments: 0,
            snap_on_release: default_snap_on_release(),
            start_in_drag_mode: false,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_columns() -> u32 {
    15
}

fn default_rows() -> u32 {
    15
}

fn default_zoom_scale() -> f64 {
    10.0
}

fn default_snap_on_release() -> bool {
    true
}
