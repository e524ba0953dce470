//! Surface measurement, grid geometry, and zoom transform.
//!
//! The viewport owns everything derived from the measured size of the
//! drawing surface: grid spacing, the grid lines themselves, the zoom
//! factor accumulated from wheel input, and the SVG-style viewBox window.

use crate::draw::GridLine;
use crate::util::Point;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visible window into the drawing surface.
///
/// Smaller dimensions mean a more zoomed-in view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub width: f64,
    pub height: f64,
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0 0 {} {}", self.width, self.height)
    }
}

/// Measured geometry of the outer surface and the inner drawable canvas.
///
/// Origins are the client-space top-left corners of the two elements; the
/// difference between them is the padding/border the pointer coordinates
/// must be corrected for.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceLayout {
    pub width: f64,
    pub height: f64,
    pub surface_origin: Point,
    pub canvas_origin: Point,
}

impl SurfaceLayout {
    /// Layout with no offset between surface and canvas.
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

/// Builds the grid: `columns` vertical lines then `rows` horizontal lines.
///
/// The first vertical line sits at x=0 and the first horizontal line at y=0;
/// lines are spaced `width / columns` and `height / rows` apart.
pub fn compute_grid(width: f64, height: f64, columns: u32, rows: u32) -> Vec<GridLine> {
    let mut grid = Vec::with_capacity((columns + rows) as usize);
    if columns > 0 {
        let column_width = width / columns as f64;
        for c in 0..columns {
            let x = c as f64 * column_width;
            grid.push(GridLine::new(x, 0.0, x, height));
        }
    }
    if rows > 0 {
        let row_height = height / rows as f64;
        for r in 0..rows {
            let y = r as f64 * row_height;
            grid.push(GridLine::new(0.0, y, width, y));
        }
    }
    grid
}

/// Applies one wheel step to the zoom value.
///
/// Scrolling up (negative `delta_y`) zooms in. The increment is divided by
/// `scale`; a step that would take the value below zero is dropped and the
/// previous value kept.
pub fn apply_zoom_delta(current: f64, delta_y: f64, scale: f64) -> f64 {
    if !delta_y.is_finite() || !(scale.is_finite() && scale > 0.0) {
        return current;
    }
    let next = current + (-delta_y) / scale;
    if next < 0.0 { current } else { next }
}

/// Computes the viewBox for a surface at the given zoom.
///
/// Zoom values below 1 are treated as 1, so the window never grows past the
/// surface itself.
pub fn compute_view_box(width: f64, height: f64, zoom: f64) -> ViewBox {
    let zoom = if zoom < 1.0 || !zoom.is_finite() {
        1.0
    } else {
        zoom
    };
    ViewBox {
        width: width / zoom,
        height: height / zoom,
    }
}

/// Translates client-space pointer coordinates into canvas-local ones.
///
/// The canvas offset inside the surface is subtracted from the raw pointer
/// position.
pub fn to_local_coordinates(pointer: Point, surface_origin: Point, canvas_origin: Point) -> Point {
    let offset = canvas_origin.offset_from(surface_origin);
    pointer.offset_from(offset)
}

/// Grid geometry and zoom state for one drawing surface.
#[derive(Debug, Clone)]
pub struct Viewport {
    columns: u32,
    rows: u32,
    zoom_scale: f64,
    layout: SurfaceLayout,
    column_width: f64,
    row_height: f64,
    zoom: f64,
    grid: Vec<GridLine>,
}

impl Viewport {
    /// Creates an unmeasured viewport; call [`Viewport::resize`] once the
    /// surface has a size.
    pub fn new(columns: u32, rows: u32, zoom_scale: f64) -> Self {
        Self {
            columns,
            rows,
            zoom_scale,
            layout: SurfaceLayout::default(),
            column_width: 0.0,
            row_height: 0.0,
            zoom: 0.0,
            grid: Vec::new(),
        }
    }

    /// Re-measures the surface and rebuilds grid geometry.
    pub fn resize(&mut self, layout: SurfaceLayout) {
        self.layout = layout;
        self.column_width = if self.columns > 0 {
            layout.width / self.columns as f64
        } else {
            0.0
        };
        self.row_height = if self.rows > 0 {
            layout.height / self.rows as f64
        } else {
            0.0
        };
        self.grid = compute_grid(layout.width, layout.height, self.columns, self.rows);
        debug!(
            "Surface resized to {}x{} (cell {:.3}x{:.3}, {} grid lines)",
            layout.width,
            layout.height,
            self.column_width,
            self.row_height,
            self.grid.len()
        );
    }

    /// Feeds a wheel event into the zoom value. Returns `true` if it changed.
    pub fn on_wheel(&mut self, delta_y: f64) -> bool {
        let next = apply_zoom_delta(self.zoom, delta_y, self.zoom_scale);
        if next == self.zoom {
            return false;
        }
        debug!("Zoom {:.3} -> {:.3}", self.zoom, next);
        self.zoom = next;
        true
    }

    /// Raw accumulated zoom value (may be below 1).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Effective magnification, never below 1.
    pub fn zoom_factor(&self) -> f64 {
        self.zoom.max(1.0)
    }

    pub fn view_box(&self) -> ViewBox {
        compute_view_box(self.layout.width, self.layout.height, self.zoom)
    }

    pub fn to_local(&self, x: f64, y: f64) -> Point {
        to_local_coordinates(
            Point::new(x, y),
            self.layout.surface_origin,
            self.layout.canvas_origin,
        )
    }

    pub fn grid(&self) -> &[GridLine] {
        &self.grid
    }

    pub fn column_width(&self) -> f64 {
        self.column_width
    }

    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    pub fn layout(&self) -> SurfaceLayout {
        self.layout
    }
}
