//! Sketch primitives and SVG output.
//!
//! This module defines the core drawing types:
//! - [`Segment`]: a straight line in local surface coordinates (also used for grid lines)
//! - [`Frame`]: container for all committed segments
//! - [`Scene`]: snapshot of everything the view layer draws
//! - [`render_svg`]: vector output of a scene

pub mod frame;
pub mod render;
pub mod scene;
pub mod segment;

// Re-export commonly used types at module level
pub use frame::Frame;
pub use render::render_svg;
pub use scene::Scene;
pub use segment::{GridLine, Segment};
