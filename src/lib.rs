//! Grid-snapped line sketching model.
//!
//! Exposes the editing model (viewport, line editor, shared mode flag) and
//! the session that wires them to host events, so that any view layer (a
//! browser canvas, a native window, or the bundled SVG replay tool) can drive
//! the same state machine.

pub mod config;
pub mod draw;
pub mod input;
pub mod session;
pub mod util;
pub mod viewport;

pub use config::Config;
pub use session::{InputEvent, Session};
