//! Input handling and line editor state machine.
//!
//! This module translates host keyboard and pointer events into editing
//! actions. It maintains the committed segment list, the segment being drawn
//! or moved, the selection, and the shared draw/drag mode flag.

pub mod events;
pub mod mode;
pub mod modifiers;
pub mod state;

// Re-export commonly used types at module level
pub use events::{Key, MouseButton};
pub use mode::{InteractionMode, ModeStore};
pub use modifiers::Modifiers;
pub use state::{EditorState, LineEditor};
