//! Recorded event scripts.
//!
//! A script is a TOML file with one `[[event]]` table per host event:
//!
//! ```toml
//! [[event]]
//! kind = "resize"
//! width = 1500
//! height = 1500
//!
//! [[event]]
//! kind = "pointer_down"
//! x = 142
//! y = 130
//!
//! [[event]]
//! kind = "pointer_up"
//! x = 365
//! y = 210
//!
//! [[event]]
//! kind = "key"
//! key = "Mod+Z"
//! ```

use super::InputEvent;
use crate::config::KeyBinding;
use crate::input::{Key, Modifiers, MouseButton};
use crate::util::Point;
use crate::viewport::SurfaceLayout;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading an event script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read event script {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse event script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid key '{key}' in event {index}: {reason}")]
    InvalidKey {
        index: usize,
        key: String,
        reason: String,
    },
}

#[derive(Debug, Deserialize)]
struct EventScript {
    #[serde(default)]
    event: Vec<ScriptEvent>,
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ScriptButton {
    #[default]
    Left,
    Right,
    Middle,
}

impl From<ScriptButton> for MouseButton {
    fn from(button: ScriptButton) -> Self {
        match button {
            ScriptButton::Left => MouseButton::Left,
            ScriptButton::Right => MouseButton::Right,
            ScriptButton::Middle => MouseButton::Middle,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ScriptEvent {
    Resize {
        width: f64,
        height: f64,
        #[serde(default)]
        surface_x: f64,
        #[serde(default)]
        surface_y: f64,
        #[serde(default)]
        canvas_x: f64,
        #[serde(default)]
        canvas_y: f64,
    },
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        button: ScriptButton,
        #[serde(default)]
        target: Option<usize>,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp {
        x: f64,
        y: f64,
    },
    Wheel {
        delta_y: f64,
    },
    Key {
        key: String,
    },
    ClearAll,
    ToggleMode,
    ResnapAll,
}

/// Splits a chord like "Ctrl+Z" into the key and its modifier flags.
fn parse_chord(index: usize, chord: &str) -> Result<(Key, Modifiers), ScriptError> {
    let invalid = |reason: String| ScriptError::InvalidKey {
        index,
        key: chord.to_string(),
        reason,
    };
    let binding = KeyBinding::parse(chord).map_err(invalid)?;
    let key = Key::from_name(&binding.key);
    if key == Key::Unknown {
        return Err(invalid(format!("unknown key name '{}'", binding.key)));
    }
    let modifiers = Modifiers {
        shift: binding.shift,
        ctrl: binding.ctrl,
        alt: binding.alt,
        meta: binding.meta,
    };
    Ok((key, modifiers))
}

impl ScriptEvent {
    fn into_input(self, index: usize) -> Result<InputEvent, ScriptError> {
        Ok(match self {
            ScriptEvent::Resize {
                width,
                height,
                surface_x,
                surface_y,
                canvas_x,
                canvas_y,
            } => InputEvent::Resize(SurfaceLayout {
                width,
                height,
                surface_origin: Point::new(surface_x, surface_y),
                canvas_origin: Point::new(canvas_x, canvas_y),
            }),
            ScriptEvent::PointerDown {
                x,
                y,
                button,
                target,
            } => InputEvent::PointerDown {
                x,
                y,
                button: button.into(),
                target,
            },
            ScriptEvent::PointerMove { x, y } => InputEvent::PointerMove { x, y },
            ScriptEvent::PointerUp { x, y } => InputEvent::PointerUp { x, y },
            ScriptEvent::Wheel { delta_y } => InputEvent::Wheel { delta_y },
            ScriptEvent::Key { key } => {
                let (key, modifiers) = parse_chord(index, &key)?;
                InputEvent::KeyDown { key, modifiers }
            }
            ScriptEvent::ClearAll => InputEvent::ClearAll,
            ScriptEvent::ToggleMode => InputEvent::ToggleMode,
            ScriptEvent::ResnapAll => InputEvent::ResnapAll,
        })
    }
}

/// Parses script text into host events, in file order.
pub fn parse_script(text: &str) -> Result<Vec<InputEvent>, ScriptError> {
    let script: EventScript = toml::from_str(text)?;
    script
        .event
        .into_iter()
        .enumerate()
        .map(|(index, event)| event.into_input(index))
        .collect()
}

/// Reads and parses a script file.
pub fn load_script(path: &Path) -> Result<Vec<InputEvent>, ScriptError> {
    let text = fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let events = parse_script(&text)?;
    log::info!("Loaded {} event(s) from {}", events.len(), path.display());
    Ok(events)
}
