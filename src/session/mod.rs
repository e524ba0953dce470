//! Editing session: the context object the view layer talks to.
//!
//! A [`Session`] owns the viewport and the line editor and holds a handle to
//! the shared mode flag. The view layer forwards raw host events through
//! [`Session::dispatch`], then re-reads [`Session::scene`] whenever
//! [`Session::take_redraw`] reports a change. Scripts of recorded events can
//! be replayed through the same path (see [`load_script`]).

mod script;

pub use script::{ScriptError, load_script, parse_script};

use crate::config::{Action, Config};
use crate::draw::Scene;
use crate::input::{Key, LineEditor, ModeStore, Modifiers, MouseButton};
use crate::viewport::{SurfaceLayout, Viewport};
use anyhow::{Result, anyhow};
use log::debug;

/// Host events consumed by the session.
///
/// Pointer coordinates are client-space; the session translates them into
/// local canvas coordinates before they reach the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Surface was (re)measured
    Resize(SurfaceLayout),
    /// Pointer pressed; `target` is the index of the segment under the pointer
    PointerDown {
        x: f64,
        y: f64,
        button: MouseButton,
        target: Option<usize>,
    },
    /// Pointer moved
    PointerMove { x: f64, y: f64 },
    /// Pointer released
    PointerUp { x: f64, y: f64 },
    /// Mouse wheel scrolled vertically
    Wheel { delta_y: f64 },
    /// Key pressed, with the modifier flags the host reported alongside it
    KeyDown { key: Key, modifiers: Modifiers },
    /// Key released
    KeyUp { key: Key },
    /// Toolbar "clear all" button
    ClearAll,
    /// Toolbar draw/drag mode switch
    ToggleMode,
    /// Toolbar "snap everything to the grid" button
    ResnapAll,
}

/// Viewport, editor, and a handle on the shared mode flag.
pub struct Session {
    pub viewport: Viewport,
    pub editor: LineEditor,
    mode: ModeStore,
}

impl Session {
    /// Builds a session from configuration.
    ///
    /// The surface starts unmeasured; dispatch [`InputEvent::Resize`] before
    /// pointer input so snapping has a grid to work with.
    ///
    /// # Errors
    /// Returns an error if the configured keybindings are invalid or clash.
    pub fn new(config: &Config, mode: ModeStore) -> Result<Self> {
        let action_map = config
            .keybindings
            .build_action_map()
            .map_err(|err| anyhow!("Invalid keybindings: {err}"))?;

        Ok(Self {
            viewport: Viewport::new(config.grid.columns, config.grid.rows, config.zoom.scale),
            editor: LineEditor::with_defaults(
                config.editor.max_segments,
                config.editor.snap_on_release,
                action_map,
            ),
            mode,
        })
    }

    /// Shared mode flag handle.
    pub fn mode(&self) -> &ModeStore {
        &self.mode
    }

    /// Applies one host event.
    pub fn dispatch(&mut self, event: InputEvent) {
        debug!("Dispatching {:?}", event);
        match event {
            InputEvent::Resize(layout) => {
                self.viewport.resize(layout);
                self.editor
                    .set_grid_spacing(self.viewport.column_width(), self.viewport.row_height());
                self.editor.needs_redraw = true;
            }
            InputEvent::PointerDown {
                x,
                y,
                button,
                target,
            } => {
                let local = self.viewport.to_local(x, y);
                match target {
                    Some(index) if button == MouseButton::Left && self.mode.is_drag_mode() => {
                        self.editor.begin_move(index, local.x, local.y);
                    }
                    _ => self.editor.on_pointer_down(button, local.x, local.y, target),
                }
            }
            InputEvent::PointerMove { x, y } => {
                let local = self.viewport.to_local(x, y);
                self.editor.on_pointer_move(local.x, local.y);
            }
            InputEvent::PointerUp { x, y } => {
                let local = self.viewport.to_local(x, y);
                self.editor.on_pointer_up(local.x, local.y);
            }
            InputEvent::Wheel { delta_y } => {
                if self.viewport.on_wheel(delta_y) {
                    self.editor.needs_redraw = true;
                }
            }
            InputEvent::KeyDown { key, modifiers } => {
                self.editor.modifiers = modifiers;
                self.editor.on_key_press(key);
            }
            InputEvent::KeyUp { key } => self.editor.on_key_release(key),
            InputEvent::ClearAll => self.editor.clear_all(),
            InputEvent::ToggleMode => self.editor.handle_action(Action::ToggleMode),
            InputEvent::ResnapAll => {
                self.editor.resnap_all();
            }
        }

        if let Some(Action::ToggleMode) = self.editor.take_pending_action() {
            self.mode.toggle();
            self.editor.needs_redraw = true;
        }
    }

    /// Replays a sequence of events in order.
    pub fn replay<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.dispatch(event);
        }
    }

    /// Returns and clears the redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        self.editor.take_redraw()
    }

    /// Snapshot of everything the view layer draws.
    pub fn scene(&self) -> Scene {
        let layout = self.viewport.layout();
        Scene {
            width: layout.width,
            height: layout.height,
            view_box: self.viewport.view_box(),
            grid: self.viewport.grid().to_vec(),
            segments: self.editor.segments().to_vec(),
            active: self.editor.active_segment().copied(),
            selected: self.editor.selected(),
            drag_mode: self.mode.is_drag_mode(),
        }
    }
}
