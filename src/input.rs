use nannou::prelude::*;

use crate::scene::Scene;

/// Host window events, narrowed to what the demo reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    /// Releases trigger nothing; the key is only logged.
    KeyUp(Key),
    Other,
}

impl From<WindowEvent> for InputEvent {
    fn from(event: WindowEvent) -> Self {
        match event {
            WindowEvent::Closed => InputEvent::Quit,
            WindowEvent::KeyPressed(key) => InputEvent::KeyDown(key),
            WindowEvent::KeyReleased(key) => InputEvent::KeyUp(key),
            _ => InputEvent::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Applies one event to the scene. Returns whether the frame loop goes on.
pub fn handle(scene: &mut Scene, event: InputEvent) -> LoopState {
    match event {
        InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => return LoopState::Terminated,
        InputEvent::KeyDown(Key::Up) => scene.grow(),
        InputEvent::KeyDown(Key::Down) => scene.shrink(),
        InputEvent::KeyUp(key) => log::trace!("released {:?}", key),
        InputEvent::KeyDown(_) | InputEvent::Other => {}
    }
    LoopState::Running
}

/// Interpolation extent for a pointer at window-local `x`.
///
/// Not clamped: a pointer reported outside the window gives an extent
/// below 0 or above 1.
pub fn extent_from_pointer(x: f64, width: f64) -> f64 {
    x / width
}
