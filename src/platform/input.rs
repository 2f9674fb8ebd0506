//! Keyboard state

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::sim::TickInput;

/// Discrete actions triggered by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start or restart
    Space,
    /// Leave the game immediately
    Quit,
}

/// Which movement keys are currently held
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyState {
    left: bool,
    right: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Returns a command for fresh presses of
    /// space or escape; auto-repeat is ignored.
    pub fn handle_key(&mut self, code: KeyCode, state: ElementState, repeat: bool) -> Option<Command> {
        let pressed = state == ElementState::Pressed;
        match code {
            KeyCode::ArrowLeft => self.left = pressed,
            KeyCode::ArrowRight => self.right = pressed,
            KeyCode::Space if pressed && !repeat => return Some(Command::Space),
            KeyCode::Escape if pressed && !repeat => return Some(Command::Quit),
            _ => {}
        }
        None
    }

    /// Drop all held keys (window lost focus)
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    /// Snapshot for this frame's simulation step
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
        }
    }
}
