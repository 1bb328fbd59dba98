//! Per-tick input resource.
//!
//! Shells poll their input device once per tick and hand the set of held
//! actions to [`InputState::update_all`]. Systems only read the resource,
//! never the device, so the simulation can be driven by a keyboard, an
//! autopilot or a test script alike. Nothing latches between ticks: an
//! action absent from a tick's set is inactive for that tick.
use bevy_ecs::prelude::*;

/// Enumeration of logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    Jump,
    /// Start a new run from the game over screen.
    Restart,
    Quit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean action state with edge detection.
pub struct BoolState {
    /// Whether the action is held this tick.
    pub active: bool,
    /// Whether the action became active this tick.
    pub just_pressed: bool,
}

impl BoolState {
    /// Advance to the next tick with the given held value.
    pub fn update(&mut self, active: bool) {
        self.just_pressed = active && !self.active;
        self.active = active;
    }
}

/// Resource capturing the per-tick input relevant to gameplay.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub move_left: BoolState,
    pub move_right: BoolState,
    pub jump: BoolState,
    pub restart: BoolState,
    pub quit: BoolState,
}

impl InputState {
    /// Replace this tick's input with the given held actions.
    pub fn update_all(&mut self, held: &[InputAction]) {
        let is_held = |a: InputAction| held.contains(&a);
        self.move_left.update(is_held(InputAction::MoveLeft));
        self.move_right.update(is_held(InputAction::MoveRight));
        self.jump.update(is_held(InputAction::Jump));
        self.restart.update(is_held(InputAction::Restart));
        self.quit.update(is_held(InputAction::Quit));
    }

    /// Horizontal direction for this tick: -1, 0 or 1. Left wins when both
    /// directions are held.
    pub fn horizontal(&self) -> f32 {
        if self.move_left.active {
            -1.0
        } else if self.move_right.active {
            1.0
        } else {
            0.0
        }
    }
}
