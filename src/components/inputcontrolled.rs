//! Input-driven movement parameters.
//!
//! [`InputControlled`] tells [`crate::systems::playercontroller`] how strongly
//! an entity reacts to the move and jump inputs.

use bevy_ecs::prelude::Component;

/// Movement intent parameters derived from player input.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Horizontal speed in pixels per tick while a direction is held.
    pub run_speed: f32,
    /// Vertical velocity applied on jump (negative is upward).
    pub jump_velocity: f32,
}

impl InputControlled {
    pub fn new(run_speed: f32, jump_velocity: f32) -> Self {
        Self {
            run_speed,
            jump_velocity,
        }
    }
}
