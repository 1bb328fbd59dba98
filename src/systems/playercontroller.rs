//! Input-to-velocity controller for the player.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! drives entities carrying
//! [`InputControlled`](crate::components::inputcontrolled::InputControlled):
//! horizontal velocity follows the held direction, and a jump is only
//! accepted while the body stands on something.
use bevy_ecs::prelude::*;

use crate::components::inputcontrolled::InputControlled;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::resources::input::InputState;

/// Update each controlled entity's `RigidBody` velocity based on input.
pub fn player_input_controller(
    mut query: Query<(&InputControlled, &mut RigidBody, &mut Player, Option<&mut Sprite>)>,
    input_state: Res<InputState>,
) {
    for (controls, mut rigidbody, mut player, sprite) in query.iter_mut() {
        rigidbody.vx = input_state.horizontal() * controls.run_speed;

        if input_state.jump.active && player.on_ground {
            rigidbody.vy = controls.jump_velocity;
            player.on_ground = false;
            player.is_jumping = true;
        }

        if let Some(mut sprite) = sprite {
            if rigidbody.vx != 0.0 {
                sprite.flip_h = rigidbody.vx < 0.0;
            }
        }
    }
}
