//! Physics integrator.
//!
//! One explicit Euler step per tick: velocity picks up the sum of its named
//! accelerations, then position picks up the velocity. Units are pixels per
//! tick, so the result does not depend on wall-clock time.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;

/// Integrate every rigid body and clear the player's ground contact.
///
/// `on_ground` only survives the tick if the landing resolver sets it again.
pub fn movement_system(mut query: Query<(&mut MapPosition, &mut RigidBody, Option<&mut Player>)>) {
    for (mut position, mut rigidbody, player) in query.iter_mut() {
        if let Some(mut player) = player {
            player.on_ground = false;
        }
        let (ax, ay) = rigidbody.total_acceleration();
        rigidbody.vx += ax;
        rigidbody.vy += ay;
        position.x += rigidbody.vx;
        position.y += rigidbody.vy;
    }
}
