use bevy_ecs::prelude::Component;

/// Patrolling enemy. Horizontal speed lives in its
/// [`RigidBody`](super::rigidbody::RigidBody); the wall-bounce system flips
/// its sign at the screen edges.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Enemy;
