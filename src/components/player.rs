//! Player state component.

use bevy_ecs::prelude::Component;

/// Marker plus contact state of the player-controlled entity.
///
/// `on_ground` is cleared by the movement system every tick and set again by
/// the landing resolver, so it always reflects the contact of the current
/// tick.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player {
    pub on_ground: bool,
    pub is_jumping: bool,
}
