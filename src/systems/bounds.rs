//! Screen edge handling.
//!
//! The player is clamped to the playfield horizontally; enemies bounce off
//! both side walls. Neither touches the vertical axis, which belongs to the
//! camera and the cull step.
use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::resources::screensize::ScreenSize;

/// Keep the player inside `[0, screen_width - player_width]`.
pub fn clamp_player_to_screen(
    screen: Res<ScreenSize>,
    mut query: Query<(&mut MapPosition, &BoxCollider), With<Player>>,
) {
    for (mut position, collider) in query.iter_mut() {
        let max_x = (screen.w - collider.width).max(0.0);
        position.x = position.x.clamp(0.0, max_x);
    }
}

/// Flip enemy direction on wall contact.
///
/// The new sign always points back into the playfield, so an enemy that
/// overshoots by more than one step cannot get stuck flipping back and forth.
pub fn bounce_enemies(
    screen: Res<ScreenSize>,
    mut query: Query<(&MapPosition, &BoxCollider, &mut RigidBody, Option<&mut Sprite>), With<Enemy>>,
) {
    for (position, collider, mut rigidbody, sprite) in query.iter_mut() {
        if position.x < 0.0 {
            rigidbody.vx = rigidbody.vx.abs();
        } else if position.x + collider.width > screen.w {
            rigidbody.vx = -rigidbody.vx.abs();
        }
        if let Some(mut sprite) = sprite {
            sprite.flip_h = rigidbody.vx < 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> World {
        let mut world = World::new();
        world.insert_resource(ScreenSize::new(800.0, 600.0));
        world
    }

    #[test]
    fn test_player_clamped_both_sides() {
        let mut world = world();
        let left = world
            .spawn((MapPosition::new(-12.0, 100.0), BoxCollider::new(40.0, 40.0), Player::default()))
            .id();
        let right = world
            .spawn((MapPosition::new(790.0, 100.0), BoxCollider::new(40.0, 40.0), Player::default()))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(clamp_player_to_screen);
        schedule.run(&mut world);

        assert_eq!(world.get::<MapPosition>(left).unwrap().x, 0.0);
        assert_eq!(world.get::<MapPosition>(right).unwrap().x, 760.0);
    }

    #[test]
    fn test_enemy_bounces_off_walls() {
        let mut world = world();
        let left = world
            .spawn((
                MapPosition::new(-1.0, 100.0),
                BoxCollider::new(40.0, 40.0),
                RigidBody::with_velocity(-3.0, 0.0),
                Enemy,
            ))
            .id();
        let right = world
            .spawn((
                MapPosition::new(762.0, 100.0),
                BoxCollider::new(40.0, 40.0),
                RigidBody::with_velocity(3.0, 0.0),
                Enemy,
            ))
            .id();
        let inside = world
            .spawn((
                MapPosition::new(400.0, 100.0),
                BoxCollider::new(40.0, 40.0),
                RigidBody::with_velocity(-3.0, 0.0),
                Enemy,
            ))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(bounce_enemies);
        schedule.run(&mut world);

        assert_eq!(world.get::<RigidBody>(left).unwrap().vx, 3.0);
        assert_eq!(world.get::<RigidBody>(right).unwrap().vx, -3.0);
        assert_eq!(world.get::<RigidBody>(inside).unwrap().vx, -3.0);
    }
}
