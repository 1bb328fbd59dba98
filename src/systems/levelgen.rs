//! Level spawning.
//!
//! Turns the pure placements from [`crate::levelgen`] into entities and keeps
//! the platform count topped up while playing.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::coin::{COIN_SIZE, Coin};
use crate::components::enemy::Enemy;
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::platform::Platform;
use crate::components::player::Player;
use crate::components::rigidbody::{GRAVITY_FORCE, RigidBody};
use crate::components::sprite::{Sprite, SpriteKey};
use crate::components::zindex::ZIndex;
use crate::levelgen::{self, Batch, CoinSpec, EnemySpec, PlatformSpec};
use crate::resources::rng::GameRng;
use crate::resources::score::Score;
use crate::resources::screensize::ScreenSize;
use crate::resources::tuning::Tuning;

pub fn spawn_player(commands: &mut Commands, x: f32, y: f32, tuning: &Tuning) -> Entity {
    let mut rigidbody = RigidBody::new();
    rigidbody.add_force(GRAVITY_FORCE, 0.0, tuning.gravity);
    commands
        .spawn((
            Player::default(),
            MapPosition::new(x, y),
            rigidbody,
            InputControlled::new(tuning.run_speed, -tuning.jump_power),
            BoxCollider::new(tuning.player_size, tuning.player_size),
            Sprite::new(SpriteKey::Player),
            ZIndex::PLAYER,
        ))
        .id()
}

pub fn spawn_platform(commands: &mut Commands, spec: &PlatformSpec) -> Entity {
    let platform = Platform::new(spec.blocks_wide);
    commands
        .spawn((
            MapPosition::new(spec.x, spec.y),
            BoxCollider::new(platform.width(), platform.height()),
            platform,
            Sprite::new(SpriteKey::Platform),
            ZIndex::PLATFORM,
        ))
        .id()
}

pub fn spawn_coin(commands: &mut Commands, spec: &CoinSpec) -> Entity {
    commands
        .spawn((
            Coin,
            MapPosition::new(spec.x, spec.y),
            BoxCollider::new(COIN_SIZE, COIN_SIZE),
            Sprite::new(SpriteKey::Coin),
            ZIndex::COIN,
        ))
        .id()
}

pub fn spawn_enemy(commands: &mut Commands, spec: &EnemySpec, tuning: &Tuning) -> Entity {
    let mut sprite = Sprite::new(SpriteKey::Enemy);
    sprite.flip_h = spec.vx < 0.0;
    commands
        .spawn((
            Enemy,
            MapPosition::new(spec.x, spec.y),
            RigidBody::with_velocity(spec.vx, 0.0),
            BoxCollider::new(tuning.enemy_size, tuning.enemy_size),
            sprite,
            ZIndex::ENEMY,
        ))
        .id()
}

pub fn spawn_batch(commands: &mut Commands, batch: &Batch) {
    for platform in &batch.platforms {
        spawn_platform(commands, platform);
    }
    for coin in &batch.coins {
        spawn_coin(commands, coin);
    }
}

/// Generate one batch above the highest platform when too few remain.
///
/// The batch is anchored at the smallest platform y (falling back to the
/// player, then to the bottom of the screen) and at the player's x. Only
/// these refills roll for enemies; the starting level never has any.
#[allow(clippy::too_many_arguments)]
pub fn refill_platforms(
    mut commands: Commands,
    screen: Res<ScreenSize>,
    tuning: Res<Tuning>,
    score: Res<Score>,
    mut rng: ResMut<GameRng>,
    platforms: Query<&MapPosition, With<Platform>>,
    players: Query<&MapPosition, With<Player>>,
) {
    let active = platforms.iter().count();
    if active >= tuning.min_platforms {
        return;
    }

    let player = players.single().ok().copied();
    let anchor_y = platforms
        .iter()
        .map(|position| position.y)
        .reduce(f32::min)
        .or(player.map(|p| p.y))
        .unwrap_or(screen.h);
    let reference_x = player.map_or(screen.w / 2.0, |p| p.x);

    let batch = levelgen::generate(anchor_y, reference_x, screen.w, &tuning, &mut rng);
    let enemies = levelgen::enemies_for(&batch.platforms, score.current, &tuning, &mut rng);
    spawn_batch(&mut commands, &batch);
    for enemy in &enemies {
        spawn_enemy(&mut commands, enemy, &tuning);
    }
    debug!(
        "Refilled at y={} ({} active): {} platforms, {} coins, {} enemies",
        anchor_y,
        active,
        batch.platforms.len(),
        batch.coins.len(),
        enemies.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with_platforms(ys: &[f32]) -> World {
        let mut world = World::new();
        world.insert_resource(ScreenSize::new(800.0, 600.0));
        world.insert_resource(Tuning::default());
        world.insert_resource(Score::default());
        world.insert_resource(GameRng::with_seed(42));
        world.spawn((MapPosition::new(380.0, 480.0), Player::default()));
        for &y in ys {
            world.spawn((MapPosition::new(300.0, y), Platform::new(3)));
        }
        world
    }

    fn platform_ys(world: &mut World) -> Vec<f32> {
        let mut q = world.query_filtered::<&MapPosition, With<Platform>>();
        q.iter(world).map(|p| p.y).collect()
    }

    #[test]
    fn test_refill_adds_one_batch_above_highest() {
        let mut world = world_with_platforms(&[550.0, 300.0]);
        let mut schedule = Schedule::default();
        schedule.add_systems(refill_platforms);
        schedule.run(&mut world);

        let ys = platform_ys(&mut world);
        assert_eq!(ys.len(), 2 + levelgen::PLATFORMS_PER_BATCH);
        let new: Vec<f32> = ys.into_iter().filter(|&y| y != 550.0 && y != 300.0).collect();
        assert!(new.iter().all(|&y| y < 300.0));
    }

    #[test]
    fn test_refill_noop_when_enough_platforms() {
        let ys: Vec<f32> = (0..10).map(|i| 500.0 - i as f32 * 50.0).collect();
        let mut world = world_with_platforms(&ys);
        let mut schedule = Schedule::default();
        schedule.add_systems(refill_platforms);
        schedule.run(&mut world);
        assert_eq!(platform_ys(&mut world).len(), 10);
    }

    #[test]
    fn test_platform_collider_matches_blocks() {
        let mut world = World::new();
        let spec = PlatformSpec {
            x: 100.0,
            y: 200.0,
            blocks_wide: 4,
        };
        let mut schedule = Schedule::default();
        schedule.add_systems(move |mut commands: Commands| {
            spawn_platform(&mut commands, &spec);
        });
        schedule.run(&mut world);

        let (platform, collider) = world
            .query::<(&Platform, &BoxCollider)>()
            .single(&world)
            .unwrap();
        assert_eq!(collider.width, platform.width());
        assert_eq!(collider.height, platform.height());
        assert_eq!(collider.height, 40.0);
    }
}
