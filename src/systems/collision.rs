//! Collision resolution between the player and the rest of the world.
//!
//! Three passes, run in this order every Playing tick:
//! - [`platform_landing`] snaps a falling player onto a platform
//! - [`coin_pickup`] collects overlapping coins
//! - [`enemy_contact`] ends the run on any enemy overlap
//!
//! All tests are strict AABB overlaps via [`BoxCollider::overlaps`].
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::boxcollider::BoxCollider;
use crate::components::coin::Coin;
use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::platform::Platform;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::events::audio::AudioCue;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::rng::GameRng;
use crate::resources::score::Score;
use crate::resources::tuning::Tuning;

/// Pick the platform top a falling player lands on.
///
/// Among the overlapped platform tops, the highest one (smallest y) that is
/// not above the player's own top edge wins. If every top is above the
/// player's top, the highest overall wins.
pub fn select_landing(player_top: f32, tops: &[f32]) -> Option<f32> {
    let highest = |acc: Option<f32>, top: f32| Some(acc.map_or(top, |a: f32| a.min(top)));
    tops.iter()
        .copied()
        .filter(|&top| top >= player_top)
        .fold(None, highest)
        .or_else(|| tops.iter().copied().fold(None, highest))
}

/// Land a falling player on the platform it overlaps.
pub fn platform_landing(
    mut players: Query<(&mut MapPosition, &BoxCollider, &mut RigidBody, &mut Player)>,
    platforms: Query<(&MapPosition, &BoxCollider), (With<Platform>, Without<Player>)>,
) {
    for (mut position, collider, mut rigidbody, mut player) in players.iter_mut() {
        if rigidbody.vy <= 0.0 {
            continue;
        }
        let tops: Vec<f32> = platforms
            .iter()
            .filter(|(p_pos, p_col)| collider.overlaps(&position, p_col, p_pos))
            .map(|(p_pos, p_col)| p_col.top(p_pos))
            .collect();
        if let Some(top) = select_landing(collider.top(&position), &tops) {
            position.y = top - collider.height;
            rigidbody.vy = 0.0;
            player.on_ground = true;
            player.is_jumping = false;
        }
    }
}

/// Collect every coin the player overlaps.
///
/// Each coin is despawned and adds a random bonus in
/// `[coin_bonus_min, coin_bonus_max]` to the score.
#[allow(clippy::too_many_arguments)]
pub fn coin_pickup(
    mut commands: Commands,
    players: Query<(&MapPosition, &BoxCollider), With<Player>>,
    coins: Query<(Entity, &MapPosition, &BoxCollider), (With<Coin>, Without<Player>)>,
    mut score: ResMut<Score>,
    tuning: Res<Tuning>,
    mut rng: ResMut<GameRng>,
    mut cues: MessageWriter<AudioCue>,
) {
    let Ok((p_pos, p_col)) = players.single() else {
        return;
    };
    let bonus_max = tuning.coin_bonus_max.max(tuning.coin_bonus_min);
    for (entity, c_pos, c_col) in coins.iter() {
        if !p_col.overlaps(p_pos, c_col, c_pos) {
            continue;
        }
        commands.entity(entity).try_despawn();
        let bonus = rng.u32(tuning.coin_bonus_min..=bonus_max);
        let checkpoint = score.add(bonus);
        debug!("Coin collected: +{} (score {})", bonus, score.current);
        cues.write(AudioCue::CoinPickup);
        if checkpoint {
            cues.write(AudioCue::Checkpoint {
                score: score.current,
            });
        }
    }
}

/// Any overlap with an enemy ends the run this tick.
pub fn enemy_contact(
    players: Query<(&MapPosition, &BoxCollider), With<Player>>,
    enemies: Query<(&MapPosition, &BoxCollider), (With<Enemy>, Without<Player>)>,
    mut next_state: ResMut<NextGameState>,
) {
    let Ok((p_pos, p_col)) = players.single() else {
        return;
    };
    if enemies
        .iter()
        .any(|(e_pos, e_col)| p_col.overlaps(p_pos, e_col, e_pos))
    {
        info!("Player hit an enemy");
        next_state.set(GameStates::GameOver);
    }
}
