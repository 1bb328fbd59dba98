//! Procedural level generation.
//!
//! Pure functions that turn a random source and a few anchors into platform,
//! coin and enemy placements. Nothing here touches the ECS world; the
//! [`crate::systems::levelgen`] system turns the specs into entities.
//!
//! # Batch layout
//!
//! A batch is always [`PLATFORMS_PER_BATCH`] platforms stacked upward from
//! `y_start`: each one sits a random gap above the previous, so y strictly
//! decreases and platforms of one batch never share a row. Horizontal
//! positions stay within `x_spread` of the reference x (the player), which
//! keeps every batch reachable.

use arrayvec::ArrayVec;
use fastrand::Rng;

use crate::components::coin::COIN_SIZE;
use crate::components::platform::BLOCK_SIZE;
use crate::resources::tuning::Tuning;

/// Platforms produced by one call to [`generate`].
pub const PLATFORMS_PER_BATCH: usize = 5;

/// Distance of the starting ground platform from the bottom of the screen.
const GROUND_OFFSET: f32 = 50.0;
/// Horizontal inset of the ground platform.
const GROUND_INSET: f32 = 20.0;
/// The player spawns with its centre this far above the bottom of the screen.
const PLAYER_SPAWN_OFFSET: f32 = 100.0;
/// The first generated batch starts this far above the bottom of the screen.
const FIRST_BATCH_OFFSET: f32 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformSpec {
    pub x: f32,
    pub y: f32,
    pub blocks_wide: u32,
}

impl PlatformSpec {
    pub fn width(&self) -> f32 {
        self.blocks_wide as f32 * BLOCK_SIZE
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinSpec {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySpec {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
}

/// Output of one generator call.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    pub platforms: ArrayVec<PlatformSpec, PLATFORMS_PER_BATCH>,
    pub coins: ArrayVec<CoinSpec, PLATFORMS_PER_BATCH>,
}

/// Inclusive integer range for new platform x positions.
///
/// `[max(0, ref_x - spread), min(screen_w - right_margin, ref_x + spread)]`,
/// rounded inward. Collapses to its lower bound when the clamps cross.
pub fn x_range(reference_x: f32, screen_w: f32, tuning: &Tuning) -> (i32, i32) {
    let lo = (reference_x - tuning.x_spread).max(0.0).ceil() as i32;
    let hi = (screen_w - tuning.right_margin)
        .min(reference_x + tuning.x_spread)
        .floor() as i32;
    (lo, hi.max(lo))
}

/// Generate a batch of platforms (and their coins) above `y_start`.
pub fn generate(
    y_start: f32,
    reference_x: f32,
    screen_w: f32,
    tuning: &Tuning,
    rng: &mut Rng,
) -> Batch {
    let (lo, hi) = x_range(reference_x, screen_w, tuning);
    let gap_min = tuning.gap_min.max(1);
    let gap_max = tuning.gap_max.max(gap_min);
    let blocks_max = tuning.blocks_max.max(tuning.blocks_min);

    let mut batch = Batch::default();
    let mut cursor = y_start;
    for _ in 0..PLATFORMS_PER_BATCH {
        let x = rng.i32(lo..=hi) as f32;
        cursor -= rng.i32(gap_min..=gap_max) as f32;
        let platform = PlatformSpec {
            x,
            y: cursor,
            blocks_wide: rng.u32(tuning.blocks_min..=blocks_max),
        };
        if rng.f32() < tuning.coin_chance {
            batch.coins.push(coin_on(&platform, tuning, rng));
        }
        batch.platforms.push(platform);
    }
    batch
}

/// Place a coin at a random offset along the platform, `coin_lift` above it.
fn coin_on(platform: &PlatformSpec, tuning: &Tuning, rng: &mut Rng) -> CoinSpec {
    let span = (platform.width() - COIN_SIZE).max(0.0) as i32;
    CoinSpec {
        x: platform.x + rng.i32(0..=span) as f32,
        y: platform.y - tuning.coin_lift,
    }
}

/// Roll one enemy per platform with the score-dependent chance.
///
/// Enemies are centred on their platform, `enemy_lift` above its top, moving
/// left or right at `enemy_speed` with equal probability.
pub fn enemies_for(
    platforms: &[PlatformSpec],
    score: u32,
    tuning: &Tuning,
    rng: &mut Rng,
) -> ArrayVec<EnemySpec, PLATFORMS_PER_BATCH> {
    let chance = tuning.enemy_chance(score);
    let mut enemies = ArrayVec::new();
    for p in platforms.iter().take(PLATFORMS_PER_BATCH) {
        if rng.f32() >= chance {
            continue;
        }
        let vx = if rng.bool() {
            tuning.enemy_speed
        } else {
            -tuning.enemy_speed
        };
        enemies.push(EnemySpec {
            x: p.x + p.width() / 2.0 - tuning.enemy_size / 2.0,
            y: p.y - tuning.enemy_lift,
            vx,
        });
    }
    enemies
}

/// Starting layout of a run.
#[derive(Debug, Clone)]
pub struct InitialLevel {
    /// Top-left of the player.
    pub player: (f32, f32),
    /// Wide platform under the player.
    pub ground: PlatformSpec,
    pub batch: Batch,
}

/// Build the starting layout: the player near the bottom centre, a ground
/// platform spanning the screen under it and one batch above. No enemies.
pub fn initial_level(screen_w: f32, screen_h: f32, tuning: &Tuning, rng: &mut Rng) -> InitialLevel {
    let half = tuning.player_size / 2.0;
    let player = (screen_w / 2.0 - half, screen_h - PLAYER_SPAWN_OFFSET - half);
    let ground = PlatformSpec {
        x: GROUND_INSET,
        y: screen_h - GROUND_OFFSET,
        blocks_wide: (((screen_w - 2.0 * GROUND_INSET) / BLOCK_SIZE).floor() as u32).max(1),
    };
    let batch = generate(screen_h - FIRST_BATCH_OFFSET, player.0, screen_w, tuning, rng);
    InitialLevel {
        player,
        ground,
        batch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_range_centre_of_screen() {
        let t = Tuning::default();
        assert_eq!(x_range(400.0, 800.0, &t), (200, 600));
    }

    #[test]
    fn test_x_range_clamps_at_edges() {
        let t = Tuning::default();
        assert_eq!(x_range(50.0, 800.0, &t), (0, 250));
        assert_eq!(x_range(760.0, 800.0, &t), (560, 680));
    }

    #[test]
    fn test_x_range_never_inverted() {
        let t = Tuning::default();
        let (lo, hi) = x_range(400.0, 100.0, &t);
        assert!(lo <= hi);
    }

    #[test]
    fn test_generate_stacks_five_platforms_upward() {
        let t = Tuning::default();
        for seed in 0..50 {
            let mut rng = Rng::with_seed(seed);
            let batch = generate(450.0, 400.0, 800.0, &t, &mut rng);
            assert_eq!(batch.platforms.len(), PLATFORMS_PER_BATCH);

            let mut prev = 450.0;
            for p in &batch.platforms {
                let gap = prev - p.y;
                assert!((80.0..=120.0).contains(&gap), "gap {gap}");
                assert!((200.0..=600.0).contains(&p.x), "x {}", p.x);
                assert!((3..=5).contains(&p.blocks_wide));
                prev = p.y;
            }
        }
    }

    #[test]
    fn test_coins_sit_on_their_platform() {
        let t = Tuning::default();
        let mut rng = Rng::with_seed(7);
        let mut seen = 0;
        for _ in 0..40 {
            let batch = generate(0.0, 400.0, 800.0, &t, &mut rng);
            for c in &batch.coins {
                let owner = batch
                    .platforms
                    .iter()
                    .find(|p| (p.y - t.coin_lift - c.y).abs() < 1e-3)
                    .expect("coin without platform");
                assert!(c.x >= owner.x);
                assert!(c.x + COIN_SIZE <= owner.x + owner.width());
                seen += 1;
            }
        }
        // 200 platforms at 50%: some coins, not all
        assert!(seen > 0 && seen < 200);
    }

    #[test]
    fn test_no_coins_when_chance_is_zero() {
        let t = Tuning {
            coin_chance: 0.0,
            ..Tuning::default()
        };
        let mut rng = Rng::with_seed(3);
        assert!(generate(0.0, 400.0, 800.0, &t, &mut rng).coins.is_empty());
    }

    #[test]
    fn test_enemies_centred_above_platform() {
        let t = Tuning {
            enemy_base_chance: 1.0,
            ..Tuning::default()
        };
        let mut rng = Rng::with_seed(11);
        let platforms = [PlatformSpec {
            x: 100.0,
            y: 300.0,
            blocks_wide: 4,
        }];
        let enemies = enemies_for(&platforms, 0, &t, &mut rng);
        assert_eq!(enemies.len(), 1);
        let e = enemies[0];
        assert_eq!(e.x, 100.0 + 80.0 - 20.0);
        assert_eq!(e.y, 250.0);
        assert_eq!(e.vx.abs(), 3.0);
    }

    #[test]
    fn test_high_score_always_spawns_enemies() {
        let t = Tuning::default();
        let mut rng = Rng::with_seed(5);
        let batch = generate(0.0, 400.0, 800.0, &t, &mut rng);
        // 0.3 + 80 * 0.01 > 1.0
        let enemies = enemies_for(&batch.platforms, 8000, &t, &mut rng);
        assert_eq!(enemies.len(), PLATFORMS_PER_BATCH);
    }

    #[test]
    fn test_zero_chance_spawns_nothing() {
        let t = Tuning {
            enemy_base_chance: 0.0,
            enemy_chance_per_100: 0.0,
            ..Tuning::default()
        };
        let mut rng = Rng::with_seed(5);
        let batch = generate(0.0, 400.0, 800.0, &t, &mut rng);
        assert!(enemies_for(&batch.platforms, 5000, &t, &mut rng).is_empty());
    }

    #[test]
    fn test_initial_level_layout() {
        let t = Tuning::default();
        let mut rng = Rng::with_seed(1);
        let level = initial_level(800.0, 600.0, &t, &mut rng);
        assert_eq!(level.player, (380.0, 480.0));
        assert_eq!(level.ground.x, 20.0);
        assert_eq!(level.ground.y, 550.0);
        assert_eq!(level.ground.blocks_wide, 19);
        assert_eq!(level.batch.platforms.len(), PLATFORMS_PER_BATCH);
        assert!(level.batch.platforms.iter().all(|p| p.y < 450.0));
    }
}
