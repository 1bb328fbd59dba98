//! Simulation tuning constants.
//!
//! [`Tuning`] gathers every number the physics, collision and level
//! generation systems use. Defaults reproduce the classic feel of the game;
//! [`GameConfig`](super::gameconfig::GameConfig) can override the
//! `[physics]` and `[level]` values from the INI file.
//!
//! All distances are pixels, velocities pixels per tick and accelerations
//! pixels per tick².

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Tuning {
    // Physics
    pub gravity: f32,
    /// Magnitude of the upward jump velocity.
    pub jump_power: f32,
    pub run_speed: f32,
    pub enemy_speed: f32,

    // Bodies
    pub player_size: f32,
    pub enemy_size: f32,

    // Level generation
    /// Refill when fewer platforms than this are active.
    pub min_platforms: usize,
    pub gap_min: i32,
    pub gap_max: i32,
    pub blocks_min: u32,
    pub blocks_max: u32,
    /// Max horizontal distance of a new platform from the reference x.
    pub x_spread: f32,
    /// Platforms never start further right than `screen_width - right_margin`.
    pub right_margin: f32,
    pub coin_chance: f32,
    /// Coins float this many pixels above their platform's top.
    pub coin_lift: f32,
    pub coin_bonus_min: u32,
    pub coin_bonus_max: u32,
    pub enemy_base_chance: f32,
    /// Added to the enemy chance for every 100 points of score. Not clamped.
    pub enemy_chance_per_100: f32,
    /// Enemies spawn this many pixels above their platform's top.
    pub enemy_lift: f32,

    // Scoring
    pub checkpoint_interval: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            jump_power: 15.0,
            run_speed: 5.0,
            enemy_speed: 3.0,

            player_size: 40.0,
            enemy_size: 40.0,

            min_platforms: 10,
            gap_min: 80,
            gap_max: 120,
            blocks_min: 3,
            blocks_max: 5,
            x_spread: 200.0,
            right_margin: 120.0,
            coin_chance: 0.5,
            coin_lift: 20.0,
            coin_bonus_min: 10,
            coin_bonus_max: 100,
            enemy_base_chance: 0.3,
            enemy_chance_per_100: 0.01,
            enemy_lift: 50.0,

            checkpoint_interval: 1000,
        }
    }
}

impl Tuning {
    /// Per-platform enemy spawn probability for the given score.
    ///
    /// Grows by `enemy_chance_per_100` for every full 100 points and is not
    /// clamped: values of 1.0 or more mean every new platform gets an enemy.
    pub fn enemy_chance(&self, score: u32) -> f32 {
        self.enemy_base_chance + (score / 100) as f32 * self.enemy_chance_per_100
    }
}
