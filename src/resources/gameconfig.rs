//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [screen]
//! width = 800
//! height = 600
//!
//! [game]
//! target_fps = 60
//! highscore_path = ./highscore.txt
//! seed = 1234
//!
//! [physics]
//! gravity = 0.5
//! jump_power = 15
//! run_speed = 5
//! enemy_speed = 3
//!
//! [level]
//! min_platforms = 10
//! gap_min = 80
//! gap_max = 120
//! coin_chance = 0.5
//! enemy_base_chance = 0.3
//! enemy_chance_per_100 = 0.01
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::resources::tuning::Tuning;

/// Default safe values for startup
const DEFAULT_SCREEN_WIDTH: u32 = 800;
const DEFAULT_SCREEN_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_HIGHSCORE_PATH: &str = "./highscore.txt";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Playfield width in pixels.
    pub screen_width: u32,
    /// Playfield height in pixels.
    pub screen_height: u32,
    /// Ticks per second.
    pub target_fps: u32,
    /// File holding the best score.
    pub highscore_path: PathBuf,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Physics and level generation values.
    pub tuning: Tuning,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            highscore_path: PathBuf::from(DEFAULT_HIGHSCORE_PATH),
            seed: None,
            tuning: Tuning::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [screen] section
        if let Some(width) = config.getuint("screen", "width").ok().flatten() {
            self.screen_width = width as u32;
        }
        if let Some(height) = config.getuint("screen", "height").ok().flatten() {
            self.screen_height = height as u32;
        }

        // [game] section
        if let Some(fps) = config.getuint("game", "target_fps").ok().flatten() {
            self.target_fps = (fps as u32).max(1);
        }
        if let Some(path) = config.get("game", "highscore_path") {
            self.highscore_path = PathBuf::from(path);
        }
        if let Some(seed) = config.getuint("game", "seed").ok().flatten() {
            self.seed = Some(seed);
        }

        // [physics] section
        let float = |section: &str, key: &str| {
            config
                .getfloat(section, key)
                .ok()
                .flatten()
                .map(|v| v as f32)
        };
        let t = &mut self.tuning;
        if let Some(v) = float("physics", "gravity") {
            t.gravity = v;
        }
        if let Some(v) = float("physics", "jump_power") {
            t.jump_power = v;
        }
        if let Some(v) = float("physics", "run_speed") {
            t.run_speed = v;
        }
        if let Some(v) = float("physics", "enemy_speed") {
            t.enemy_speed = v;
        }

        // [level] section
        if let Some(v) = config.getuint("level", "min_platforms").ok().flatten() {
            t.min_platforms = v as usize;
        }
        if let Some(v) = config.getint("level", "gap_min").ok().flatten() {
            t.gap_min = v as i32;
        }
        if let Some(v) = config.getint("level", "gap_max").ok().flatten() {
            t.gap_max = v as i32;
        }
        if t.gap_max < t.gap_min {
            t.gap_max = t.gap_min;
        }
        if let Some(v) = float("level", "coin_chance") {
            t.coin_chance = v;
        }
        if let Some(v) = float("level", "enemy_base_chance") {
            t.enemy_base_chance = v;
        }
        if let Some(v) = float("level", "enemy_chance_per_100") {
            t.enemy_chance_per_100 = v;
        }

        info!(
            "Loaded config: {}x{} screen, fps={}, highscore={:?}, seed={:?}",
            self.screen_width,
            self.screen_height,
            self.target_fps,
            self.highscore_path,
            self.seed
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();
        let t = &self.tuning;

        config.set("screen", "width", Some(self.screen_width.to_string()));
        config.set("screen", "height", Some(self.screen_height.to_string()));

        config.set("game", "target_fps", Some(self.target_fps.to_string()));
        config.set(
            "game",
            "highscore_path",
            Some(self.highscore_path.display().to_string()),
        );
        if let Some(seed) = self.seed {
            config.set("game", "seed", Some(seed.to_string()));
        }

        config.set("physics", "gravity", Some(t.gravity.to_string()));
        config.set("physics", "jump_power", Some(t.jump_power.to_string()));
        config.set("physics", "run_speed", Some(t.run_speed.to_string()));
        config.set("physics", "enemy_speed", Some(t.enemy_speed.to_string()));

        config.set("level", "min_platforms", Some(t.min_platforms.to_string()));
        config.set("level", "gap_min", Some(t.gap_min.to_string()));
        config.set("level", "gap_max", Some(t.gap_max.to_string()));
        config.set("level", "coin_chance", Some(t.coin_chance.to_string()));
        config.set(
            "level",
            "enemy_base_chance",
            Some(t.enemy_base_chance.to_string()),
        );
        config.set(
            "level",
            "enemy_chance_per_100",
            Some(t.enemy_chance_per_100.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Screen size in pixels as floats, ready for [`super::screensize::ScreenSize`].
    pub fn screen_size(&self) -> (f32, f32) {
        (self.screen_width as f32, self.screen_height as f32)
    }

    /// Duration of one tick.
    pub fn tick_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / f64::from(self.target_fps.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("skyjump-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_is_an_error_and_keeps_defaults() {
        let mut cfg = GameConfig::with_path(temp_path("does-not-exist.ini"));
        assert!(cfg.load_from_file().is_err());
        assert_eq!(cfg.screen_width, 800);
        assert_eq!(cfg.screen_height, 600);
        assert_eq!(cfg.tuning, Tuning::default());
    }

    #[test]
    fn test_load_overrides_present_keys_only() {
        let path = temp_path("partial.ini");
        std::fs::write(
            &path,
            "[screen]\nwidth = 640\n\n[game]\nseed = 42\n\n[physics]\ngravity = 0.75\n",
        )
        .unwrap();

        let mut cfg = GameConfig::with_path(&path);
        cfg.load_from_file().unwrap();
        assert_eq!(cfg.screen_width, 640);
        assert_eq!(cfg.screen_height, 600);
        assert_eq!(cfg.seed, Some(42));
        assert!((cfg.tuning.gravity - 0.75).abs() < 1e-6);
        assert!((cfg.tuning.run_speed - 5.0).abs() < 1e-6);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_save_then_load_keeps_values() {
        let path = temp_path("saved.ini");
        let mut cfg = GameConfig::with_path(&path);
        cfg.target_fps = 30;
        cfg.tuning.min_platforms = 12;
        cfg.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.target_fps, 30);
        assert_eq!(loaded.tuning.min_platforms, 12);

        let _ = std::fs::remove_file(path);
    }
}
