//! High-score persistence.
//!
//! The best score lives in a plain text file holding one decimal integer.
//! A missing or unreadable file means "no high score yet" and reads as 0.

use bevy_ecs::prelude::Resource;
use log::{debug, info, warn};
use std::path::PathBuf;

#[derive(Resource, Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the stored high score. Missing or corrupt files yield 0.
    pub fn load(&self) -> u32 {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => match text.trim().parse::<u32>() {
                Ok(score) => score,
                Err(e) => {
                    warn!("Ignoring corrupt high score file {:?}: {}", self.path, e);
                    0
                }
            },
            Err(e) => {
                debug!("No high score at {:?}: {}", self.path, e);
                0
            }
        }
    }

    /// Overwrite the stored high score.
    pub fn save(&self, score: u32) -> Result<(), String> {
        std::fs::write(&self.path, score.to_string())
            .map_err(|e| format!("Failed to write high score to {:?}: {}", self.path, e))?;
        info!("Saved high score {} to {:?}", score, self.path);
        Ok(())
    }

    /// Persist `score` only if it beats `best`. Returns whether it was written.
    pub fn record(&self, score: u32, best: u32) -> Result<bool, String> {
        if score <= best {
            return Ok(false);
        }
        self.save(score)?;
        Ok(true)
    }
}
