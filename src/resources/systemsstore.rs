//! Registry for state hook systems.
//!
//! Enter hooks are registered once at startup under string keys and run by
//! the game state observer via their [`bevy_ecs::system::SystemId`].

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

/// Key of the hook that (re)builds the level when entering `Playing`.
pub const ENTER_PLAY: &str = "enter_play";
/// Key of the hook that records the high score when entering `GameOver`.
pub const ENTER_GAME_OVER: &str = "enter_game_over";
/// Key of the hook run when entering `Quitting`.
pub const QUIT_GAME: &str = "quit_game";

/// Map of string names to system IDs.
#[derive(Resource, Default)]
pub struct SystemsStore {
    pub map: FxHashMap<String, SystemId>,
}

impl SystemsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a system ID under a human-readable name.
    pub fn insert(&mut self, name: impl Into<String>, id: SystemId) {
        self.map.insert(name.into(), id);
    }

    /// Retrieve a system ID by name, if present.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&SystemId> {
        self.map.get(name.as_ref())
    }
}
