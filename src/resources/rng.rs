//! Shared pseudo-random source.
//!
//! Level generation, coin bonuses and enemy directions all draw from the one
//! [`GameRng`] resource so a run is reproducible from its seed.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;
use std::ops::{Deref, DerefMut};

#[derive(Resource, Debug)]
pub struct GameRng(pub Rng);

impl GameRng {
    pub fn with_seed(seed: u64) -> Self {
        Self(Rng::with_seed(seed))
    }

    /// Seed from `seed` if given, from entropy otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self(Rng::new()),
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self(Rng::new())
    }
}

impl Deref for GameRng {
    type Target = Rng;

    fn deref(&self) -> &Rng {
        &self.0
    }
}

impl DerefMut for GameRng {
    fn deref_mut(&mut self) -> &mut Rng {
        &mut self.0
    }
}
