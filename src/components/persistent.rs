//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component survive a restart. Observers
//! and registered state-hook systems are stored as entities by bevy_ecs, so
//! they must carry this marker or the world reset would remove them.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should survive a game restart.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
