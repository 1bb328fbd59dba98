//! Z-index component for draw ordering.
//!
//! The frame snapshot sorts visible entities by [`ZIndex`] so a renderer can
//! draw them back-to-front without knowing entity kinds.

use bevy_ecs::prelude::Component;
use serde::Serialize;

/// Rendering order hint. Higher values are drawn later (on top).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const PLATFORM: ZIndex = ZIndex(0);
    pub const COIN: ZIndex = ZIndex(1);
    pub const ENEMY: ZIndex = ZIndex(2);
    pub const PLAYER: ZIndex = ZIndex(3);
}
