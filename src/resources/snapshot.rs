//! Render hand-off resource.
//!
//! After every tick the snapshot system fills [`FrameSnapshot`] with the
//! visible entities in back-to-front order plus the numbers a HUD needs.
//! Renderers read only this resource; they never touch components.

use bevy_ecs::prelude::Resource;
use serde::Serialize;

use crate::components::sprite::SpriteKey;
use crate::components::zindex::ZIndex;
use crate::resources::gamestate::GameStates;

/// One drawable rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpriteView {
    pub key: SpriteKey,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub flip_h: bool,
    pub z: ZIndex,
}

#[derive(Resource, Debug, Clone, Default, Serialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub state: GameStates,
    pub score: u32,
    pub best: u32,
    pub sprites: Vec<SpriteView>,
}

impl FrameSnapshot {
    /// Sprites with the given key, in draw order.
    pub fn sprites_of(&self, key: SpriteKey) -> impl Iterator<Item = &SpriteView> {
        self.sprites.iter().filter(move |s| s.key == key)
    }
}
