use bevy_ecs::prelude::Component;
use serde::Serialize;

/// Visual representation key handed to the renderer. The core never loads
/// images; the renderer maps each key to whatever it draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpriteKey {
    Player,
    Platform,
    Enemy,
    Coin,
}

/// Sprite is identified by a key and a horizontal flip flag. Size comes from
/// the entity's collider.
#[derive(Component, Clone, Copy, Debug)]
pub struct Sprite {
    pub key: SpriteKey,
    pub flip_h: bool,
}

impl Sprite {
    pub fn new(key: SpriteKey) -> Self {
        Self { key, flip_h: false }
    }
}
