use bevy_ecs::prelude::Component;

/// Side length of a coin in pixels.
pub const COIN_SIZE: f32 = 20.0;

/// Collectible coin. Despawned on pickup; the bonus is rolled at pickup time.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Coin;
