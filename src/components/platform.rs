use bevy_ecs::prelude::Component;

/// Side length of one platform block in pixels.
pub const BLOCK_SIZE: f32 = 40.0;

/// A platform made of `blocks_wide` x `blocks_high` square blocks.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Platform {
    pub blocks_wide: u32,
    pub blocks_high: u32,
}

impl Platform {
    /// A single-row platform.
    pub fn new(blocks_wide: u32) -> Self {
        Self {
            blocks_wide,
            blocks_high: 1,
        }
    }

    pub fn width(&self) -> f32 {
        self.blocks_wide as f32 * BLOCK_SIZE
    }

    pub fn height(&self) -> f32 {
        self.blocks_high as f32 * BLOCK_SIZE
    }
}
