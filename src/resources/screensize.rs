//! Screen size resource.
//!
//! Stores the logical playfield dimensions in pixels. All simulation bounds
//! (clamping, wall bounce, culling, scroll line, generator x range) read this
//! resource; the renderer scales it to whatever surface it owns.

use bevy_ecs::prelude::Resource;

/// Logical playfield size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: f32,
    /// Height in pixels.
    pub h: f32,
}

impl ScreenSize {
    pub fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }

    /// The y coordinate the camera keeps the player below (upper third).
    pub fn scroll_line(&self) -> f32 {
        self.h / 3.0
    }
}
