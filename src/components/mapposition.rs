//! World-space position component.
//!
//! [`MapPosition`] stores the top-left corner of an entity in screen-space
//! pixels (y grows downward). The camera scroll shifts every position by the
//! same offset, so there is no separate camera transform.

use bevy_ecs::prelude::Component;
use serde::Serialize;

#[derive(Component, Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MapPosition {
    pub x: f32,
    pub y: f32,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Shift the position vertically by `dy` pixels.
    pub fn translate_y(&mut self, dy: f32) {
        self.y += dy;
    }
}
