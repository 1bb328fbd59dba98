//! Kinematic body component with named per-tick accelerations.
//!
//! The [`RigidBody`] component stores velocity in pixels per tick and a set of
//! named acceleration forces in pixels per tick². The player carries a
//! `"gravity"` force; enemies carry none and move at constant speed.
//!
//! Integration is a single explicit Euler step per tick (see
//! [`crate::systems::movement`]): forces are added to velocity first, then
//! velocity is added to position.

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashMap;

/// Name of the force the player spawns with.
pub const GRAVITY_FORCE: &str = "gravity";

/// A named constant acceleration in pixels per tick squared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccelerationForce {
    pub ax: f32,
    pub ay: f32,
}

impl AccelerationForce {
    pub fn new(ax: f32, ay: f32) -> Self {
        Self { ax, ay }
    }
}

/// Kinematic body storing velocity and named acceleration forces.
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::new();
/// rb.add_force(GRAVITY_FORCE, 0.0, 0.5);
/// rb.vx = 5.0;
/// ```
#[derive(Component, Clone, Debug, Default)]
pub struct RigidBody {
    /// Horizontal velocity in pixels per tick.
    pub vx: f32,
    /// Vertical velocity in pixels per tick. Positive is downward.
    pub vy: f32,
    /// Named acceleration forces. The total acceleration is their sum.
    pub forces: FxHashMap<String, AccelerationForce>,
}

impl RigidBody {
    /// Create a RigidBody with zero velocity and no forces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a RigidBody moving at a constant velocity.
    pub fn with_velocity(vx: f32, vy: f32) -> Self {
        Self {
            vx,
            vy,
            ..Self::default()
        }
    }

    /// Add a named acceleration force, replacing any force with the same name.
    pub fn add_force(&mut self, name: &str, ax: f32, ay: f32) {
        self.forces
            .insert(name.to_string(), AccelerationForce::new(ax, ay));
    }

    /// Sum of all forces as `(ax, ay)`.
    pub fn total_acceleration(&self) -> (f32, f32) {
        self.forces
            .values()
            .fold((0.0, 0.0), |(ax, ay), f| (ax + f.ax, ay + f.ay))
    }
}
