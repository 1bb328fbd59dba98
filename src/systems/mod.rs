//! Game systems.
//!
//! This module groups all ECS systems that advance the simulation. The tick
//! schedule in [`crate::game`] chains them in a fixed order.
//!
//! Submodules overview
//! - [`audio`] – bridge with the audio thread (forward and advance cue messages)
//! - [`bounds`] – clamp the player and bounce enemies at the side walls
//! - [`camera`] – scroll the world when the player climbs past the upper third
//! - [`collision`] – platform landing, coin pickup and enemy contact
//! - [`cull`] – despawn entities that scrolled below the view
//! - [`gamestate`] – restart/quit input, fall-out check and state transitions
//! - [`levelgen`] – spawn generated platforms, coins and enemies
//! - [`movement`] – integrate positions from rigid body velocities
//! - [`playercontroller`] – translate input state into player velocity
//! - [`snapshot`] – publish the frame snapshot for renderers
//! - [`time`] – update the tick counter and frame delta

pub mod audio;
pub mod bounds;
pub mod camera;
pub mod collision;
pub mod cull;
pub mod gamestate;
pub mod levelgen;
pub mod movement;
pub mod playercontroller;
pub mod snapshot;
pub mod time;
