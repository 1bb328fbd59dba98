//! Skyjump library.
//!
//! An endless vertical platformer on `bevy_ecs`: the simulation core
//! (components, resources, systems, level generation) plus the terminal and
//! headless front ends. Exposed as a library for integration tests.

pub mod autopilot;
pub mod components;
pub mod events;
pub mod game;
pub mod headless;
pub mod levelgen;
pub mod resources;
pub mod systems;
pub mod terminal;
