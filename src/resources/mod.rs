//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `audio` – bridge and channel for the background audio thread
//! - `gameconfig` – INI-backed configuration loaded at startup
//! - `gamestate` – authoritative and pending high-level game state
//! - `highscore` – file-backed best score
//! - `input` – per-tick state of the game actions
//! - `rng` – seedable random source shared by generation and pickups
//! - `score` – running and best score
//! - `screensize` – logical playfield dimensions in pixels
//! - `snapshot` – render hand-off filled at the end of every tick
//! - `systemsstore` – registry of state hook systems by name
//! - `tuning` – physics and level generation constants
//! - `worldtime` – tick counter and frame delta
pub mod audio;
pub mod gameconfig;
pub mod gamestate;
pub mod highscore;
pub mod input;
pub mod rng;
pub mod score;
pub mod screensize;
pub mod snapshot;
pub mod systemsstore;
pub mod tuning;
pub mod worldtime;
