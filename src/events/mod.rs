//! Event types and observers used by the game.
//!
//! Submodules:
//! - [`audio`] – cue messages for the audio sink and commands for its thread
//! - [`gamestate`] – state transition event and the observer that applies it
pub mod audio;
pub mod gamestate;
