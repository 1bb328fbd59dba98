//! Audio cue messages.
//!
//! Gameplay systems write [`AudioCue`] messages; the audio bridge forwards
//! them to whatever plays sounds. The core never knows what a cue sounds
//! like.

use bevy_ecs::message::Message;
use serde::Serialize;

/// Discrete sound triggers emitted by the simulation.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AudioCue {
    /// A coin was collected.
    CoinPickup,
    /// The score crossed a multiple of the checkpoint interval.
    Checkpoint { score: u32 },
    /// The run ended (enemy contact or fall).
    GameOver { score: u32 },
}

/// Commands sent *to* the audio thread.
#[derive(Debug, Clone, Copy)]
pub enum AudioCmd {
    Play(AudioCue),
    Shutdown,
}
