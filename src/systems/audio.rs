//! Audio bridge systems and the consumer thread.
//!
//! - [`forward_audio_cues`] reads [`AudioCue`] messages written this tick and
//!   sends them over the bridge channel.
//! - [`update_audio_cues`] advances the message buffers once per tick.
//! - [`audio_thread`] runs on its own OS thread and hands each cue to the
//!   sink closure until it receives [`AudioCmd::Shutdown`].

use crate::events::audio::{AudioCmd, AudioCue};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::{MessageReader, Messages, Res, ResMut};
use crossbeam_channel::Receiver;
use log::debug;

/// Forward AudioCue messages to the audio thread, if a bridge is installed.
pub fn forward_audio_cues(bridge: Option<Res<AudioBridge>>, mut reader: MessageReader<AudioCue>) {
    let Some(bridge) = bridge else {
        return;
    };
    for cue in reader.read() {
        // ignore send error on shutdown
        let _ = bridge.tx_cmd.send(AudioCmd::Play(*cue));
    }
}

/// Advance the ECS message queue for AudioCue.
pub fn update_audio_cues(mut msgs: ResMut<Messages<AudioCue>>) {
    msgs.update();
}

/// Entry point of the audio consumer thread.
///
/// Blocks on the command channel; returns on [`AudioCmd::Shutdown`] or when
/// every sender is gone.
pub fn audio_thread<F>(rx_cmd: Receiver<AudioCmd>, mut sink: F)
where
    F: FnMut(AudioCue),
{
    debug!("[audio] thread starting (id={:?})", std::thread::current().id());
    for cmd in rx_cmd.iter() {
        match cmd {
            AudioCmd::Play(cue) => sink(cue),
            AudioCmd::Shutdown => break,
        }
    }
    debug!("[audio] thread exiting");
}
