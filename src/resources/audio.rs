//! ECS resource that bridges the simulation with a background audio consumer.
//!
//! Use [`setup_audio`] once during initialization to spawn the consumer
//! thread and insert the [`AudioBridge`]. Call [`shutdown_audio`] during
//! teardown to stop the thread. Without a bridge, cues simply accumulate in
//! `Messages<AudioCue>` where tests can drain them.

use crate::events::audio::{AudioCmd, AudioCue};
use crate::systems::audio::audio_thread;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Sender, unbounded};

/// Shared bridge between the ECS world and the audio thread.
#[derive(Resource)]
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] messages (ECS -> audio thread).
    pub tx_cmd: Sender<AudioCmd>,
    /// Join handle for the background audio thread.
    pub handle: std::thread::JoinHandle<()>,
}

/// Spawn the audio thread and register the bridge resource.
///
/// `sink` runs on the audio thread once per cue.
pub fn setup_audio<F>(world: &mut World, sink: F)
where
    F: FnMut(AudioCue) + Send + 'static,
{
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();

    let handle = std::thread::spawn(move || audio_thread(rx_cmd, sink));

    world.insert_resource(AudioBridge { tx_cmd, handle });
    if !world.contains_resource::<Messages<AudioCue>>() {
        world.init_resource::<Messages<AudioCue>>();
    }
}

/// Gracefully request shutdown of the audio thread and join it.
pub fn shutdown_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
        let _ = bridge.handle.join();
    }
}
