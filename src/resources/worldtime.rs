use bevy_ecs::prelude::Resource;

/// Wall-clock bookkeeping for the fixed-tick loop.
///
/// The simulation itself advances in whole ticks; `delta` and `elapsed` are
/// informational and `frame_count` is the tick counter published in the frame
/// snapshot.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub frame_count: u64,
}
