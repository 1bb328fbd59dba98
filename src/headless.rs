//! Headless front end.
//!
//! Runs a fixed number of ticks as fast as possible with the [`Autopilot`]
//! at the controls, optionally dumping every frame snapshot as one JSON line
//! to stdout.
use std::io::{Write, stdout};

use log::info;

use crate::autopilot::Autopilot;
use crate::game;
use crate::resources::audio::{setup_audio, shutdown_audio};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::GameStates;
use crate::resources::snapshot::FrameSnapshot;

/// Outcome of a headless session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    /// Number of runs that ended in game over.
    pub deaths: u32,
    /// Highest score reached by any run.
    pub top_score: u32,
}

pub fn run(config: &GameConfig, ticks: u64, dump_frames: bool) -> std::io::Result<RunSummary> {
    let mut world = game::build_world(config);
    setup_audio(&mut world, |cue| info!("[audio] {:?}", cue));
    let mut schedule = game::build_tick_schedule();
    game::start(&mut world);

    let pilot = Autopilot::default();
    let dt = config.tick_duration().as_secs_f32();
    let mut summary = RunSummary::default();
    let mut out = stdout().lock();
    let mut was_over = false;

    for _ in 0..ticks {
        let held = pilot.decide(world.resource::<FrameSnapshot>());
        game::tick(&mut world, &mut schedule, &held, dt);
        summary.ticks += 1;

        let snapshot = world.resource::<FrameSnapshot>();
        summary.top_score = summary.top_score.max(snapshot.score);
        let is_over = snapshot.state == GameStates::GameOver;
        if is_over && !was_over {
            summary.deaths += 1;
        }
        was_over = is_over;

        if dump_frames {
            serde_json::to_writer(&mut out, snapshot)?;
            out.write_all(b"\n")?;
        }
        if game::is_quitting(&world) {
            break;
        }
    }
    out.flush()?;
    shutdown_audio(&mut world);

    info!(
        "Headless run done: {} ticks, {} deaths, top score {}",
        summary.ticks, summary.deaths, summary.top_score
    );
    Ok(summary)
}
