//! Game wiring.
//!
//! Builds the ECS world with every resource the systems expect, registers the
//! state hooks, and assembles the fixed-order tick schedule. Shells (terminal,
//! headless, tests) only ever call [`build_world`], [`build_tick_schedule`],
//! [`start`] and [`tick`].
//!
//! # Tick order
//!
//! ```text
//! menu_controls
//! -- while Playing and no transition pending --
//! input -> integrate -> clamp/bounce -> landing -> coins -> enemies
//!       -> fall check -> scroll -> cull -> refill
//! -- always --
//! check_pending_state -> snapshot -> audio forward -> audio update
//! ```
use bevy_ecs::prelude::*;
use log::{error, info};

use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::events::audio::AudioCue;
use crate::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use crate::levelgen;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::highscore::HighScoreStore;
use crate::resources::input::{InputAction, InputState};
use crate::resources::rng::GameRng;
use crate::resources::score::Score;
use crate::resources::screensize::ScreenSize;
use crate::resources::snapshot::FrameSnapshot;
use crate::resources::systemsstore::{ENTER_GAME_OVER, ENTER_PLAY, QUIT_GAME, SystemsStore};
use crate::resources::tuning::Tuning;
use crate::resources::worldtime::WorldTime;
use crate::systems::audio::{forward_audio_cues, update_audio_cues};
use crate::systems::bounds::{bounce_enemies, clamp_player_to_screen};
use crate::systems::camera::camera_scroll;
use crate::systems::collision::{coin_pickup, enemy_contact, platform_landing};
use crate::systems::cull::cull_offscreen;
use crate::systems::gamestate::{
    check_pending_state, fall_out_check, menu_controls, state_is_playing,
};
use crate::systems::levelgen::{refill_platforms, spawn_batch, spawn_platform, spawn_player};
use crate::systems::movement::movement_system;
use crate::systems::playercontroller::player_input_controller;
use crate::systems::snapshot::snapshot_system;
use crate::systems::time::update_world_time;

/// Enter hook for `Playing`: wipe the level and build a fresh one.
///
/// Used both for the first run and for every restart.
pub fn enter_play(
    mut commands: Commands,
    screen: Res<ScreenSize>,
    tuning: Res<Tuning>,
    mut score: ResMut<Score>,
    mut rng: ResMut<GameRng>,
    query: Query<Entity, (With<MapPosition>, Without<Persistent>)>,
) {
    let mut despawned = 0;
    for entity in query.iter() {
        commands.entity(entity).try_despawn();
        despawned += 1;
    }
    score.reset();

    let level = levelgen::initial_level(screen.w, screen.h, &tuning, &mut rng);
    spawn_player(&mut commands, level.player.0, level.player.1, &tuning);
    spawn_platform(&mut commands, &level.ground);
    spawn_batch(&mut commands, &level.batch);
    info!(
        "New run: cleared {} entities, spawned {} platforms (best {})",
        despawned,
        level.batch.platforms.len() + 1,
        score.best
    );
}

/// Enter hook for `GameOver`: persist a new best and cue the jingle.
pub fn enter_game_over(
    store: Res<HighScoreStore>,
    mut score: ResMut<Score>,
    mut cues: MessageWriter<AudioCue>,
) {
    info!("Game over with score {} (best {})", score.current, score.best);
    if score.is_new_best() {
        if let Err(e) = store.record(score.current, score.best) {
            error!("{}", e);
        }
        score.best = score.current;
    }
    cues.write(AudioCue::GameOver {
        score: score.current,
    });
}

/// Enter hook for `Quitting`. The shell stops its loop once it sees the state.
pub fn quit_game(score: Res<Score>) {
    info!("Quitting (score {}, best {})", score.current, score.best);
}

/// Register a hook system and keep it alive across restarts.
fn register_hook<M>(
    world: &mut World,
    store: &mut SystemsStore,
    key: &str,
    system: impl IntoSystem<(), (), M> + 'static,
) {
    let id = world.register_system(system);
    // registered systems are entities; restarts must not despawn them
    world.entity_mut(id.entity()).insert(Persistent);
    store.insert(key, id);
}

/// Create a world holding every resource, observer and hook the game needs.
///
/// The world starts in [`GameStates::None`]; call [`start`] to spawn the
/// first level.
pub fn build_world(config: &GameConfig) -> World {
    let mut world = World::new();
    let (w, h) = config.screen_size();
    let tuning = config.tuning.clone();
    let store = HighScoreStore::new(config.highscore_path.clone());
    let best = store.load();

    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize::new(w, h));
    world.insert_resource(Score::new(best, tuning.checkpoint_interval));
    world.insert_resource(tuning);
    world.insert_resource(GameRng::from_optional_seed(config.seed));
    world.insert_resource(store);
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(FrameSnapshot::default());
    world.init_resource::<Messages<AudioCue>>();
    world.insert_resource(config.clone());

    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));

    let mut systems_store = SystemsStore::new();
    register_hook(&mut world, &mut systems_store, ENTER_PLAY, enter_play);
    register_hook(&mut world, &mut systems_store, ENTER_GAME_OVER, enter_game_over);
    register_hook(&mut world, &mut systems_store, QUIT_GAME, quit_game);
    world.insert_resource(systems_store);

    world.flush();
    world
}

/// The per-tick schedule. Gameplay systems only run while playing and stop
/// as soon as one of them requests a transition.
pub fn build_tick_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            menu_controls,
            (
                player_input_controller,
                movement_system,
                clamp_player_to_screen,
                bounce_enemies,
                platform_landing,
                coin_pickup,
                enemy_contact,
                fall_out_check,
                camera_scroll,
                cull_offscreen,
                refill_platforms,
            )
                .chain()
                .distributive_run_if(state_is_playing),
            check_pending_state,
            snapshot_system,
            forward_audio_cues,
            update_audio_cues,
        )
            .chain(),
    );
    schedule
}

/// Request `Playing` and apply it immediately, spawning the first level.
pub fn start(world: &mut World) {
    world.resource_mut::<NextGameState>().set(GameStates::Playing);
    world.trigger(GameStateChangedEvent {});
    world.flush();
}

/// Run one fixed tick with the actions held during it.
pub fn tick(world: &mut World, schedule: &mut Schedule, held: &[InputAction], dt: f32) {
    world.resource_mut::<InputState>().update_all(held);
    update_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers();
}

pub fn is_quitting(world: &World) -> bool {
    matches!(world.resource::<GameState>().get(), GameStates::Quitting)
}
