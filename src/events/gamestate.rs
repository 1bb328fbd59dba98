//! Game state transition event and observer.
//!
//! Systems request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Triggering a [`GameStateChangedEvent`] then runs the
//! observer in this module, which applies the transition to [`GameState`]
//! and queues the enter hook stored in [`SystemsStore`].
//!
//! Restarting a run is just another transition (`GameOver -> Playing`): the
//! `enter_play` hook rebuilds the level, nothing calls back into the loop.
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::{ENTER_GAME_OVER, ENTER_PLAY, QUIT_GAME, SystemsStore};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
///
/// If [`NextGameState`] holds [`Pending`], the observer updates the
/// authoritative [`GameState`], runs the enter hook and clears the pending
/// value; if it is [`Unchanged`], nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending, copies the new value into [`GameState`], resets
///   [`NextGameState`] to [`Unchanged`] and queues the enter hook.
/// - If any required resource is missing, logs a diagnostic and returns.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Res<SystemsStore>,
) {
    debug!("GameStateChangedEvent triggered");

    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
        return;
    };

    match next_game_state.get().clone() {
        Pending(new_state) => {
            info!("Transitioning from {:?} to {:?}", game_state.get(), new_state);
            game_state.set(new_state.clone());
            next_game_state.reset();
            on_state_enter(&new_state, &mut commands, &systems_store);
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}

/// Key of the hook that runs when `state` is entered, if any.
fn enter_hook(state: &GameStates) -> Option<&'static str> {
    match state {
        GameStates::None => None,
        GameStates::Playing => Some(ENTER_PLAY),
        GameStates::GameOver => Some(ENTER_GAME_OVER),
        GameStates::Quitting => Some(QUIT_GAME),
    }
}

fn on_state_enter(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    let Some(key) = enter_hook(state) else {
        debug!("Entered {:?} state", state);
        return;
    };
    match systems_store.get(key) {
        Some(id) => commands.run_system(*id),
        None => warn!("No '{}' hook registered in SystemsStore", key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Resource, Default)]
    struct Entered(Vec<&'static str>);

    fn setup_world() -> World {
        let mut world = World::new();
        world.insert_resource(GameState::new());
        world.insert_resource(NextGameState::new());
        world.init_resource::<Entered>();

        let mut store = SystemsStore::new();
        let play = world.register_system(|mut e: ResMut<Entered>| e.0.push(ENTER_PLAY));
        let over = world.register_system(|mut e: ResMut<Entered>| e.0.push(ENTER_GAME_OVER));
        store.insert(ENTER_PLAY, play);
        store.insert(ENTER_GAME_OVER, over);
        world.insert_resource(store);
        world.add_observer(observe_gamestate_change_event);
        world
    }

    #[test]
    fn test_pending_transition_runs_enter_hook() {
        let mut world = setup_world();
        world.resource_mut::<NextGameState>().set(GameStates::Playing);
        world.trigger(GameStateChangedEvent {});
        world.flush();

        assert_eq!(world.resource::<GameState>().get(), &GameStates::Playing);
        assert!(!world.resource::<NextGameState>().is_pending());
        assert_eq!(world.resource::<Entered>().0, vec![ENTER_PLAY]);
    }

    #[test]
    fn test_unchanged_does_nothing() {
        let mut world = setup_world();
        world.trigger(GameStateChangedEvent {});
        world.flush();

        assert_eq!(world.resource::<GameState>().get(), &GameStates::None);
        assert!(world.resource::<Entered>().0.is_empty());
    }

    #[test]
    fn test_missing_hook_still_transitions() {
        let mut world = setup_world();
        world.resource_mut::<NextGameState>().set(GameStates::Quitting);
        world.trigger(GameStateChangedEvent {});
        world.flush();

        assert_eq!(world.resource::<GameState>().get(), &GameStates::Quitting);
        assert!(world.resource::<Entered>().0.is_empty());
    }
}
