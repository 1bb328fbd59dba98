//! Game state systems and run conditions.
//!
//! - [`menu_controls`] turns restart/quit input into state requests
//! - [`fall_out_check`] ends the run when the player drops below the view
//! - [`check_pending_state`] fires the transition event once per tick
//! - [`state_is_playing`] gates the gameplay systems
use bevy_ecs::prelude::*;
use log::info;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;

pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    if let NextGameStates::Pending(_new_state) = next_state.get() {
        commands.trigger(GameStateChangedEvent {});
    }
}

/// True while playing with no transition requested yet this tick.
///
/// Once a system asks for `GameOver`, the rest of the gameplay chain sees
/// `false` and skips.
pub fn state_is_playing(state: Res<GameState>, next_state: Res<NextGameState>) -> bool {
    matches!(state.get(), GameStates::Playing) && !next_state.is_pending()
}

/// Quit works from any state while held. Restart only works from the game
/// over screen and only on the tick the key goes down.
pub fn menu_controls(
    input: Res<InputState>,
    state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
) {
    match state.get() {
        GameStates::Quitting => {}
        _ if input.quit.active => next_state.set(GameStates::Quitting),
        GameStates::GameOver if input.restart.just_pressed => next_state.set(GameStates::Playing),
        _ => {}
    }
}

/// The run ends once the player's top edge is below the screen.
pub fn fall_out_check(
    screen: Res<ScreenSize>,
    players: Query<&MapPosition, With<Player>>,
    mut next_state: ResMut<NextGameState>,
) {
    if players.iter().any(|position| position.y > screen.h) {
        info!("Player fell out of the view");
        next_state.set(GameStates::GameOver);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::input::InputAction;

    fn world_in(state: GameStates, held: &[InputAction]) -> World {
        let mut world = World::new();
        let mut gs = GameState::new();
        gs.set(state);
        world.insert_resource(gs);
        world.insert_resource(NextGameState::new());
        let mut input = InputState::default();
        input.update_all(held);
        world.insert_resource(input);
        world
    }

    fn run_menu(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(menu_controls);
        schedule.run(world);
    }

    #[test]
    fn test_restart_only_from_game_over() {
        let mut world = world_in(GameStates::Playing, &[InputAction::Restart]);
        run_menu(&mut world);
        assert!(!world.resource::<NextGameState>().is_pending());

        let mut world = world_in(GameStates::GameOver, &[InputAction::Restart]);
        run_menu(&mut world);
        assert_eq!(
            world.resource::<NextGameState>().get(),
            &NextGameStates::Pending(GameStates::Playing)
        );
    }

    #[test]
    fn test_held_restart_fires_once() {
        let mut world = world_in(GameStates::GameOver, &[InputAction::Restart]);
        world
            .resource_mut::<InputState>()
            .update_all(&[InputAction::Restart]);
        run_menu(&mut world);
        assert!(!world.resource::<NextGameState>().is_pending());
    }

    #[test]
    fn test_quit_wins_over_restart() {
        let mut world = world_in(
            GameStates::GameOver,
            &[InputAction::Restart, InputAction::Quit],
        );
        run_menu(&mut world);
        assert_eq!(
            world.resource::<NextGameState>().get(),
            &NextGameStates::Pending(GameStates::Quitting)
        );
    }

    #[test]
    fn test_fall_out_requests_game_over() {
        let mut world = world_in(GameStates::Playing, &[]);
        world.insert_resource(ScreenSize::new(800.0, 600.0));
        world.spawn((MapPosition::new(100.0, 600.5), Player::default()));
        let mut schedule = Schedule::default();
        schedule.add_systems(fall_out_check);
        schedule.run(&mut world);
        assert!(world.resource::<NextGameState>().is_pending());
    }
}
