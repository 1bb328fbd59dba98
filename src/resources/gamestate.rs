//! Run state of the game: playing, game over or quitting.
//!
//! A run starts in `Playing`. Touching an enemy or falling below the view
//! moves it to `GameOver`, where a restart press goes back to `Playing`
//! with a fresh level. Quit moves any state to `Quitting`, which is final.
//!
//! Systems never switch [`GameState`] themselves. They file a request in
//! [`NextGameState`] and `check_pending_state` hands it to the observer in
//! `crate::events::gamestate`, which runs the matching enter hook
//! (`enter_play`, `enter_game_over` or `quit_game`).

use bevy_ecs::prelude::Resource;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub enum GameStates {
    /// Before the first `start`; nothing is spawned yet.
    #[default]
    None,
    /// Gameplay systems run.
    Playing,
    /// Gameplay systems are paused until restart or quit.
    GameOver,
    /// The front end stops its loop after this tick.
    Quitting,
}

/// A state change filed this tick, if any.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &GameStates {
        &self.current
    }

    /// Switch without running an enter hook. Only the transition observer
    /// and tests call this.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

/// Transition requested by gameplay or menu systems.
///
/// A later request in the same tick replaces an earlier one. Quit is read
/// before the gameplay systems, which then skip the tick, so nothing can
/// override it.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &NextGameStates {
        &self.next
    }

    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    /// While true, `state_is_playing` holds the gameplay systems back.
    pub fn is_pending(&self) -> bool {
        matches!(self.next, NextGameStates::Pending(_))
    }

    /// Called by the observer once the request is applied.
    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_state_pending_and_reset() {
        let mut next = NextGameState::new();
        assert!(!next.is_pending());
        next.set(GameStates::GameOver);
        assert_eq!(next.get(), &NextGameStates::Pending(GameStates::GameOver));
        assert!(next.is_pending());
        next.reset();
        assert_eq!(next.get(), &NextGameStates::Unchanged);
    }

    #[test]
    fn test_later_request_replaces_earlier() {
        let mut next = NextGameState::new();
        next.set(GameStates::GameOver);
        next.set(GameStates::Quitting);
        assert_eq!(next.get(), &NextGameStates::Pending(GameStates::Quitting));
    }

    #[test]
    fn test_fresh_state_is_none() {
        assert_eq!(GameState::new().get(), &GameStates::None);
    }
}
