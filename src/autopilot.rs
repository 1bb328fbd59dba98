//! Scripted input source for headless runs.
//!
//! Looks only at the published [`FrameSnapshot`], the same data a renderer
//! gets, and picks the actions to hold for the next tick: keep jumping,
//! steer under the nearest platform above that is within jump reach, and
//! restart after a game over.
use arrayvec::ArrayVec;

use crate::components::sprite::SpriteKey;
use crate::resources::gamestate::GameStates;
use crate::resources::input::InputAction;
use crate::resources::snapshot::{FrameSnapshot, SpriteView};

/// Pixels between the player's feet and a platform top it will still aim for.
pub const DEFAULT_REACH: f32 = 200.0;
/// Horizontal slack before the autopilot bothers steering.
const DEADZONE: f32 = 6.0;

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    pub reach: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            reach: DEFAULT_REACH,
        }
    }
}

impl Autopilot {
    /// Actions to hold for the next tick.
    pub fn decide(&self, snapshot: &FrameSnapshot) -> ArrayVec<InputAction, 2> {
        let mut held = ArrayVec::new();
        match snapshot.state {
            GameStates::GameOver => {
                held.push(InputAction::Restart);
                return held;
            }
            GameStates::Playing => {}
            _ => return held,
        }
        let Some(player) = snapshot.sprites_of(SpriteKey::Player).next() else {
            return held;
        };

        held.push(InputAction::Jump);
        if let Some(target) = self.target(snapshot, player) {
            let dx = (target.x + target.w / 2.0) - (player.x + player.w / 2.0);
            if dx < -DEADZONE {
                held.push(InputAction::MoveLeft);
            } else if dx > DEADZONE {
                held.push(InputAction::MoveRight);
            }
        }
        held
    }

    /// Lowest platform strictly above the player's feet and within reach.
    fn target<'a>(&self, snapshot: &'a FrameSnapshot, player: &SpriteView) -> Option<&'a SpriteView> {
        let feet = player.y + player.h;
        snapshot
            .sprites_of(SpriteKey::Platform)
            .filter(|p| p.y < feet - 1.0 && feet - p.y <= self.reach)
            .max_by(|a, b| a.y.total_cmp(&b.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::zindex::ZIndex;

    fn view(key: SpriteKey, x: f32, y: f32, w: f32, h: f32) -> SpriteView {
        SpriteView {
            key,
            x,
            y,
            w,
            h,
            flip_h: false,
            z: ZIndex(0),
        }
    }

    fn snapshot(state: GameStates, sprites: Vec<SpriteView>) -> FrameSnapshot {
        FrameSnapshot {
            state,
            sprites,
            ..FrameSnapshot::default()
        }
    }

    #[test]
    fn test_restarts_after_game_over() {
        let held = Autopilot::default().decide(&snapshot(GameStates::GameOver, vec![]));
        assert_eq!(held.as_slice(), &[InputAction::Restart]);
    }

    #[test]
    fn test_steers_toward_nearest_platform_above() {
        let snap = snapshot(
            GameStates::Playing,
            vec![
                view(SpriteKey::Platform, 20.0, 550.0, 760.0, 40.0),
                view(SpriteKey::Platform, 100.0, 430.0, 120.0, 40.0),
                view(SpriteKey::Platform, 600.0, 330.0, 120.0, 40.0),
                view(SpriteKey::Player, 380.0, 510.0, 40.0, 40.0),
            ],
        );
        let held = Autopilot::default().decide(&snap);
        assert_eq!(held.as_slice(), &[InputAction::Jump, InputAction::MoveLeft]);
    }

    #[test]
    fn test_holds_position_when_centred() {
        let snap = snapshot(
            GameStates::Playing,
            vec![
                view(SpriteKey::Platform, 340.0, 430.0, 120.0, 40.0),
                view(SpriteKey::Player, 380.0, 510.0, 40.0, 40.0),
            ],
        );
        let held = Autopilot::default().decide(&snap);
        assert_eq!(held.as_slice(), &[InputAction::Jump]);
    }
}
