//! Upward scrolling.
//!
//! There is no camera transform: when the player climbs above the upper third
//! of the screen, every positioned entity is shifted down by the same amount
//! so the player sits back on the line. Each scrolling tick is worth one
//! point.
use bevy_ecs::prelude::*;
use log::trace;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::events::audio::AudioCue;
use crate::resources::score::Score;
use crate::resources::screensize::ScreenSize;

pub fn camera_scroll(
    screen: Res<ScreenSize>,
    mut query: Query<(&mut MapPosition, Has<Player>)>,
    mut score: ResMut<Score>,
    mut cues: MessageWriter<AudioCue>,
) {
    let Some(player_top) = query
        .iter()
        .find_map(|(position, is_player)| is_player.then_some(position.y))
    else {
        return;
    };
    let line = screen.scroll_line();
    if player_top >= line {
        return;
    }

    let delta = line - player_top;
    for (mut position, _) in query.iter_mut() {
        position.translate_y(delta);
    }
    if score.add(1) {
        cues.write(AudioCue::Checkpoint {
            score: score.current,
        });
    }
    trace!("Scrolled by {} (score {})", delta, score.current);
}
