//! Off-screen culling.
//!
//! Despawns platforms, enemies and coins whose top edge is below the view.
//! Runs right after the scroll so nothing scrolled out survives the tick.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::coin::Coin;
use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::platform::Platform;
use crate::resources::screensize::ScreenSize;

pub fn cull_offscreen(
    mut commands: Commands,
    screen: Res<ScreenSize>,
    query: Query<(Entity, &MapPosition), Or<(With<Platform>, With<Enemy>, With<Coin>)>>,
) {
    let mut culled = 0;
    for (entity, position) in query.iter() {
        if position.y > screen.h {
            commands.entity(entity).try_despawn();
            culled += 1;
        }
    }
    if culled > 0 {
        debug!("Culled {} entities below the view", culled);
    }
}
