//! Render hand-off.
//!
//! Publishes the [`FrameSnapshot`] resource at the end of every tick: all
//! sprites that intersect the view, sorted back-to-front by [`ZIndex`], and
//! the HUD numbers.
use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::gamestate::GameState;
use crate::resources::score::Score;
use crate::resources::screensize::ScreenSize;
use crate::resources::snapshot::{FrameSnapshot, SpriteView};
use crate::resources::worldtime::WorldTime;

pub fn snapshot_system(
    mut snapshot: ResMut<FrameSnapshot>,
    time: Res<WorldTime>,
    state: Res<GameState>,
    score: Res<Score>,
    screen: Res<ScreenSize>,
    query: Query<(&MapPosition, &BoxCollider, &Sprite, &ZIndex)>,
) {
    snapshot.tick = time.frame_count;
    snapshot.state = state.get().clone();
    snapshot.score = score.current;
    snapshot.best = score.best.max(score.current);

    snapshot.sprites.clear();
    for (position, collider, sprite, z) in query.iter() {
        let (x0, y0, x1, y1) = collider.aabb(position);
        if x1 <= 0.0 || y1 <= 0.0 || x0 >= screen.w || y0 >= screen.h {
            continue;
        }
        snapshot.sprites.push(SpriteView {
            key: sprite.key,
            x: position.x,
            y: position.y,
            w: collider.width,
            h: collider.height,
            flip_h: sprite.flip_h,
            z: *z,
        });
    }
    // stable: equal z keeps query order
    snapshot.sprites.sort_by_key(|s| s.z);
}
