use bevy_ecs::prelude::Component;

use crate::components::mapposition::MapPosition;

/// Axis-aligned rectangular collider anchored at the entity's top-left
/// [`MapPosition`].
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub width: f32,
    pub height: f32,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns (min_x, min_y, max_x, max_y) of the collider for a given position.
    pub fn aabb(&self, position: &MapPosition) -> (f32, f32, f32, f32) {
        (
            position.x,
            position.y,
            position.x + self.width,
            position.y + self.height,
        )
    }

    /// Top edge in world space.
    pub fn top(&self, position: &MapPosition) -> f32 {
        position.y
    }

    /// Bottom edge in world space.
    pub fn bottom(&self, position: &MapPosition) -> f32 {
        position.y + self.height
    }

    /// AABB vs AABB overlap test. Touching edges do not count as overlap.
    pub fn overlaps(&self, position: &MapPosition, other: &Self, other_position: &MapPosition) -> bool {
        let (ax0, ay0, ax1, ay1) = self.aabb(position);
        let (bx0, by0, bx1, by1) = other.aabb(other_position);
        ax0 < bx1 && ax1 > bx0 && ay0 < by1 && ay1 > by0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_detects_intersection() {
        let a = BoxCollider::new(40.0, 40.0);
        let b = BoxCollider::new(120.0, 40.0);
        assert!(a.overlaps(&MapPosition::new(10.0, 10.0), &b, &MapPosition::new(0.0, 45.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = BoxCollider::new(40.0, 40.0);
        let b = BoxCollider::new(120.0, 40.0);
        // a.bottom == b.top
        assert!(!a.overlaps(&MapPosition::new(0.0, 0.0), &b, &MapPosition::new(0.0, 40.0)));
        // a.right == b.left
        assert!(!a.overlaps(&MapPosition::new(0.0, 0.0), &b, &MapPosition::new(40.0, 0.0)));
    }

    #[test]
    fn test_edges() {
        let c = BoxCollider::new(40.0, 40.0);
        let p = MapPosition::new(5.0, 100.0);
        assert_eq!(c.top(&p), 100.0);
        assert_eq!(c.bottom(&p), 140.0);
        assert_eq!(c.aabb(&p), (5.0, 100.0, 45.0, 140.0));
    }
}
