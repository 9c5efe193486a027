//! Collision detection between rectangles
//!
//! Only strict overlap counts. Rectangles that share an edge are apart.

use super::entity::Entity;

/// Axis-aligned bounding box overlap test
#[inline]
pub fn overlaps(a: &Entity, b: &Entity) -> bool {
    a.pos.x < b.right() && a.right() > b.pos.x && a.pos.y < b.bottom() && a.bottom() > b.pos.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Entity {
        Entity::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap_detected() {
        let player = rect(50.0, 175.0, 50.0, 50.0);
        let enemy = rect(80.0, 175.0, 50.0, 50.0);
        assert!(overlaps(&player, &enemy));
        assert!(overlaps(&enemy, &player));
    }

    #[test]
    fn test_clear_gap_misses() {
        let player = rect(50.0, 175.0, 50.0, 50.0);
        let enemy = rect(101.0, 175.0, 50.0, 50.0);
        assert!(!overlaps(&player, &enemy));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let player = rect(50.0, 175.0, 50.0, 50.0);
        // Right edge of player at x=100
        assert!(!overlaps(&player, &rect(100.0, 175.0, 50.0, 50.0)));
        // Bottom edge of player at y=225
        assert!(!overlaps(&player, &rect(50.0, 225.0, 50.0, 50.0)));
        // Just past the edge
        assert!(overlaps(&player, &rect(99.9, 175.0, 50.0, 50.0)));
    }

    #[test]
    fn test_different_lanes_miss() {
        let player = rect(50.0, 175.0, 50.0, 50.0);
        let enemy = rect(60.0, 300.0, 50.0, 50.0);
        assert!(!overlaps(&player, &enemy));
    }
}
