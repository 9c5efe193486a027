//! Rectangular entities and enemy motion

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in canvas space (y grows downward)
///
/// Size is fixed at construction; only `pos.x` changes at runtime, and only
/// for the enemy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (both > 0)
    pub size: Vec2,
    /// Leftward speed in pixels per tick (0 for the player)
    pub speed: f32,
}

impl Entity {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        debug_assert!(size.x > 0.0 && size.y > 0.0, "entity size must be positive");
        Self {
            pos,
            size,
            speed: 0.0,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Right edge x coordinate
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Bottom edge y coordinate
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Move left by `speed` once per tick.
    ///
    /// No clamping at the left edge: running into the player is the only
    /// event that matters, and the collision check handles it.
    pub fn advance(&mut self, ticks: u32) {
        self.pos.x -= self.speed * ticks as f32;
    }

    /// Put the enemy back at its spawn x with a new speed
    pub fn respawn(&mut self, x: f32, speed: f32) {
        self.pos.x = x;
        self.speed = speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_moves_left_by_speed() {
        let mut enemy = Entity::new(Vec2::new(800.0, 175.0), Vec2::splat(50.0)).with_speed(0.5);
        enemy.advance(1);
        assert!((enemy.pos.x - 799.5).abs() < 1e-4);
        enemy.advance(4);
        assert!((enemy.pos.x - 797.5).abs() < 1e-4);
        assert_eq!(enemy.pos.y, 175.0);
    }

    #[test]
    fn test_advance_does_not_clamp() {
        let mut enemy = Entity::new(Vec2::new(1.0, 0.0), Vec2::splat(10.0)).with_speed(2.0);
        enemy.advance(3);
        assert!((enemy.pos.x + 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_respawn_keeps_size() {
        let mut enemy = Entity::new(Vec2::new(10.0, 175.0), Vec2::new(40.0, 30.0)).with_speed(1.0);
        enemy.respawn(800.0, 0.35);
        assert_eq!(enemy.pos, Vec2::new(800.0, 175.0));
        assert_eq!(enemy.size, Vec2::new(40.0, 30.0));
        assert_eq!(enemy.speed, 0.35);
        assert_eq!(enemy.right(), 840.0);
        assert_eq!(enemy.bottom(), 205.0);
    }
}
