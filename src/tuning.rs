//! Data-driven game balance
//!
//! Defaults match `consts`; any subset can be overridden from JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Entity;

/// Balance and layout values for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Play area size in pixels
    pub arena_width: f32,
    pub arena_height: f32,

    /// Player rectangle (top-left corner and size)
    pub player_pos: Vec2,
    pub player_size: Vec2,

    /// Enemy lane and size; x is always reset to `arena_width`
    pub enemy_y: f32,
    pub enemy_size: Vec2,

    /// Enemy speed at score 0 (pixels per frame)
    pub base_speed: f32,
    /// Extra speed per point
    pub speed_step: f32,
    /// Speed never exceeds this
    pub max_speed: f32,

    /// Wrong-word flash duration in milliseconds (cosmetic only)
    pub wrong_flash_ms: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            player_pos: Vec2::new(PLAYER_X, PLAYER_Y),
            player_size: Vec2::splat(PLAYER_SIZE),
            enemy_y: ENEMY_Y,
            enemy_size: Vec2::splat(ENEMY_SIZE),
            base_speed: ENEMY_BASE_SPEED,
            speed_step: ENEMY_SPEED_STEP,
            max_speed: ENEMY_MAX_SPEED,
            wrong_flash_ms: WRONG_FLASH_MS,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides and validate them
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would break the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("player_size.x", self.player_size.x),
            ("player_size.y", self.player_size.y),
            ("enemy_size.x", self.enemy_size.x),
            ("enemy_size.y", self.enemy_size.y),
            ("base_speed", self.base_speed),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::InvalidTuning { field, value });
            }
        }
        if self.speed_step.is_nan() || self.speed_step < 0.0 {
            return Err(ConfigError::InvalidTuning {
                field: "speed_step",
                value: self.speed_step,
            });
        }
        if self.max_speed.is_nan() || self.max_speed < self.base_speed {
            return Err(ConfigError::InvalidTuning {
                field: "max_speed",
                value: self.max_speed,
            });
        }
        Ok(())
    }

    /// Enemy speed for a round started at `score`: linear with a hard cap
    pub fn enemy_speed(&self, score: u32) -> f32 {
        (self.base_speed + score as f32 * self.speed_step).min(self.max_speed)
    }

    /// The stationary player
    pub fn player(&self) -> Entity {
        Entity::new(self.player_pos, self.player_size)
    }

    /// A fresh enemy parked just off the right edge
    pub fn enemy(&self, speed: f32) -> Entity {
        Entity::new(Vec2::new(self.arena_width, self.enemy_y), self.enemy_size).with_speed(speed)
    }
}
