//! Phrase Runner - dodge the enemy while rebuilding an English idiom
//!
//! Core modules:
//! - `sim`: Deterministic simulation (enemy motion, collisions, game state machine)
//! - `quiz`: Question bank, round generation, ordered answer checking
//! - `platform`: Tick source abstraction (animation frames on web, manual in tests)
//! - `renderer`: Scene description and the Canvas 2D painter
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod platform;
pub mod quiz;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use quiz::{AnswerTracker, OptionId, Question, QuestionBank, RoundState, Submission};
pub use sim::{Entity, FrameOutcome, GameEvent, GamePhase, GameSession, GameStateMachine};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (canvas pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    /// Player defaults - stationary, vertically centered (400/2 - 50/2)
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_Y: f32 = 175.0;
    pub const PLAYER_SIZE: f32 = 50.0;

    /// Enemy defaults - spawns at the right edge, same lane as the player
    pub const ENEMY_Y: f32 = 175.0;
    pub const ENEMY_SIZE: f32 = 50.0;

    /// Enemy speed in pixels per frame
    pub const ENEMY_BASE_SPEED: f32 = 0.3;
    /// Speed added per point scored
    pub const ENEMY_SPEED_STEP: f32 = 0.05;
    /// Hard speed cap
    pub const ENEMY_MAX_SPEED: f32 = 2.5;

    /// How long a wrong word button stays flagged
    pub const WRONG_FLASH_MS: u32 = 300;
}
