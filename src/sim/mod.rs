//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per delivered tick, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod machine;
pub mod state;
pub mod tick;

pub use collision::overlaps;
pub use entity::Entity;
pub use machine::GameStateMachine;
pub use state::{GameEvent, GamePhase, GameSession};
pub use tick::{FrameOutcome, tick};
