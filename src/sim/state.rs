//! Game state and core simulation types
//!
//! Everything the UI needs to draw a frame lives in `GameSession`.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::quiz::{AnswerTracker, OptionId};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title overlay, nothing has run yet
    #[default]
    Start,
    /// Enemy approaching, quiz active
    Playing,
    /// Enemy reached the player; waits for restart
    GameOver,
}

/// Things that happened during a tick or input callback, for the UI to show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run began (score reset to 0)
    Started,
    /// New question is up; buttons must be rebuilt
    RoundStarted { prompt: String, options: Vec<String> },
    /// Word placed; its button goes away
    WordAccepted { option: OptionId, transcript: String },
    /// Wrong word; flash its button briefly
    WordRejected { option: OptionId },
    /// Sentence finished
    RoundCleared { score: u32 },
    /// Enemy hit the player
    GameOver { final_score: u32 },
}

/// The whole mutable game, owned by the state machine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub phase: GamePhase,
    /// Sentences completed this run
    pub score: u32,
    /// Score frozen at the moment of the last game over
    pub final_score: Option<u32>,
    pub player: Entity,
    pub enemy: Entity,
    /// Present exactly while `phase == Playing`
    pub round: Option<AnswerTracker>,
    /// Frames simulated this run
    pub time_ticks: u64,
}

impl GameSession {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: GamePhase::Start,
            score: 0,
            final_score: None,
            player: tuning.player(),
            enemy: tuning.enemy(tuning.enemy_speed(0)),
            round: None,
            time_ticks: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Consistency check used by tests and debug builds
    pub fn is_consistent(&self) -> bool {
        let round_matches_phase = self.round.is_some() == self.is_playing();
        let final_matches_phase = self.phase != GamePhase::GameOver || self.final_score.is_some();
        round_matches_phase && final_matches_phase
    }
}
