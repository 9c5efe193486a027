//! Round generation: pick a question, shuffle its words, set the enemy speed

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::bank::{Question, QuestionBank};
use crate::tuning::Tuning;

/// One quiz round as generated, before any clicks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Japanese prompt shown to the player
    pub prompt: String,
    /// Correct word order
    pub target: Vec<String>,
    /// Shuffled words offered as buttons (a permutation of `target`)
    pub presentation: Vec<String>,
}

impl RoundState {
    /// Build a round from a question, shuffling with `rng`.
    ///
    /// Duplicate words are kept as separate entries.
    pub fn from_question<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Self {
        let target: Vec<String> = question.tokens().map(str::to_owned).collect();
        let mut presentation = target.clone();
        presentation.shuffle(rng);
        Self {
            prompt: question.prompt.clone(),
            target,
            presentation,
        }
    }

    /// Number of words to place
    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }
}

/// Start a round at `score`: returns the round and the enemy speed for it
pub fn begin_round<R: Rng + ?Sized>(
    bank: &QuestionBank,
    tuning: &Tuning,
    score: u32,
    rng: &mut R,
) -> (RoundState, f32) {
    let question = bank.choose(rng);
    let round = RoundState::from_question(question, rng);
    log::info!(
        "Round at score {}: \"{}\" ({} words)",
        score,
        round.prompt,
        round.len()
    );
    (round, tuning.enemy_speed(score))
}
