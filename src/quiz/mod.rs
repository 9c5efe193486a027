//! Vocabulary ordering quiz
//!
//! Independent of the simulation: the state machine owns a tracker and feeds
//! it clicks, nothing here knows about enemies or frames.

pub mod bank;
pub mod round;
pub mod tracker;

pub use bank::{Question, QuestionBank};
pub use round::{RoundState, begin_round};
pub use tracker::{AnswerTracker, OptionId, Submission};
