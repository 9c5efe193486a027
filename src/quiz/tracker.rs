//! Ordered answer checking
//!
//! A click is accepted when the clicked word equals the word expected at the
//! current position. Equal words are interchangeable, but only the clicked
//! button is retired, so each presented word is used at most once.

use serde::{Deserialize, Serialize};

use super::round::RoundState;

/// Index of a word button in the presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionId(pub usize);

/// Result of one click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub accepted: bool,
    pub round_complete: bool,
}

impl Submission {
    pub(crate) const REJECTED: Self = Self {
        accepted: false,
        round_complete: false,
    };
}

/// Progress through one round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerTracker {
    round: RoundState,
    /// Next position in `round.target` to fill
    next_index: usize,
    /// Parallel to `round.presentation`; true once that button was used
    retired: Vec<bool>,
}

impl AnswerTracker {
    /// Arm a tracker for a freshly generated round
    pub fn new(round: RoundState) -> Self {
        let retired = vec![false; round.presentation.len()];
        Self {
            round,
            next_index: 0,
            retired,
        }
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn prompt(&self) -> &str {
        &self.round.prompt
    }

    pub fn next_expected_index(&self) -> usize {
        self.next_index
    }

    pub fn is_complete(&self) -> bool {
        self.next_index == self.round.target.len()
    }

    /// Accepted words so far, space-separated
    pub fn transcript(&self) -> String {
        self.round.target[..self.next_index].join(" ")
    }

    /// Word shown on a button
    pub fn option_text(&self, id: OptionId) -> Option<&str> {
        self.round.presentation.get(id.0).map(String::as_str)
    }

    /// Whether a button can still be clicked
    pub fn is_available(&self, id: OptionId) -> bool {
        self.retired.get(id.0).is_some_and(|used| !used)
    }

    /// Buttons that can still be clicked, in presentation order
    pub fn available_options(&self) -> impl Iterator<Item = (OptionId, &str)> {
        self.round
            .presentation
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.retired[*i])
            .map(|(i, word)| (OptionId(i), word.as_str()))
    }

    /// Handle a click on a presented word
    pub fn submit(&mut self, id: OptionId) -> Submission {
        if self.is_complete() || !self.is_available(id) {
            return Submission::REJECTED;
        }

        let expected = &self.round.target[self.next_index];
        if self.round.presentation[id.0] != *expected {
            return Submission::REJECTED;
        }

        self.retired[id.0] = true;
        self.next_index += 1;
        Submission {
            accepted: true,
            round_complete: self.is_complete(),
        }
    }

    /// Submit by word value; resolves to the first unused button showing it
    pub fn submit_token(&mut self, token: &str) -> Submission {
        match self.find_available(token) {
            Some(id) => self.submit(id),
            None => Submission::REJECTED,
        }
    }

    /// First unused button showing `token`
    pub(crate) fn find_available(&self, token: &str) -> Option<OptionId> {
        self.available_options()
            .find(|(_, word)| *word == token)
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(target: &[&str], presentation: &[&str]) -> AnswerTracker {
        AnswerTracker::new(RoundState {
            prompt: "prompt".to_string(),
            target: target.iter().map(|s| s.to_string()).collect(),
            presentation: presentation.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[test]
    fn test_correct_order_completes() {
        let mut t = tracker(&["Way", "to", "go"], &["go", "Way", "to"]);
        assert_eq!(
            t.submit(OptionId(1)),
            Submission {
                accepted: true,
                round_complete: false
            }
        );
        assert_eq!(t.transcript(), "Way");
        assert!(t.submit(OptionId(2)).accepted);
        let last = t.submit(OptionId(0));
        assert!(last.accepted && last.round_complete);
        assert_eq!(t.transcript(), "Way to go");
        assert!(t.is_complete());
        assert_eq!(t.available_options().count(), 0);
    }

    #[test]
    fn test_wrong_word_changes_nothing() {
        let mut t = tracker(&["Way", "to", "go"], &["go", "Way", "to"]);
        for _ in 0..5 {
            assert_eq!(t.submit(OptionId(0)), Submission::REJECTED);
        }
        assert_eq!(t.next_expected_index(), 0);
        assert_eq!(t.transcript(), "");
        assert_eq!(t.available_options().count(), 3);
    }

    #[test]
    fn test_retired_button_not_reusable() {
        let mut t = tracker(&["go", "go"], &["go", "go"]);
        assert!(t.submit(OptionId(0)).accepted);
        assert!(!t.is_available(OptionId(0)));
        // Same button again is rejected even though "go" is expected
        assert_eq!(t.submit(OptionId(0)), Submission::REJECTED);
        assert_eq!(t.next_expected_index(), 1);
        // The other copy works
        assert!(t.submit(OptionId(1)).round_complete);
    }

    #[test]
    fn test_duplicates_matched_by_position() {
        let mut t = tracker(&["that", "that", "way"], &["way", "that", "that"]);
        // "way" is correct-valued but belongs at position 2
        assert!(!t.submit(OptionId(0)).accepted);
        assert!(t.submit(OptionId(2)).accepted);
        assert!(!t.submit(OptionId(0)).accepted);
        assert!(t.submit(OptionId(1)).accepted);
        assert!(t.submit(OptionId(0)).round_complete);
        assert_eq!(t.transcript(), "that that way");
    }

    #[test]
    fn test_submit_token_retires_one_instance() {
        let mut t = tracker(&["that", "that", "way"], &["that", "way", "that"]);
        assert!(t.submit_token("that").accepted);
        assert!(!t.is_available(OptionId(0)));
        assert!(t.is_available(OptionId(2)));
        assert!(!t.submit_token("way").accepted);
        assert!(t.submit_token("that").accepted);
        assert!(!t.submit_token("that").accepted);
        assert!(t.submit_token("way").round_complete);
    }

    #[test]
    fn test_unknown_or_out_of_range_rejected() {
        let mut t = tracker(&["Hang", "in", "there"], &["in", "there", "Hang"]);
        assert_eq!(t.submit(OptionId(42)), Submission::REJECTED);
        assert_eq!(t.submit_token("nope"), Submission::REJECTED);
        assert_eq!(t.option_text(OptionId(42)), None);
        assert_eq!(t.option_text(OptionId(2)), Some("Hang"));
        assert_eq!(t.next_expected_index(), 0);
    }

    #[test]
    fn test_complete_round_ignores_further_clicks() {
        let mut t = tracker(&["Yes"], &["Yes"]);
        assert!(t.submit(OptionId(0)).round_complete);
        assert_eq!(t.submit(OptionId(0)), Submission::REJECTED);
        assert_eq!(t.next_expected_index(), 1);
    }
}
