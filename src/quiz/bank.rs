//! Question corpus
//!
//! Loaded once and validated up front, so picking a question never fails.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Built-in idioms shipped with the game
const BUILTIN_QUESTIONS: &str = include_str!("../../assets/questions.json");

/// A Japanese prompt and the English sentence the player rebuilds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    /// Space-delimited words, at least one
    pub translation: String,
}

impl Question {
    pub fn new(prompt: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            translation: translation.into(),
        }
    }

    /// Words of the translation in order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.translation.split_whitespace()
    }
}

/// Fixed, non-empty list of questions
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Validate and wrap a question list
    pub fn new(questions: Vec<Question>) -> Result<Self, ConfigError> {
        if questions.is_empty() {
            return Err(ConfigError::EmptyBank);
        }
        if let Some(index) = questions.iter().position(|q| q.tokens().next().is_none()) {
            return Err(ConfigError::EmptyTranslation { index });
        }
        Ok(Self { questions })
    }

    /// Parse `[{ "prompt": .., "translation": .. }]`
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    /// The idioms compiled into the binary
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN_QUESTIONS)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Uniform pick with replacement
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Question {
        &self.questions[rng.random_range(0..self.questions.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_builtin_bank_loads() {
        let bank = QuestionBank::builtin().unwrap();
        assert_eq!(bank.len(), 15);
        assert!(
            bank.questions()
                .iter()
                .any(|q| q.translation == "Once in a blue moon")
        );
    }

    #[test]
    fn test_empty_bank_rejected() {
        assert!(matches!(
            QuestionBank::new(Vec::new()),
            Err(ConfigError::EmptyBank)
        ));
        assert!(matches!(
            QuestionBank::from_json("[]"),
            Err(ConfigError::EmptyBank)
        ));
    }

    #[test]
    fn test_blank_translation_rejected_at_load() {
        let questions = vec![Question::new("a", "fine words"), Question::new("b", "   ")];
        assert!(matches!(
            QuestionBank::new(questions),
            Err(ConfigError::EmptyTranslation { index: 1 })
        ));
    }

    #[test]
    fn test_tokens_split_on_any_whitespace() {
        let q = Question::new("p", "  It's   on\tme ");
        assert_eq!(q.tokens().collect::<Vec<_>>(), vec!["It's", "on", "me"]);
    }

    #[test]
    fn test_choose_covers_every_question() {
        let bank = QuestionBank::new(vec![
            Question::new("1", "one"),
            Question::new("2", "two"),
            Question::new("3", "three"),
        ])
        .unwrap();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let q = bank.choose(&mut rng);
            let idx = bank.questions().iter().position(|x| x == q).unwrap();
            seen[idx] = true;
        }
        assert_eq!(seen, [true; 3]);
    }
}
