//! Load-time configuration errors
//!
//! Gameplay never fails: wrong words and stray clicks are ordinary outcomes.
//! Only bad question data or bad tuning can stop the game from starting.

use std::fmt;

/// Errors raised while loading questions or tuning
#[derive(Debug)]
pub enum ConfigError {
    /// JSON could not be parsed
    Json(serde_json::Error),

    /// Question list has no entries
    EmptyBank,

    /// Translation at this index has no words
    EmptyTranslation { index: usize },

    /// A tuning value is out of range
    InvalidTuning { field: &'static str, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Json(err) => write!(f, "Malformed config JSON: {}", err),
            ConfigError::EmptyBank => write!(f, "Question bank is empty"),
            ConfigError::EmptyTranslation { index } => {
                write!(f, "Question {} has an empty translation", index)
            }
            ConfigError::InvalidTuning { field, value } => {
                write!(f, "Tuning value {} is out of range: {}", field, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_bad_question() {
        let err = ConfigError::EmptyTranslation { index: 3 };
        assert_eq!(err.to_string(), "Question 3 has an empty translation");
    }

    #[test]
    fn test_json_error_keeps_source() {
        use std::error::Error;

        let json_err = serde_json::from_str::<Vec<u32>>("[1,").unwrap_err();
        let err = ConfigError::from(json_err);
        assert!(err.source().is_some());
        assert!(ConfigError::EmptyBank.source().is_none());
    }
}
