//! Startup errors
//!
//! Everything that can go wrong before a game exists. In-game input never
//! produces an error; invalid keys are absorbed by the state machine.

use crate::core::WordError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A word list or game setting that cannot be used to start a game
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("word list is empty")]
    EmptyWordList,

    #[error("word list entry {word:?} has {actual} letters, expected {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        actual: usize,
    },

    #[error("word list entry {word:?} is not a valid word: {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },

    #[error("{setting} must be at least 1")]
    InvalidSetting { setting: &'static str },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_entry() {
        let err = ConfigurationError::LengthMismatch {
            word: "APPLES".to_string(),
            expected: 5,
            actual: 6,
        };
        assert_eq!(
            err.to_string(),
            "word list entry \"APPLES\" has 6 letters, expected 5"
        );

        let err = ConfigurationError::InvalidSetting {
            setting: "max_attempts",
        };
        assert_eq!(err.to_string(), "max_attempts must be at least 1");
    }

    #[test]
    fn invalid_word_keeps_source() {
        use std::error::Error;

        let err = ConfigurationError::InvalidWord {
            word: "AB1DE".to_string(),
            source: WordError::InvalidCharacters,
        };
        assert!(err.source().is_some());
    }
}
