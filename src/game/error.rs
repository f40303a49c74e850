//! Rejections returned by a game session

use crate::core::{WORD_LENGTH, WordError};
use thiserror::Error;

/// Reason a start or guess request was rejected
///
/// Rejections never change session state, so the caller can retry with
/// corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("word must be {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("word must contain only the letters A-Z")]
    InvalidCharacters,
    #[error("{0} is not in the word list")]
    NotAValidWord(String),
    #[error("the game is over")]
    GameNotInProgress,
}

impl From<WordError> for GameError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(actual) => Self::WrongLength {
                expected: WORD_LENGTH,
                actual,
            },
            WordError::InvalidCharacters => Self::InvalidCharacters,
        }
    }
}
