//! Score command
//!
//! Scores a single guess against a hidden word, outside of any game.

use crate::core::{GuessOutcome, Word, evaluate};
use crate::game::GameError;

/// Result of scoring one guess
pub struct ScoreResult {
    pub hidden: Word,
    pub guess: Word,
    pub outcome: GuessOutcome,
}

/// Score `guess` against `hidden`
///
/// No word-list membership is required; any two 5-letter words can be scored.
///
/// # Errors
///
/// Returns an error if either word is not exactly 5 letters A-Z.
pub fn score_guess(hidden: &str, guess: &str) -> Result<ScoreResult, GameError> {
    let hidden = Word::new(hidden)?;
    let guess = Word::new(guess)?;
    let outcome = evaluate(&hidden, &guess);

    Ok(ScoreResult {
        hidden,
        guess,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_valid_words() {
        let result = score_guess("speed", "erase").unwrap();

        assert_eq!(result.hidden.text(), "SPEED");
        assert_eq!(result.guess.text(), "ERASE");
        assert_eq!(result.outcome.to_string(), "Y--YY");
    }

    #[test]
    fn score_unlisted_words() {
        assert!(score_guess("zzzzz", "qqqqq").is_ok());
    }

    #[test]
    fn score_invalid_word() {
        assert!(matches!(
            score_guess("speed", "era"),
            Err(GameError::WrongLength { actual: 3, .. })
        ));
        assert_eq!(
            score_guess("sp3ed", "erase").err(),
            Some(GameError::InvalidCharacters)
        );
    }
}
