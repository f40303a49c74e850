//! Game session state machine
//!
//! A session owns one round: the hidden word, the attempts made so far and the
//! keyboard knowledge they produced. It is created by [`GameSession::start`]
//! and mutated only through [`GameSession::submit_guess`]. A new round is a
//! new session.

use super::error::GameError;
use crate::core::{GuessOutcome, KeyboardKnowledge, Word, evaluate};
use crate::wordlists::WordProvider;
use rand::Rng;
use tracing::{debug, info};

/// Number of guesses allowed per round
pub const MAX_ATTEMPTS: usize = 6;

/// Round status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Settings fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Reject guesses missing from the valid-guesses list
    pub guesses_must_be_words: bool,
    /// Reject a specified hidden word missing from the answers list
    pub answer_must_be_listed: bool,
    /// Presentation hint: show the hidden word while playing
    pub reveal_word: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            guesses_must_be_words: true,
            answer_must_be_listed: true,
            reveal_word: false,
        }
    }
}

/// One submitted guess with its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub outcome: GuessOutcome,
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub outcome: GuessOutcome,
    pub status: GameStatus,
}

/// A single round of Wordle
#[derive(Debug, Clone)]
pub struct GameSession<'a, P: WordProvider> {
    words: &'a P,
    config: GameConfig,
    hidden: Word,
    attempt: usize,
    history: Vec<Attempt>,
    keyboard: KeyboardKnowledge,
    status: GameStatus,
}

impl<'a, P: WordProvider> GameSession<'a, P> {
    /// Start a round, choosing a random answer unless `hidden_word` is given
    ///
    /// # Errors
    ///
    /// Rejects a specified hidden word with the wrong length, non-letters, or
    /// (when `answer_must_be_listed` is set) one missing from the answers.
    pub fn start(
        words: &'a P,
        config: GameConfig,
        hidden_word: Option<&str>,
    ) -> Result<Self, GameError> {
        Self::start_with_rng(words, config, hidden_word, &mut rand::rng())
    }

    /// Same as [`start`](Self::start) with an explicit random source
    ///
    /// # Errors
    ///
    /// See [`start`](Self::start).
    pub fn start_with_rng<R: Rng + ?Sized>(
        words: &'a P,
        config: GameConfig,
        hidden_word: Option<&str>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let hidden = match hidden_word {
            Some(raw) => {
                let word = Word::new(raw).inspect_err(|err| {
                    debug!(input = raw, %err, "specified hidden word rejected");
                })?;
                if config.answer_must_be_listed && !words.is_answer(&word) {
                    debug!(%word, "specified hidden word is not an answer");
                    return Err(GameError::NotAValidWord(word.text().to_string()));
                }
                word
            }
            None => words.random_answer(rng).clone(),
        };

        debug!(
            guesses_must_be_words = config.guesses_must_be_words,
            reveal_word = config.reveal_word,
            specified = hidden_word.is_some(),
            hidden = %hidden,
            "game started"
        );

        Ok(Self {
            words,
            config,
            hidden,
            attempt: 1,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            keyboard: KeyboardKnowledge::new(),
            status: GameStatus::InProgress,
        })
    }

    /// Score a guess and advance the round
    ///
    /// # Errors
    ///
    /// Checked in order, each leaving the session untouched:
    /// - `GameNotInProgress` once the round is won or lost
    /// - `WrongLength` unless the input has exactly 5 characters
    /// - `InvalidCharacters` for anything other than letters
    /// - `NotAValidWord` when guesses must be words and this one is not listed
    pub fn submit_guess(&mut self, raw: &str) -> Result<Submission, GameError> {
        if self.status.is_finished() {
            debug!(input = raw, status = ?self.status, "guess after game end");
            return Err(GameError::GameNotInProgress);
        }

        let guess = Word::new(raw).inspect_err(|err| {
            debug!(input = raw, %err, "guess rejected");
        })?;

        if self.config.guesses_must_be_words && !self.words.is_valid_guess(&guess) {
            debug!(%guess, "guess not in word list");
            return Err(GameError::NotAValidWord(guess.text().to_string()));
        }

        let outcome = evaluate(&self.hidden, &guess);
        self.keyboard.record(&guess, &outcome);
        debug!(attempt = self.attempt, %guess, %outcome, "guess scored");
        self.history.push(Attempt { guess, outcome });

        if outcome.is_win() {
            self.status = GameStatus::Won;
            info!(attempts = self.attempt, "game won");
        } else if self.attempt >= MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
            info!(hidden = %self.hidden, "game lost");
        } else {
            self.attempt += 1;
        }

        Ok(Submission {
            outcome,
            status: self.status,
        })
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Current attempt number, 1-based
    ///
    /// Stays on the final attempt once the round is over.
    #[must_use]
    pub const fn attempt(&self) -> usize {
        self.attempt
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        MAX_ATTEMPTS
    }

    /// Guesses still available in this round
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.history.len()
    }

    /// Accepted guesses in submission order
    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    /// Outcomes of accepted guesses in submission order
    pub fn outcomes(&self) -> impl Iterator<Item = &GuessOutcome> {
        self.history.iter().map(|a| &a.outcome)
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardKnowledge {
        &self.keyboard
    }

    /// The hidden word; whether to show it is up to the caller
    #[must_use]
    pub const fn hidden_word(&self) -> &Word {
        &self.hidden
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }
}
