//! Per-letter knowledge accumulated across guesses
//!
//! Backs the keyboard hints: each key shows the most informative result the
//! player has seen for that letter so far.

use super::feedback::{GuessOutcome, LetterResult};
use super::word::{ALPHABET_SIZE, Word, letter_index};

/// Best result observed for each letter A-Z
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardKnowledge {
    letters: [Option<LetterResult>; ALPHABET_SIZE],
}

impl KeyboardKnowledge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the knowledge
    ///
    /// Each entry only ever moves up the `Absent < Present < Correct` order.
    pub fn record(&mut self, guess: &Word, outcome: &GuessOutcome) {
        for (&letter, &result) in guess.letters().iter().zip(outcome.results()) {
            let slot = &mut self.letters[letter_index(letter)];
            *slot = (*slot).max(Some(result));
        }
    }

    /// Best known result for a letter, `None` if it has not been guessed
    ///
    /// Accepts either case; anything outside A-Z is unknown.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterResult> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        let upper = letter.to_ascii_uppercase() as u8;
        self.letters[letter_index(upper)]
    }

    /// Known letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterResult)> + '_ {
        self.letters
            .iter()
            .zip('A'..='Z')
            .filter_map(|(result, letter)| result.map(|r| (letter, r)))
    }

    /// Check if nothing has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.iter().all(Option::is_none)
    }
}
