//! Word lists for the game
//!
//! Provides the embedded lists compiled into the binary, file loading, and the
//! `WordList` that a game session consults for answers and allowed guesses.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from building a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("answer list contains no valid 5-letter words")]
    NoAnswers,
}

/// Read-only source of answers and allowed guesses
///
/// Every method works on validated 5-letter words only.
pub trait WordProvider {
    /// Check if a word may be chosen as the hidden word
    fn is_answer(&self, word: &Word) -> bool;

    /// Check if a word may be submitted as a guess
    fn is_valid_guess(&self, word: &Word) -> bool;

    /// Pick a hidden word uniformly at random
    fn random_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word;

    /// Number of distinct answers
    fn answer_count(&self) -> usize;

    /// Number of distinct words accepted as guesses
    fn guess_count(&self) -> usize;
}

/// Immutable pair of word sets: answers and valid guesses
#[derive(Debug, Clone)]
pub struct WordList {
    answers: Vec<Word>,
    answer_set: FxHashSet<Word>,
    guesses: FxHashSet<Word>,
}

impl WordList {
    /// Build a word list from answers and allowed guesses
    ///
    /// Duplicate answers are dropped (first occurrence wins) and every answer
    /// is also accepted as a guess.
    ///
    /// # Errors
    ///
    /// Returns `WordListError::NoAnswers` if `answers` is empty.
    pub fn new(
        answers: impl IntoIterator<Item = Word>,
        guesses: impl IntoIterator<Item = Word>,
    ) -> Result<Self, WordListError> {
        let mut answer_set = FxHashSet::default();
        let answers: Vec<Word> = answers
            .into_iter()
            .filter(|w| answer_set.insert(w.clone()))
            .collect();

        if answers.is_empty() {
            return Err(WordListError::NoAnswers);
        }

        let mut guesses: FxHashSet<Word> = guesses.into_iter().collect();
        guesses.extend(answers.iter().cloned());

        Ok(Self {
            answers,
            answer_set,
            guesses,
        })
    }

    /// Word list built from the lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Only fails if the embedded answer list is empty.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(
            loader::words_from_slice(ANSWERS),
            loader::words_from_slice(ALLOWED),
        )
    }

    /// Word list with optional file overrides for either set
    ///
    /// A missing path falls back to the embedded list for that set.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or no answers remain.
    pub fn load(
        answers_path: Option<&Path>,
        guesses_path: Option<&Path>,
    ) -> Result<Self, WordListError> {
        let answers = match answers_path {
            Some(path) => loader::load_from_file(path)?,
            None => loader::words_from_slice(ANSWERS),
        };
        let guesses = match guesses_path {
            Some(path) => loader::load_from_file(path)?,
            None => loader::words_from_slice(ALLOWED),
        };
        Self::new(answers, guesses)
    }

    /// Answers in their original order
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }
}

impl WordProvider for WordList {
    fn is_answer(&self, word: &Word) -> bool {
        self.answer_set.contains(word)
    }

    fn is_valid_guess(&self, word: &Word) -> bool {
        self.guesses.contains(word)
    }

    fn random_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Non-empty: `new` rejects an empty answer list
        &self.answers[rng.random_range(0..self.answers.len())]
    }

    fn answer_count(&self) -> usize {
        self.answers.len()
    }

    fn guess_count(&self) -> usize {
        self.guesses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_lists_are_valid_words() {
        for &w in ANSWERS.iter().chain(ALLOWED) {
            assert!(Word::new(w).is_ok(), "Word '{w}' is not 5 letters");
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        let allowed: FxHashSet<_> = ALLOWED.iter().collect();
        for answer in ANSWERS {
            assert!(allowed.contains(answer), "Answer '{answer}' not in allowed list");
        }
    }

    #[test]
    fn embedded_word_list_loads() {
        let list = WordList::embedded().unwrap();
        assert_eq!(list.answer_count(), ANSWERS_COUNT);
        assert_eq!(list.guess_count(), ALLOWED_COUNT);
        assert!(list.is_answer(&word("crane")));
        assert!(list.is_valid_guess(&word("crane")));
    }

    #[test]
    fn empty_answers_rejected() {
        let result = WordList::new(Vec::new(), words_from_slice(&["crane"]));
        assert!(matches!(result, Err(WordListError::NoAnswers)));
    }

    #[test]
    fn answers_are_always_valid_guesses() {
        let list = WordList::new(words_from_slice(&["crane"]), Vec::new()).unwrap();
        assert!(list.is_valid_guess(&word("crane")));
        assert!(!list.is_valid_guess(&word("slate")));
    }

    #[test]
    fn guess_only_words_are_not_answers() {
        let list =
            WordList::new(words_from_slice(&["crane"]), words_from_slice(&["abide"])).unwrap();
        assert!(list.is_valid_guess(&word("abide")));
        assert!(!list.is_answer(&word("abide")));
    }

    #[test]
    fn duplicate_answers_collapse() {
        let list = WordList::new(words_from_slice(&["crane", "CRANE", "slate"]), Vec::new())
            .unwrap();
        assert_eq!(list.answers(), &[word("crane"), word("slate")]);
    }

    #[test]
    fn random_answer_comes_from_answers() {
        let list = WordList::new(
            words_from_slice(&["crane", "slate", "audio"]),
            words_from_slice(&["abide"]),
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            assert!(list.is_answer(list.random_answer(&mut rng)));
        }
    }

    #[test]
    fn load_without_paths_matches_embedded() {
        let list = WordList::load(None, None).unwrap();
        assert_eq!(list.answer_count(), ANSWERS_COUNT);
    }
}
