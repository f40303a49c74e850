//! Core domain types for Wordle
//!
//! Words, guess scoring and keyboard knowledge. Everything here is pure and
//! independent of word lists and presentation.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{GuessOutcome, LetterResult, evaluate};
pub use keyboard::KeyboardKnowledge;
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, WordError};
