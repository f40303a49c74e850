//! Word list loading utilities
//!
//! Turns embedded constants or word files into validated `Word`s.

use super::WordListError;
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Only the first whitespace-separated token of a line is
/// read, and entries that are not 5 letters are skipped, so general-purpose
/// dictionaries can be used directly.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(words_from_lines(content.lines()))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    lines
        .filter_map(|line| line.split_whitespace().next())
        .filter_map(|token| Word::new(token).ok())
        .collect()
}
