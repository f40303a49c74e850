//! Formatting utilities for terminal output

use crate::core::{GuessOutcome, KeyboardKnowledge, LetterResult, Word};
use colored::{ColoredString, Colorize};

/// Keyboard rows in QWERTY order
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Style one letter tile by its result
#[must_use]
pub fn colored_tile(letter: char, result: Option<LetterResult>) -> ColoredString {
    let tile = format!(" {letter} ");
    match result {
        Some(LetterResult::Correct) => tile.white().bold().on_green(),
        Some(LetterResult::Present) => tile.black().bold().on_yellow(),
        Some(LetterResult::Absent) => tile.white().on_bright_black(),
        None => tile.normal(),
    }
}

/// Render a scored guess as coloured tiles
#[must_use]
pub fn colored_guess(guess: &Word, outcome: &GuessOutcome) -> String {
    guess
        .text()
        .chars()
        .zip(outcome.results())
        .map(|(letter, &result)| colored_tile(letter, Some(result)).to_string())
        .collect()
}

/// Render one keyboard row with hint colours
#[must_use]
pub fn keyboard_row(row: &str, knowledge: &KeyboardKnowledge) -> String {
    row.chars()
        .map(|letter| colored_tile(letter, knowledge.get(letter)).to_string())
        .collect()
}
