//! Guess scoring
//!
//! Each guess letter is classified as one of three states:
//! - `Correct` = letter in the right position (green)
//! - `Present` = letter elsewhere in the word (yellow)
//! - `Absent`  = letter not in the word, or all its occurrences used up (gray)

use super::word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};
use std::fmt;

/// Per-letter classification of a guess
///
/// Ordered by how much it tells the player: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterResult {
    Absent,
    Present,
    Correct,
}

impl LetterResult {
    /// Square emoji used in shareable result grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-character code: `G`, `Y` or `-`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    const fn from_code(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Scored result of one guess, one entry per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessOutcome([LetterResult; WORD_LENGTH]);

impl GuessOutcome {
    /// Every position correct
    pub const WIN: Self = Self([LetterResult::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(results: [LetterResult; WORD_LENGTH]) -> Self {
        Self(results)
    }

    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.0
    }

    /// Result at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> LetterResult {
        self.0[position]
    }

    /// Check if every letter is `Correct`
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&r| r == LetterResult::Correct)
    }

    /// Count positions carrying a given result
    #[must_use]
    pub fn count(&self, result: LetterResult) -> usize {
        self.0.iter().filter(|&&r| r == result).count()
    }

    /// Render as an emoji row like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|r| r.emoji()).collect()
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in &self.0 {
            write!(f, "{}", r.code())?;
        }
        Ok(())
    }
}

/// Parse an outcome from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
impl std::str::FromStr for GuessOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(format!("Invalid outcome string: {s}"));
        }

        let mut results = [LetterResult::Absent; WORD_LENGTH];
        for (slot, ch) in results.iter_mut().zip(chars) {
            *slot = LetterResult::from_code(ch)
                .ok_or_else(|| format!("Invalid outcome string: {s}"))?;
        }
        Ok(Self(results))
    }
}

/// Score `guess` against the `hidden` word
///
/// Implements the standard duplicate-letter rules.
///
/// # Algorithm
/// 1. Count how many times each letter occurs in the hidden word
/// 2. First pass: mark exact matches `Correct` and remove them from the pool
/// 3. Second pass, left to right: a pending letter still in the pool is
///    `Present` (and consumes one occurrence), otherwise `Absent`
///
/// Exact matches must be reserved first, or an early misplaced copy of a
/// letter could steal the occurrence that a later exact match needs.
///
/// # Examples
/// ```
/// use wordle_game::core::{Word, evaluate};
///
/// let hidden = Word::new("crane").unwrap();
/// let guess = Word::new("trace").unwrap();
/// assert_eq!(evaluate(&hidden, &guess).to_string(), "-GGYG");
/// ```
#[must_use]
pub fn evaluate(hidden: &Word, guess: &Word) -> GuessOutcome {
    let mut results = [LetterResult::Absent; WORD_LENGTH];
    let mut pending = [true; WORD_LENGTH];
    let mut remaining: [u8; ALPHABET_SIZE] = hidden.letter_counts();

    for (i, (&g, &h)) in guess.letters().iter().zip(hidden.letters()).enumerate() {
        if g == h {
            results[i] = LetterResult::Correct;
            pending[i] = false;
            remaining[letter_index(g)] -= 1;
        }
    }

    for (i, &g) in guess.letters().iter().enumerate() {
        if !pending[i] {
            continue;
        }
        let count = &mut remaining[letter_index(g)];
        if *count > 0 {
            results[i] = LetterResult::Present;
            *count -= 1;
        }
    }

    GuessOutcome(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterResult::{Absent, Correct, Present};

    fn score(hidden: &str, guess: &str) -> GuessOutcome {
        evaluate(&Word::new(hidden).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn exact_guess_is_a_win() {
        let outcome = score("crane", "crane");
        assert_eq!(outcome, GuessOutcome::WIN);
        assert!(outcome.is_win());
        assert_eq!(outcome.count(Correct), 5);
    }

    #[test]
    fn no_shared_letters_all_absent() {
        let outcome = score("fghij", "abcde");
        assert_eq!(outcome.count(Absent), 5);
        assert!(!outcome.is_win());
    }

    #[test]
    fn crane_vs_trace() {
        assert_eq!(
            score("crane", "trace").results(),
            &[Absent, Correct, Correct, Present, Correct]
        );
    }

    #[test]
    fn speed_vs_erase_duplicate_budget() {
        // SPEED holds two E's and neither is matched exactly, so both E's in
        // ERASE fit in the budget
        assert_eq!(
            score("speed", "erase").results(),
            &[Present, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn exact_match_reserves_occurrence_before_misplaced_copy() {
        // SLATE has one E, claimed by the exact match at position 4
        assert_eq!(score("slate", "eerie").to_string(), "----G");
        // FLOOR has two O's: one exact, one left for the misplaced copy
        assert_eq!(score("floor", "robot").to_string(), "YY-G-");
    }

    #[test]
    fn surplus_duplicates_are_absent() {
        assert_eq!(score("hotel", "lolly").to_string(), "YG---");
        // Both B's and the E of ABBEY are exact, leaving nothing for the first E
        assert_eq!(score("abbey", "ebbed").to_string(), "-GGG-");
        assert_eq!(score("crane", "aaaaa").to_string(), "--G--");
    }

    #[test]
    fn comparison_is_case_insensitive() {
        assert_eq!(score("CRANE", "trace"), score("crane", "TRACE"));
    }

    #[test]
    fn outcome_parse_and_render() {
        let p1: GuessOutcome = "GY-GY".parse().unwrap();
        let p2: GuessOutcome = "🟩🟨⬜🟩🟨".parse().unwrap();
        let p3: GuessOutcome = "gy_gy".parse().unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(p1.to_string(), "GY-GY");
    }

    #[test]
    fn outcome_parse_invalid() {
        assert!("GYGGYX".parse::<GuessOutcome>().is_err());
        assert!("GYG".parse::<GuessOutcome>().is_err());
        assert!("GXGGY".parse::<GuessOutcome>().is_err());
        assert!("".parse::<GuessOutcome>().is_err());
    }

    #[test]
    fn letter_result_ordering() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert_eq!([Present, Correct, Absent].into_iter().max(), Some(Correct));
    }
}
