//! Display functions for the line-based game and the score command

use super::formatters::{KEYBOARD_ROWS, colored_guess, keyboard_row};
use crate::core::{GuessOutcome, KeyboardKnowledge, Word};
use crate::game::{GameSession, GameStatus};
use crate::wordlists::WordProvider;
use colored::Colorize;

/// Print every attempt made so far, one row per guess
pub fn print_board<P: WordProvider>(session: &GameSession<'_, P>) {
    println!();
    for (i, attempt) in session.history().iter().enumerate() {
        println!(
            "  {} {}",
            format!("{}.", i + 1).bright_black(),
            colored_guess(&attempt.guess, &attempt.outcome)
        );
    }
}

/// Print the on-screen keyboard with hint colours
pub fn print_keyboard(knowledge: &KeyboardKnowledge) {
    println!();
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        println!("  {}{}", " ".repeat(indent * 2), keyboard_row(row, knowledge));
    }
    println!();
}

/// Print the end-of-round banner with a shareable emoji grid
pub fn print_game_over<P: WordProvider>(session: &GameSession<'_, P>) {
    println!("\n{}", "═".repeat(40).bright_cyan());
    match session.status() {
        GameStatus::Won => println!(
            "{}",
            format!(
                "Correct. Nice job. Solved in {}/{}",
                session.history().len(),
                session.max_attempts()
            )
            .green()
            .bold()
        ),
        GameStatus::Lost => println!(
            "{} {}",
            "Guesses used up. Word was".red().bold(),
            session.hidden_word().text().bright_yellow().bold()
        ),
        GameStatus::InProgress => return,
    }
    println!("{}", "═".repeat(40).bright_cyan());

    for outcome in session.outcomes() {
        println!("  {}", outcome.to_emoji());
    }
    println!();
}

/// Print the result of the score command
pub fn print_score_result(hidden: &Word, guess: &Word, outcome: &GuessOutcome) {
    println!(
        "\n{} vs {}",
        guess.text().bright_white().bold(),
        hidden.text().bright_yellow().bold()
    );
    println!("  {}", colored_guess(guess, outcome));
    println!("  {}  {}\n", outcome.to_emoji(), outcome.to_string().bright_black());
}
