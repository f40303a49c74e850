//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::game::{GameConfig, GameError, GameSession};
use crate::output::{print_board, print_game_over, print_keyboard};
use crate::wordlists::WordProvider;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// `hidden_word` applies to the first round only; later rounds pick a random
/// answer.
///
/// # Errors
///
/// Returns an error if the specified hidden word is rejected or reading
/// from stdin fails.
pub fn run_simple<P: WordProvider>(
    words: &P,
    config: GameConfig,
    hidden_word: Option<&str>,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║          Wordle - Simple Mode        ║");
    println!("╚══════════════════════════════════════╝\n");
    println!("Guess the 5-letter word in 6 tries.");
    println!("Commands: 'quit' to exit\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut session = GameSession::start(words, config, hidden_word)
        .context("cannot start game with the specified word")?;

    loop {
        if config.reveal_word {
            println!("{} {}", "Hidden word:".bright_black(), session.hidden_word());
        }

        let prompt = format!("Guess {}/{}", session.attempt(), session.max_attempts());
        let Some(line) = get_user_input(&mut input, &prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        match session.submit_guess(&line) {
            Ok(submission) => {
                print_board(&session);
                if submission.status.is_finished() {
                    print_game_over(&session);
                } else {
                    print_keyboard(session.keyboard());
                }
            }
            Err(GameError::WrongLength { .. }) => {
                println!("{}\n", "❌ Word not finished: guesses are 5 letters".red());
            }
            Err(err) => println!("{}\n", format!("❌ {err}").red()),
        }

        if session.is_finished() {
            let answer = get_user_input(&mut input, "Play again? (yes/no)")?.unwrap_or_default();
            if !matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            session = GameSession::start(words, config, None)?;
            println!("\n🔄 New game started!\n");
        }
    }
}

/// Prompt and read one trimmed line, `None` at end of input
fn get_user_input(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_input_is_trimmed() {
        let mut input = io::Cursor::new("  crane \n");
        assert_eq!(
            get_user_input(&mut input, "Guess").unwrap(),
            Some("crane".to_string())
        );
    }

    #[test]
    fn end_of_input_is_none() {
        let mut input = io::Cursor::new("");
        assert_eq!(get_user_input(&mut input, "Guess").unwrap(), None);
    }
}
