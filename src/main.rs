//! Wordle Game - CLI
//!
//! Terminal Wordle with a TUI (default), a line-based mode and a scoring tool.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_game::{
    commands::{run_simple, score_guess},
    game::GameConfig,
    interactive::{App, run_tui},
    logging::init_logging,
    output::print_score_result,
    wordlists::{WordList, WordProvider},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden 5-letter word in 6 tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answers list file (default: embedded list)
    #[arg(long, global = true, value_name = "PATH")]
    answers: Option<PathBuf>,

    /// Valid-guesses list file (default: embedded list)
    #[arg(long, global = true, value_name = "PATH")]
    guesses: Option<PathBuf>,

    /// Accept guesses (and a specified word) that are not in the word lists
    #[arg(long, global = true)]
    any_guess: bool,

    /// Show the hidden word while playing
    #[arg(long, global = true)]
    show_word: bool,

    /// Play the first round against this word instead of a random one
    #[arg(long, global = true, value_name = "WORD")]
    word: Option<String>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game without the TUI
    Simple,

    /// Score one guess against a hidden word
    Score {
        /// The hidden word
        hidden: String,

        /// The guess to score
        guess: String,
    },
}

impl Cli {
    /// Validation and reveal settings for new sessions
    fn game_config(&self) -> GameConfig {
        GameConfig {
            guesses_must_be_words: !self.any_guess,
            answer_must_be_listed: !self.any_guess,
            reveal_word: self.show_word,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    // Default to Play mode if no command given
    match &cli.command {
        None | Some(Commands::Play) => run_play_command(&cli),
        Some(Commands::Simple) => run_simple_command(&cli),
        Some(Commands::Score { hidden, guess }) => run_score_command(hidden, guess),
    }
}

fn load_words(cli: &Cli) -> Result<WordList> {
    let words = WordList::load(cli.answers.as_deref(), cli.guesses.as_deref())
        .context("failed to load word lists")?;
    tracing::debug!(
        answers = words.answer_count(),
        guesses = words.guess_count(),
        "word lists loaded"
    );
    Ok(words)
}

fn run_play_command(cli: &Cli) -> Result<()> {
    let words = load_words(cli)?;
    let app = App::new(&words, cli.game_config(), cli.word.as_deref())
        .context("cannot start game with the specified word")?;
    run_tui(app)
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let words = load_words(cli)?;
    run_simple(&words, cli.game_config(), cli.word.as_deref())
}

fn run_score_command(hidden: &str, guess: &str) -> Result<()> {
    let result = score_guess(hidden, guess)?;
    print_score_result(&result.hidden, &result.guess, &result.outcome);
    Ok(())
}
