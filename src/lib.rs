//! Wordle Game
//!
//! A terminal Wordle with duplicate-safe scoring and keyboard hints.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::game::{GameConfig, GameSession, GameStatus};
//! use wordle_game::wordlists::WordList;
//!
//! let words = WordList::embedded().unwrap();
//! let mut game = GameSession::start(&words, GameConfig::default(), Some("crane")).unwrap();
//!
//! let submission = game.submit_guess("trace").unwrap();
//! println!("{}", submission.outcome.to_emoji());
//!
//! let submission = game.submit_guess("crane").unwrap();
//! assert_eq!(submission.status, GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Log subscriber setup
pub mod logging;
