//! Terminal output formatting
//!
//! Colour and layout helpers for the line-based interface.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_over, print_keyboard, print_score_result};
