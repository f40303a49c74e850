//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Key, Message, MessageStyle, Statistics, run_tui};
pub use rendering::{tile_style, ui};
