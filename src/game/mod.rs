//! Game rounds
//!
//! The session state machine and the rejections it can return.

mod error;
mod session;

pub use error::GameError;
pub use session::{Attempt, GameConfig, GameSession, GameStatus, MAX_ATTEMPTS, Submission};
