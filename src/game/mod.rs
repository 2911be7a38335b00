//! Game engine
//!
//! The state machine that turns key presses into guesses, verdicts and a
//! win/loss outcome.

mod engine;
mod key;
mod state;

pub use engine::WordleEngine;
pub use key::Key;
pub use state::{GameState, GameStatus, InputOutcome, LOSS_MESSAGE, WIN_MESSAGE, transition};
