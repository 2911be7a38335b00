//! Core domain types for Wordle
//!
//! This module contains the pure scoring logic: words, per-letter verdicts and
//! cumulative letter knowledge. Nothing here holds game state.

mod knowledge;
mod verdict;
mod word;

pub use knowledge::{LetterKnowledge, aggregate};
pub use verdict::{LetterVerdict, score, score_guess};
pub use word::{Word, WordError};
