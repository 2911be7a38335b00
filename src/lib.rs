//! Wordle Game
//!
//! A Wordle clone: a hidden word, a fixed number of guesses, per-letter
//! feedback and a running summary of what is known about each letter.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::game::{GameStatus, Key, WordleEngine};
//! use wordle_game::wordlists::WordList;
//!
//! let words = WordList::new(&["crane"], 5).unwrap();
//! let mut engine = WordleEngine::seeded(words, 6, 42).unwrap();
//!
//! for c in "CRANE".chars() {
//!     engine.handle_input(Key::Letter(c));
//! }
//! engine.handle_input(Key::Enter);
//!
//! assert_eq!(engine.state().status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Settings file
pub mod config;

// Startup errors
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
