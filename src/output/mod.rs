//! Terminal output formatting
//!
//! Display utilities for the text front end and command results.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_over, print_keyboard, print_simulation_result};
