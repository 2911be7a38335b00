//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Statistics, run_tui};
pub use rendering::{board_lines, distribution_lines, verdict_style};
