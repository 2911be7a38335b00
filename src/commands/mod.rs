//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::run_simple;
pub use simulate::{SimulationConfig, SimulationResult, play_random_game, run_simulation};
