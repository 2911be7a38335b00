//! Simulation command
//!
//! Plays many independent games with a random guesser. Each game owns its own
//! state and its own seeded RNG, so games run in parallel and a given seed
//! always produces the same result.

use crate::game::GameState;
use crate::wordlists::WordList;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    pub max_attempts: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            max_attempts: 6,
            seed,
            show_progress: false,
        }
    }
}

/// Result of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub max_attempts: usize,
    /// Number of winning games per guess count
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    /// Mean number of guesses over won games, `None` if nothing was won
    #[must_use]
    pub fn average_guesses_to_win(&self) -> Option<f64> {
        if self.wins == 0 {
            return None;
        }
        let total: usize = self
            .distribution
            .iter()
            .map(|(&n, &count)| n * count)
            .sum();
        Some(total as f64 / self.wins as f64)
    }
}

/// Play one game to completion, guessing uniformly from the word list
///
/// Returns the finished game.
#[must_use]
pub fn play_random_game(words: &WordList, max_attempts: usize, seed: u64) -> GameState {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::new(words.pick(&mut rng), max_attempts);

    while !state.is_over() {
        let guess = words.pick(&mut rng);
        state.enter_word(guess.text());
    }

    state
}

/// Run `config.games` random games in parallel
#[must_use]
pub fn run_simulation(words: &WordList, config: &SimulationConfig) -> SimulationResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    // Guesses used by each game, `None` for a loss
    let outcomes: Vec<Option<usize>> = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let state = play_random_game(
                words,
                config.max_attempts,
                config.seed.wrapping_add(i as u64),
            );
            pb.inc(1);
            state.has_won().then(|| state.guesses().len())
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for guesses in outcomes.iter().flatten() {
        *distribution.entry(*guesses).or_insert(0) += 1;
    }
    let wins = distribution.values().sum();

    let result = SimulationResult {
        games: config.games,
        wins,
        losses: config.games - wins,
        max_attempts: config.max_attempts,
        distribution,
        duration: start.elapsed(),
    };
    info!(
        games = result.games,
        wins = result.wins,
        "simulation finished"
    );
    result
}
