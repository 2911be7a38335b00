//! Main Wordle engine interface

use super::{GameState, InputOutcome, Key};
use crate::error::ConfigurationError;
use crate::wordlists::WordList;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Wordle game engine
///
/// Owns the candidate words, the random source used to draw targets and the
/// state of the current game. Presentation code reads [`WordleEngine::state`]
/// and drives the game through [`WordleEngine::handle_input`].
pub struct WordleEngine<R: Rng = StdRng> {
    words: WordList,
    max_attempts: usize,
    rng: R,
    state: GameState,
}

impl WordleEngine<StdRng> {
    /// Create an engine seeded from the operating system
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidSetting` if `max_attempts` is zero.
    pub fn new(words: WordList, max_attempts: usize) -> Result<Self, ConfigurationError> {
        Self::with_rng(words, max_attempts, StdRng::from_os_rng())
    }

    /// Create an engine whose targets are reproducible from `seed`
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidSetting` if `max_attempts` is zero.
    pub fn seeded(
        words: WordList,
        max_attempts: usize,
        seed: u64,
    ) -> Result<Self, ConfigurationError> {
        Self::with_rng(words, max_attempts, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> WordleEngine<R> {
    /// Create an engine with an injected random source and start the first game
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidSetting` if `max_attempts` is zero.
    pub fn with_rng(
        words: WordList,
        max_attempts: usize,
        mut rng: R,
    ) -> Result<Self, ConfigurationError> {
        if max_attempts == 0 {
            return Err(ConfigurationError::InvalidSetting {
                setting: "max_attempts",
            });
        }

        let state = GameState::new(words.pick(&mut rng), max_attempts);
        info!(
            word_length = words.word_length(),
            max_attempts,
            candidates = words.len(),
            "new game"
        );

        Ok(Self {
            words,
            max_attempts,
            rng,
            state,
        })
    }

    /// Apply one key press to the current game
    pub fn handle_input(&mut self, key: Key) -> InputOutcome {
        self.state.handle_input(key)
    }

    /// Type a whole word followed by Enter
    pub fn enter_word(&mut self, word: &str) -> InputOutcome {
        self.state.enter_word(word)
    }

    /// Throw away the current game and start a new one with a fresh target
    pub fn reset_game(&mut self) {
        self.state = GameState::new(self.words.pick(&mut self.rng), self.max_attempts);
        info!("game reset");
    }

    /// Read-only snapshot of the current game
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Take the current game out of the engine
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        self.state.has_won()
    }

    #[must_use]
    pub fn has_lost(&self) -> bool {
        self.state.has_lost()
    }

    #[must_use]
    pub fn is_valid_guess(&self, guess: &str) -> bool {
        self.state.is_valid_guess(guess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;

    fn words(list: &[&str]) -> WordList {
        WordList::new(list, 5).unwrap()
    }

    #[test]
    fn new_engine_starts_in_progress() {
        let engine = WordleEngine::seeded(words(&["crane"]), 6, 1).unwrap();
        let state = engine.state();
        assert_eq!(state.target().text(), "CRANE");
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.word_length(), 5);
        assert_eq!(state.max_attempts(), 6);
    }

    #[test]
    fn zero_attempts_is_a_configuration_error() {
        let result = WordleEngine::seeded(words(&["crane"]), 0, 1);
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidSetting {
                setting: "max_attempts"
            })
        ));
    }

    #[test]
    fn same_seed_same_targets() {
        let list = words(&["crane", "slate", "irate", "apple", "grate"]);
        let mut a = WordleEngine::seeded(list.clone(), 6, 99).unwrap();
        let mut b = WordleEngine::seeded(list, 6, 99).unwrap();

        for _ in 0..5 {
            assert_eq!(a.state().target(), b.state().target());
            a.reset_game();
            b.reset_game();
        }
    }

    #[test]
    fn reset_replaces_whole_state() {
        let mut engine = WordleEngine::seeded(words(&["crane"]), 6, 3).unwrap();
        engine.enter_word("crane");
        assert!(engine.has_won());

        engine.reset_game();
        let state = engine.state();
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(state.guesses().is_empty());
        assert!(state.knowledge().is_empty());
        assert_eq!(state.message(), "");
    }

    #[test]
    fn input_is_forwarded_to_state() {
        let mut engine = WordleEngine::seeded(words(&["crane"]), 6, 3).unwrap();
        assert_eq!(engine.handle_input(Key::Letter('S')), InputOutcome::Edited);
        assert_eq!(engine.state().buffer(), "S");
        assert!(engine.is_valid_guess("slate"));
        assert!(!engine.has_lost());
    }

    #[test]
    fn into_state_hands_over_the_game() {
        let mut engine = WordleEngine::seeded(words(&["crane"]), 6, 3).unwrap();
        engine.enter_word("slate");
        let state = engine.into_state();
        assert_eq!(state.guesses().len(), 1);
    }

    #[test]
    fn engine_accepts_any_rng() {
        let engine =
            WordleEngine::with_rng(words(&["crane", "slate"]), 6, rand::rng()).unwrap();
        assert!(engine.words().contains(engine.state().target()));
    }
}
