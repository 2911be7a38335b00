//! Game state and the input state machine
//!
//! `GameState` is a plain owned value. All mutation goes through
//! [`GameState::handle_input`]; everything else is a read-only projection.

use super::Key;
use crate::core::{LetterKnowledge, LetterVerdict, Word, aggregate, score_guess};
use tracing::{debug, info, trace};

/// Terminal message shown after a win
pub const WIN_MESSAGE: &str = "You won!";
/// Terminal message shown after a loss
pub const LOSS_MESSAGE: &str = "You lost!";

/// Where the game stands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// What a single key press did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Nothing changed
    Ignored,
    /// The current buffer gained or lost a letter
    Edited,
    /// The buffer was committed as a guess
    Submitted,
}

/// Complete state of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target: Word,
    guesses: Vec<Word>,
    buffer: String,
    max_attempts: usize,
    word_length: usize,
    verdicts: Vec<Vec<LetterVerdict>>,
    knowledge: LetterKnowledge,
    status: GameStatus,
    message: String,
}

impl GameState {
    /// Start a fresh game for `target`
    ///
    /// The word length is taken from the target.
    #[must_use]
    pub fn new(target: Word, max_attempts: usize) -> Self {
        let word_length = target.len();
        Self {
            target,
            guesses: Vec::new(),
            buffer: String::with_capacity(word_length),
            max_attempts,
            word_length,
            verdicts: Vec::new(),
            knowledge: LetterKnowledge::new(),
            status: GameStatus::InProgress,
            message: String::new(),
        }
    }

    /// Apply one key press
    ///
    /// Once the game is won or lost every key is ignored. Backspace on an empty
    /// buffer, a letter on a full buffer and Enter on a partial buffer are all
    /// ignored and leave the state untouched.
    pub fn handle_input(&mut self, key: Key) -> InputOutcome {
        if self.status.is_terminal() {
            trace!(%key, "input ignored, game is over");
            return InputOutcome::Ignored;
        }

        match key {
            Key::Backspace => {
                if self.buffer.pop().is_some() {
                    InputOutcome::Edited
                } else {
                    InputOutcome::Ignored
                }
            }
            Key::Enter => self.submit(),
            Key::Letter(_) => match key.as_letter() {
                Some(c) if self.buffer.len() < self.word_length => {
                    self.buffer.push(c);
                    InputOutcome::Edited
                }
                _ => {
                    trace!(%key, buffer = %self.buffer, "letter ignored");
                    InputOutcome::Ignored
                }
            },
        }
    }

    /// Type a whole word and press Enter
    ///
    /// Convenience for line-based front ends. The word is only typed when the
    /// buffer is empty and `word` is exactly `word_length` ASCII letters;
    /// anything else is ignored and leaves the state untouched.
    pub fn enter_word(&mut self, word: &str) -> InputOutcome {
        let acceptable = self.buffer.is_empty()
            && self.is_valid_guess(word)
            && word.chars().all(|c| c.is_ascii_alphabetic());
        if self.status.is_terminal() || !acceptable {
            trace!(word, buffer = %self.buffer, "word ignored");
            return InputOutcome::Ignored;
        }

        for key in word.chars().filter_map(Key::letter) {
            self.handle_input(key);
        }
        self.handle_input(Key::Enter)
    }

    fn submit(&mut self) -> InputOutcome {
        if !self.is_valid_guess(&self.buffer) {
            trace!(buffer = %self.buffer, "submit ignored, incomplete guess");
            return InputOutcome::Ignored;
        }
        let Ok(guess) = Word::new(std::mem::take(&mut self.buffer)) else {
            return InputOutcome::Ignored;
        };

        self.guesses.push(guess);
        self.verdicts = self
            .guesses
            .iter()
            .map(|g| score_guess(&self.target, g))
            .collect();
        self.knowledge = aggregate(&self.target, &self.guesses);

        let attempt = self.guesses.len();
        debug!(
            attempt,
            max_attempts = self.max_attempts,
            guess = %self.guesses[attempt - 1],
            "guess submitted"
        );

        // Win is checked first so a correct final guess still wins
        if self.guesses[attempt - 1] == self.target {
            self.status = GameStatus::Won;
            self.message = WIN_MESSAGE.to_string();
            info!(attempts = attempt, "game won");
        } else if attempt >= self.max_attempts {
            self.status = GameStatus::Lost;
            self.message = LOSS_MESSAGE.to_string();
            info!(word = %self.target, "game lost");
        }

        InputOutcome::Submitted
    }

    /// A guess is valid when it has exactly `word_length` characters
    #[must_use]
    pub fn is_valid_guess(&self, guess: &str) -> bool {
        guess.chars().count() == self.word_length
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    #[must_use]
    pub fn has_lost(&self) -> bool {
        self.status == GameStatus::Lost
    }

    /// True once the game is won or lost
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// The hidden word; front ends should only show it once the game is over
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// Submitted guesses, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// The guess under construction
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Attempts left before the game is lost
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts.saturating_sub(self.guesses.len())
    }

    /// Verdicts for each submitted guess, parallel to [`GameState::guesses`]
    #[must_use]
    pub fn verdicts(&self) -> &[Vec<LetterVerdict>] {
        &self.verdicts
    }

    #[must_use]
    pub fn knowledge(&self) -> &LetterKnowledge {
        &self.knowledge
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Win or loss message, empty while the game is in progress
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Pure form of [`GameState::handle_input`]: consume a state, return the next one
#[must_use]
pub fn transition(mut state: GameState, key: Key) -> GameState {
    state.handle_input(key);
    state
}
