//! Formatting utilities for terminal output

use crate::core::LetterVerdict;
use crate::game::GameState;

/// Emoji square for a single verdict
#[must_use]
pub const fn verdict_emoji(verdict: LetterVerdict) -> char {
    match verdict {
        LetterVerdict::Correct => '🟩',
        LetterVerdict::WrongPosition => '🟨',
        LetterVerdict::Wrong => '⬛',
        LetterVerdict::Empty => '⬜',
    }
}

/// Format a row of verdicts as an emoji string
#[must_use]
pub fn verdicts_to_emoji(verdicts: &[LetterVerdict]) -> String {
    verdicts.iter().copied().map(verdict_emoji).collect()
}

/// Spoiler-free summary of a game: a score line followed by one emoji row per guess
///
/// The score is `X` for a lost game.
#[must_use]
pub fn share_grid(state: &GameState) -> String {
    let score = if state.has_won() {
        state.guesses().len().to_string()
    } else {
        "X".to_string()
    };

    let mut out = format!("Wordle {score}/{}\n", state.max_attempts());
    for row in state.verdicts() {
        out.push('\n');
        out.push_str(&verdicts_to_emoji(row));
    }
    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
