//! Per-letter verdicts and the letter scorer
//!
//! A verdict is the feedback for one letter of a guess at one position:
//! - `Correct` - the target has this letter at this position
//! - `WrongPosition` - the target has this letter somewhere else
//! - `Wrong` - the target does not contain this letter
//! - `Empty` - no letter was scored
//!
//! The scorer does not consume matched letters: a letter that appears once in
//! the target is reported as `WrongPosition` at every misplaced occurrence in
//! the guess.

use super::Word;

/// Feedback for a single letter of a guess
///
/// Variants are declared from least to most informative, so the derived
/// ordering is the merge order `Correct > WrongPosition > Wrong > Empty`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterVerdict {
    #[default]
    Empty,
    Wrong,
    WrongPosition,
    Correct,
}

impl LetterVerdict {
    /// Merge priority (higher is more informative)
    #[inline]
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Empty => 1,
            Self::Wrong => 2,
            Self::WrongPosition => 3,
            Self::Correct => 4,
        }
    }

    /// True when `self` should replace `other` in letter knowledge
    #[inline]
    #[must_use]
    pub const fn is_more_informative_than(self, other: Self) -> bool {
        self.priority() > other.priority()
    }
}

/// Score a single letter of a guess against the target
///
/// `None` or a whitespace byte is a blank letter and scores `Empty`.
///
/// # Examples
/// ```
/// use wordle_game::core::{score, LetterVerdict, Word};
///
/// let target = Word::new("crane").unwrap();
/// assert_eq!(score(&target, Some(b'C'), 0), LetterVerdict::Correct);
/// assert_eq!(score(&target, Some(b'E'), 0), LetterVerdict::WrongPosition);
/// assert_eq!(score(&target, Some(b'Z'), 0), LetterVerdict::Wrong);
/// assert_eq!(score(&target, None, 0), LetterVerdict::Empty);
/// ```
#[must_use]
pub fn score(target: &Word, letter: Option<u8>, position: usize) -> LetterVerdict {
    let Some(letter) = letter.filter(|c| !c.is_ascii_whitespace()) else {
        return LetterVerdict::Empty;
    };

    if target.char_at(position) == Some(letter) {
        LetterVerdict::Correct
    } else if target.has_letter(letter) {
        LetterVerdict::WrongPosition
    } else {
        LetterVerdict::Wrong
    }
}

/// Score every position of `guess` against `target`
///
/// Always yields `target.len()` verdicts; positions past the end of a short
/// guess are `Empty`.
#[must_use]
pub fn score_guess(target: &Word, guess: &Word) -> Vec<LetterVerdict> {
    (0..target.len())
        .map(|i| score(target, guess.char_at(i), i))
        .collect()
}
