//! Cumulative letter knowledge
//!
//! Folds every submitted guess into the best verdict seen so far for each
//! letter. The fold is rebuilt from the full guess list on every call, so the
//! result depends only on the target and the guesses.

use super::{LetterVerdict, Word, score};
use rustc_hash::FxHashMap;

/// Best-known verdict per letter across all guesses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterKnowledge {
    letters: FxHashMap<u8, LetterVerdict>,
}

impl LetterKnowledge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a verdict for a letter
    ///
    /// Inserts when the letter is unknown, otherwise replaces only when the new
    /// verdict is strictly more informative. Returns true if the map changed.
    pub fn merge(&mut self, letter: u8, verdict: LetterVerdict) -> bool {
        match self.letters.get_mut(&letter) {
            Some(current) if verdict.is_more_informative_than(*current) => {
                *current = verdict;
                true
            }
            Some(_) => false,
            None => {
                self.letters.insert(letter, verdict);
                true
            }
        }
    }

    /// Stored verdict for a letter, if it has appeared in any guess
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterVerdict> {
        self.letters.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Verdict for a keyboard key, `Empty` when the letter is unknown
    #[inline]
    #[must_use]
    pub fn verdict_for(&self, letter: char) -> LetterVerdict {
        u8::try_from(letter)
            .ok()
            .and_then(|c| self.get(c))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Iterate over known letters in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterVerdict)> + '_ {
        self.letters
            .iter()
            .map(|(&letter, &verdict)| (letter, verdict))
    }
}

/// Fold all guesses into per-letter knowledge
///
/// Scores every position of every guess against `target` and keeps the most
/// informative verdict per letter.
///
/// # Examples
/// ```
/// use wordle_game::core::{aggregate, LetterVerdict, Word};
///
/// let target = Word::new("crane").unwrap();
/// let guesses = [Word::new("spoon").unwrap(), Word::new("nymph").unwrap()];
/// let knowledge = aggregate(&target, &guesses);
///
/// assert_eq!(knowledge.get(b'N'), Some(LetterVerdict::WrongPosition));
/// assert_eq!(knowledge.get(b'S'), Some(LetterVerdict::Wrong));
/// ```
#[must_use]
pub fn aggregate(target: &Word, guesses: &[Word]) -> LetterKnowledge {
    let mut knowledge = LetterKnowledge::new();

    for guess in guesses {
        for i in 0..target.len() {
            if let Some(letter) = guess.char_at(i) {
                knowledge.merge(letter, score(target, Some(letter), i));
            }
        }
    }

    knowledge
}
