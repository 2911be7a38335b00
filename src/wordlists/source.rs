//! Target word selection
//!
//! A `WordList` is a validated, non-empty list of same-length words. Target
//! selection is a uniform draw from an injected random number generator.

use crate::core::Word;
use crate::error::ConfigurationError;
use rand::Rng;
use tracing::debug;

/// Validated candidate words, all exactly `word_length` letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
    word_length: usize,
}

impl WordList {
    /// Validate entries into a word list
    ///
    /// Entries are trimmed and uppercased. Every entry must be an ASCII word of
    /// exactly `word_length` letters.
    ///
    /// # Errors
    ///
    /// - `InvalidSetting` if `word_length` is zero
    /// - `InvalidWord` if an entry contains anything other than letters
    /// - `LengthMismatch` if an entry has the wrong length
    /// - `EmptyWordList` if there are no entries
    pub fn new<S: AsRef<str>>(
        entries: &[S],
        word_length: usize,
    ) -> Result<Self, ConfigurationError> {
        if word_length == 0 {
            return Err(ConfigurationError::InvalidSetting {
                setting: "word_length",
            });
        }

        let words = entries
            .iter()
            .map(|entry| {
                let entry = entry.as_ref().trim();
                let word = Word::new(entry).map_err(|source| ConfigurationError::InvalidWord {
                    word: entry.to_string(),
                    source,
                })?;
                if word.len() != word_length {
                    return Err(ConfigurationError::LengthMismatch {
                        word: word.text().to_string(),
                        expected: word_length,
                        actual: word.len(),
                    });
                }
                Ok(word)
            })
            .collect::<Result<Vec<_>, _>>()?;

        if words.is_empty() {
            return Err(ConfigurationError::EmptyWordList);
        }

        Ok(Self { words, word_length })
    }

    /// Draw one word uniformly at random
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Word {
        // Non-empty by construction
        let index = rng.random_range(0..self.words.len());
        let word = self.words[index].clone();
        debug!(index, "picked target word");
        word
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; a word list cannot be constructed empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

/// Pick a target word from raw entries
///
/// # Errors
///
/// Fails with a `ConfigurationError` if the list is empty or any entry is not a
/// `word_length`-letter word.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_game::wordlists::pick_target;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let target = pick_target(&["crane", "slate"], 5, &mut rng).unwrap();
/// assert!(target.text() == "CRANE" || target.text() == "SLATE");
///
/// assert!(pick_target::<&str, _>(&[], 5, &mut rng).is_err());
/// ```
pub fn pick_target<S: AsRef<str>, R: Rng>(
    word_list: &[S],
    word_length: usize,
    rng: &mut R,
) -> Result<Word, ConfigurationError> {
    Ok(WordList::new(word_list, word_length)?.pick(rng))
}
