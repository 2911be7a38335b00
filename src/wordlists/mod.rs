//! Word lists and target selection
//!
//! Provides the embedded word list compiled into the binary and the
//! `WordList` type that validates candidates and draws targets.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{WordList, pick_target};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid_five_letter_words() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_have_no_duplicates() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn embedded_list_builds_a_word_list() {
        let list = WordList::new(WORDS, 5).unwrap();
        assert_eq!(list.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_list_rejects_other_lengths() {
        assert!(WordList::new(WORDS, 6).is_err());
    }
}
