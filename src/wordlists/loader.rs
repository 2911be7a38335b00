//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::WordList;
use crate::error::ConfigurationError;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load raw entries from a file
///
/// One word per line; blank lines and lines starting with `#` are skipped.
/// Entries are not validated here, [`WordList::new`] does that.
///
/// # Errors
///
/// Returns `ConfigurationError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ConfigurationError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    info!(path = %path.display(), count = entries.len(), "loaded word list");
    Ok(entries)
}

/// Validate a static slice into a word list
///
/// # Errors
///
/// Same as [`WordList::new`].
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS, 5).unwrap();
/// assert_eq!(words.len(), WORDS.len());
/// ```
pub fn words_from_slice(
    slice: &[&str],
    word_length: usize,
) -> Result<WordList, ConfigurationError> {
    WordList::new(slice, word_length)
}

/// Load and validate a word list file in one step
///
/// # Errors
///
/// Returns an I/O error for an unreadable file, otherwise the same errors as
/// [`WordList::new`].
pub fn word_list_from_file<P: AsRef<Path>>(
    path: P,
    word_length: usize,
) -> Result<WordList, ConfigurationError> {
    let entries = load_from_file(path)?;
    WordList::new(&entries, word_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_skips_blank_and_comment_lines() {
        let file = write_temp("# five letters\ncrane\n\n  slate  \n#irate\n");
        let entries = load_from_file(file.path()).unwrap();
        assert_eq!(entries, vec!["crane", "slate"]);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(ConfigurationError::Io { .. })));
    }

    #[test]
    fn word_list_from_file_validates_entries() {
        let file = write_temp("crane\nslates\n");
        let result = word_list_from_file(file.path(), 5);
        assert!(matches!(
            result,
            Err(ConfigurationError::LengthMismatch { actual: 6, .. })
        ));
    }

    #[test]
    fn word_list_from_file_with_custom_length() {
        let file = write_temp("pumpkin\nkitchen\n");
        let words = word_list_from_file(file.path(), 7).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words.word_length(), 7);
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"], 5).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn words_from_slice_empty() {
        assert!(matches!(
            words_from_slice(&[], 5),
            Err(ConfigurationError::EmptyWordList)
        ));
    }
}
