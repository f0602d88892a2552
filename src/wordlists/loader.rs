//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Malformed entries are errors, never skipped.

use crate::core::{Word, WordError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for word list loading
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid word on line {line} of {}", .path.display())]
    InvalidWord {
        path: PathBuf,
        line: usize,
        #[source]
        source: WordError,
    },
}

/// Load words from a file, one per line
///
/// Blank lines are skipped and surrounding whitespace is trimmed.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or
/// `LoadError::InvalidWord` for the first line that is not a valid word.
///
/// # Examples
/// ```no_run
/// use wordle_likelihood::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_lines(&content).map_err(|(line, source)| LoadError::InvalidWord {
        path: path.to_path_buf(),
        line,
        source,
    })
}

/// Parse newline-separated words, returning the 1-based line of the first failure
fn parse_lines(content: &str) -> Result<Vec<Word>, (usize, WordError)> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, trimmed)| !trimmed.is_empty())
        .map(|(line, trimmed)| Word::new(trimmed).map_err(|e| (line, e)))
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Errors
///
/// Returns the `WordError` of the first malformed entry.
///
/// # Examples
/// ```
/// use wordle_likelihood::wordlists::loader::words_from_slice;
/// use wordle_likelihood::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS).unwrap();
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<Vec<Word>, WordError> {
    slice.iter().map(|&s| Word::new(s)).collect()
}
