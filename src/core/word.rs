//! Word representation
//!
//! A Word is a non-empty run of lowercase ASCII letters. Its length is not fixed
//! here; the working length comes from the answer set the tables are built from.

use std::fmt;
use thiserror::Error;

/// A lowercase ASCII word of any non-zero length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for malformed words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word '{0}' must contain only ASCII letters")]
    NonAscii(String),
    #[error("word '{0}' contains invalid characters")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lower-cased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_likelihood::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii(text));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_length_is_not_fixed() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("abcdefgh").unwrap().len(), 8);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("cran3"),
            Err(WordError::InvalidCharacters(_))
        ));
        assert!(Word::new("cran ").is_err()); // Space
        assert!(Word::new("cran!").is_err()); // Punctuation
    }

    #[test]
    fn word_creation_non_ascii() {
        assert!(matches!(Word::new("crène"), Err(WordError::NonAscii(_))));
    }

    #[test]
    fn word_error_names_word() {
        let err = Word::new("ab1de").unwrap_err();
        assert_eq!(err.to_string(), "word 'ab1de' contains invalid characters");
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("CRANE").unwrap();
        let word3 = Word::new("slate").unwrap();

        assert_eq!(word1, word2); // Case insensitive
        assert_ne!(word1, word3);
    }
}
