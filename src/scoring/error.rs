//! Errors raised while building tables or scoring words

use thiserror::Error;

/// Input-validation failures for the frequency tables and the scorer
///
/// None of these are recoverable inside a run; the caller reports the error
/// and emits no scores.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// No answers to build tables from (positional frequencies would divide by zero)
    #[error("answer set is empty")]
    EmptyAnswerSet,

    /// An answer whose length differs from the first answer's
    #[error("answer '{word}' has {found} letters, expected {expected}")]
    InvalidInput {
        word: String,
        expected: usize,
        found: usize,
    },

    /// A dictionary word whose length differs from the answer length
    #[error("dictionary word '{word}' has {found} letters, answers have {expected}")]
    LengthMismatch {
        word: String,
        expected: usize,
        found: usize,
    },

    #[error("scale factor must be finite and positive, got {0}")]
    InvalidScaleFactor(f64),
}
