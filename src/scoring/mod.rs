//! Positional frequency scoring
//!
//! Build a `FrequencyTable` from the answers once, then borrow it from a
//! `Scorer` to score any number of dictionary words.

mod error;
mod frequency;
mod scorer;

pub use error::ScoreError;
pub use frequency::FrequencyTable;
pub use scorer::{DEFAULT_SCALE_FACTOR, ScoreTable, Scorer};
