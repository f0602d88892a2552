//! Word lists for likelihood scoring
//!
//! Provides embedded word lists compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, DICTIONARY, DICTIONARY_COUNT};
