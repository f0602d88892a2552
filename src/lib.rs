//! Wordle Likelihood
//!
//! Scores dictionary words by how likely they are to be a Wordle answer, using
//! the letter-position frequencies of a known answer list.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_likelihood::core::Word;
//! use wordle_likelihood::scoring::{FrequencyTable, Scorer};
//!
//! let answers = [Word::new("abcde").unwrap(), Word::new("abcdf").unwrap()];
//! let table = FrequencyTable::build(&answers).unwrap();
//! let scorer = Scorer::with_default_scale(&table);
//!
//! let score = scorer.score(&Word::new("abcde").unwrap()).unwrap();
//! assert_eq!(score, 5_000_000.0);
//! ```

// Core domain types
pub mod core;

// Frequency tables and scoring
pub mod scoring;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// CSV reports and terminal output
pub mod output;
