//! Likelihood scoring of dictionary words
//!
//! A word's score is the product of its positional letter frequencies,
//! multiplied by a display scale factor:
//!
//! score(w) = scale * Π (count(p, w[p]) / answers)
//!
//! The scale keeps numbers readable and has no probabilistic meaning; scores
//! across a dictionary do not sum to anything in particular.

use super::{FrequencyTable, ScoreError};
use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Scale applied to raw frequency products unless configured otherwise
pub const DEFAULT_SCALE_FACTOR: f64 = 10_000_000.0;

/// Scores words against a borrowed frequency table
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    table: &'a FrequencyTable,
    scale_factor: f64,
}

impl<'a> Scorer<'a> {
    /// Create a scorer over `table`
    ///
    /// # Errors
    /// Returns `ScoreError::InvalidScaleFactor` unless `scale_factor` is finite and > 0.
    pub fn new(table: &'a FrequencyTable, scale_factor: f64) -> Result<Self, ScoreError> {
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return Err(ScoreError::InvalidScaleFactor(scale_factor));
        }

        Ok(Self {
            table,
            scale_factor,
        })
    }

    /// Create a scorer using `DEFAULT_SCALE_FACTOR`
    #[must_use]
    pub const fn with_default_scale(table: &'a FrequencyTable) -> Self {
        Self {
            table,
            scale_factor: DEFAULT_SCALE_FACTOR,
        }
    }

    /// Multiplier applied to every raw frequency product
    #[inline]
    #[must_use]
    pub const fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Score a single word
    ///
    /// Returns exactly 0.0 when any letter never occurs at its position in the
    /// answer set.
    ///
    /// # Errors
    /// Returns `ScoreError::LengthMismatch` if the word length differs from the
    /// answer length.
    ///
    /// # Examples
    /// ```
    /// use wordle_likelihood::core::Word;
    /// use wordle_likelihood::scoring::{FrequencyTable, Scorer};
    ///
    /// let answers = [Word::new("abcde").unwrap(), Word::new("abcdf").unwrap()];
    /// let table = FrequencyTable::build(&answers).unwrap();
    /// let scorer = Scorer::with_default_scale(&table);
    ///
    /// assert_eq!(scorer.score(&Word::new("abcde").unwrap()).unwrap(), 5_000_000.0);
    /// assert_eq!(scorer.score(&Word::new("abcdz").unwrap()).unwrap(), 0.0);
    /// assert!(scorer.score(&Word::new("abc").unwrap()).is_err());
    /// ```
    pub fn score(&self, word: &Word) -> Result<f64, ScoreError> {
        self.check_length(word)?;
        Ok(self.score_unchecked(word))
    }

    /// Score every dictionary word, in dictionary order
    ///
    /// Lengths are validated for the whole dictionary before any score is
    /// computed, so a failure never yields a partial table. Repeated words keep
    /// their first position and take the last score written.
    ///
    /// # Errors
    /// Returns `ScoreError::LengthMismatch` for the first word (in dictionary
    /// order) whose length differs from the answer length.
    pub fn score_all(&self, dictionary: &[Word]) -> Result<ScoreTable, ScoreError> {
        dictionary
            .iter()
            .try_for_each(|word| self.check_length(word))?;

        let scores: Vec<f64> = dictionary
            .par_iter()
            .map(|word| self.score_unchecked(word))
            .collect();

        let mut table = ScoreTable::with_capacity(dictionary.len());
        for (word, score) in dictionary.iter().zip(scores) {
            if table.insert(word.text(), score) {
                debug!(word = word.text(), "duplicate dictionary word, score overwritten");
            }
        }

        debug!(
            dictionary = dictionary.len(),
            scored = table.len(),
            "scored dictionary"
        );

        Ok(table)
    }

    fn check_length(&self, word: &Word) -> Result<(), ScoreError> {
        let expected = self.table.word_length();
        if word.len() == expected {
            Ok(())
        } else {
            Err(ScoreError::LengthMismatch {
                word: word.text().to_string(),
                expected,
                found: word.len(),
            })
        }
    }

    /// Caller guarantees `word.len() == table.word_length()`
    fn score_unchecked(&self, word: &Word) -> f64 {
        let probability: f64 = word
            .letters()
            .iter()
            .enumerate()
            .map(|(position, &letter)| self.table.frequency_at(position, letter))
            .product();

        probability * self.scale_factor
    }
}

/// Scores keyed by word, iterated in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    entries: Vec<(String, f64)>,
    index: FxHashMap<String, usize>,
}

impl ScoreTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(capacity);

        Self {
            entries: Vec::with_capacity(capacity),
            index,
        }
    }

    /// Insert or overwrite a score
    ///
    /// Returns true if `word` was already present. An overwritten word keeps
    /// its original position.
    pub fn insert(&mut self, word: &str, score: f64) -> bool {
        if let Some(&slot) = self.index.get(word) {
            self.entries[slot].1 = score;
            return true;
        }

        self.index.insert(word.to_string(), self.entries.len());
        self.entries.push((word.to_string(), score));
        false
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<f64> {
        self.index.get(word).map(|&slot| self.entries[slot].1)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(word, score)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(word, score)| (word.as_str(), *score))
    }
}
