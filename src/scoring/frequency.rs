//! Positional letter-frequency tables
//!
//! Built once from the answer set, then read-only.

use super::ScoreError;
use crate::core::Word;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Letter counts per position, plus overall letter counts, for an answer set
///
/// # Invariants
/// - Every answer has `word_length` letters
/// - For each position, the counts sum to `answer_count`
/// - The letter counts sum to `answer_count * word_length`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    word_length: usize,
    answer_count: usize,
    positions: Vec<FxHashMap<u8, usize>>,
    letters: FxHashMap<u8, usize>,
}

impl FrequencyTable {
    /// Build the tables from an answer set
    ///
    /// The word length is taken from the first answer.
    ///
    /// # Errors
    /// - `ScoreError::EmptyAnswerSet` if `answers` is empty
    /// - `ScoreError::InvalidInput` for the first answer whose length differs
    ///   from the first answer's
    ///
    /// # Examples
    /// ```
    /// use wordle_likelihood::core::Word;
    /// use wordle_likelihood::scoring::FrequencyTable;
    ///
    /// let answers = [Word::new("abcde").unwrap(), Word::new("abcdf").unwrap()];
    /// let table = FrequencyTable::build(&answers).unwrap();
    ///
    /// assert_eq!(table.word_length(), 5);
    /// assert_eq!(table.count_at(0, b'a'), 2);
    /// assert_eq!(table.count_at(4, b'e'), 1);
    /// assert_eq!(table.count_at(4, b'z'), 0);
    /// ```
    pub fn build(answers: &[Word]) -> Result<Self, ScoreError> {
        let first = answers.first().ok_or(ScoreError::EmptyAnswerSet)?;
        let word_length = first.len();

        let mut positions: Vec<FxHashMap<u8, usize>> = vec![FxHashMap::default(); word_length];
        let mut letters: FxHashMap<u8, usize> = FxHashMap::default();

        for answer in answers {
            if answer.len() != word_length {
                return Err(ScoreError::InvalidInput {
                    word: answer.text().to_string(),
                    expected: word_length,
                    found: answer.len(),
                });
            }

            for (counts, &letter) in positions.iter_mut().zip(answer.letters()) {
                *counts.entry(letter).or_insert(0) += 1;
                *letters.entry(letter).or_insert(0) += 1;
            }
        }

        debug!(
            answers = answers.len(),
            word_length,
            distinct_letters = letters.len(),
            "built frequency tables"
        );

        Ok(Self {
            word_length,
            answer_count: answers.len(),
            positions,
            letters,
        })
    }

    /// Length every answer (and every scored word) must have
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of answers the tables were built from (always > 0)
    #[inline]
    #[must_use]
    pub const fn answer_count(&self) -> usize {
        self.answer_count
    }

    /// Total letter samples: `answer_count * word_length`
    #[inline]
    #[must_use]
    pub const fn total_letters(&self) -> usize {
        self.answer_count * self.word_length
    }

    /// How many answers have `letter` at `position`
    ///
    /// Absent entries, including positions past the word length, count as 0.
    #[must_use]
    pub fn count_at(&self, position: usize, letter: u8) -> usize {
        self.positions
            .get(position)
            .and_then(|counts| counts.get(&letter))
            .copied()
            .unwrap_or(0)
    }

    /// Fraction of answers with `letter` at `position`, in `[0, 1]`
    #[must_use]
    pub fn frequency_at(&self, position: usize, letter: u8) -> f64 {
        self.count_at(position, letter) as f64 / self.answer_count as f64
    }

    /// Occurrences of `letter` across all positions of all answers
    #[must_use]
    pub fn letter_count(&self, letter: u8) -> usize {
        self.letters.get(&letter).copied().unwrap_or(0)
    }

    /// Share of all letter samples that are `letter`, in `[0, 1]`
    #[must_use]
    pub fn letter_frequency(&self, letter: u8) -> f64 {
        self.letter_count(letter) as f64 / self.total_letters() as f64
    }

    /// Observed `(letter, count)` pairs at `position`, letters ascending
    ///
    /// Empty for positions past the word length.
    #[must_use]
    pub fn position_counts(&self, position: usize) -> Vec<(u8, usize)> {
        self.positions
            .get(position)
            .map(sorted_counts)
            .unwrap_or_default()
    }

    /// Observed `(letter, count)` pairs over all positions, letters ascending
    #[must_use]
    pub fn letter_counts(&self) -> Vec<(u8, usize)> {
        sorted_counts(&self.letters)
    }
}

fn sorted_counts(counts: &FxHashMap<u8, usize>) -> Vec<(u8, usize)> {
    let mut pairs: Vec<(u8, usize)> = counts.iter().map(|(&l, &c)| (l, c)).collect();
    pairs.sort_unstable_by_key(|&(letter, _)| letter);
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn builds_position_table() {
        let table = FrequencyTable::build(&words(&["abcde", "abcdf"])).unwrap();

        assert_eq!(table.word_length(), 5);
        assert_eq!(table.answer_count(), 2);
        assert_eq!(table.position_counts(0), vec![(b'a', 2)]);
        assert_eq!(table.position_counts(3), vec![(b'd', 2)]);
        assert_eq!(table.position_counts(4), vec![(b'e', 1), (b'f', 1)]);
    }

    #[test]
    fn positions_sum_to_answer_count() {
        let answers = words(&["crane", "slate", "irate", "trace", "speed", "aaaaa"]);
        let table = FrequencyTable::build(&answers).unwrap();

        for position in 0..table.word_length() {
            let sum: usize = table.position_counts(position).iter().map(|&(_, c)| c).sum();
            assert_eq!(sum, answers.len(), "position {position}");
        }
    }

    #[test]
    fn letters_sum_to_total_samples() {
        let answers = words(&["crane", "slate", "speed"]);
        let table = FrequencyTable::build(&answers).unwrap();

        let sum: usize = table.letter_counts().iter().map(|&(_, c)| c).sum();
        assert_eq!(sum, 15);
        assert_eq!(table.total_letters(), 15);
        assert_eq!(table.letter_count(b'e'), 4);
        assert!((table.letter_frequency(b'e') - 4.0 / 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn build_is_deterministic() {
        let answers = words(&["crane", "slate", "irate", "trace"]);
        let first = FrequencyTable::build(&answers).unwrap();
        let second = FrequencyTable::build(&answers).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_entries_read_as_zero() {
        let table = FrequencyTable::build(&words(&["abcde"])).unwrap();

        assert_eq!(table.count_at(0, b'z'), 0);
        assert_eq!(table.count_at(99, b'a'), 0);
        assert!(table.frequency_at(1, b'q').abs() < f64::EPSILON);
        assert_eq!(table.letter_count(b'z'), 0);
        assert!(table.position_counts(99).is_empty());
    }

    #[test]
    fn word_length_follows_answers() {
        let table = FrequencyTable::build(&words(&["abc", "abd", "xyz"])).unwrap();
        assert_eq!(table.word_length(), 3);
        assert_eq!(table.total_letters(), 9);
    }

    #[test]
    fn empty_answers_rejected() {
        assert_eq!(FrequencyTable::build(&[]), Err(ScoreError::EmptyAnswerSet));
    }

    #[test]
    fn mixed_lengths_rejected() {
        let result = FrequencyTable::build(&words(&["abcde", "abcd", "abcdef"]));
        assert_eq!(
            result,
            Err(ScoreError::InvalidInput {
                word: "abcd".to_string(),
                expected: 5,
                found: 4,
            })
        );
    }
}
