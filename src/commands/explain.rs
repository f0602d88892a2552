//! Word explanation command
//!
//! Breaks a single word's score down into its per-position frequencies.

use crate::core::Word;
use crate::scoring::{FrequencyTable, ScoreError, Scorer};

/// Frequency of one letter of the explained word at its position
#[derive(Debug, Clone, PartialEq)]
pub struct PositionDetail {
    /// Zero-based position
    pub position: usize,
    pub letter: char,
    /// Answers with this letter at this position
    pub count: usize,
    pub frequency: f64,
    /// Share of all answer letters that are this letter, any position
    pub overall_frequency: f64,
}

/// Result of explaining a word's score
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub word: String,
    pub positions: Vec<PositionDetail>,
    pub score: f64,
    pub scale_factor: f64,
    pub answer_count: usize,
    pub is_answer: bool,
}

impl Explanation {
    /// Positions whose letter never occurs there in the answers
    pub fn zero_positions(&self) -> impl Iterator<Item = &PositionDetail> {
        self.positions.iter().filter(|detail| detail.count == 0)
    }
}

/// Explain the score of `word` against `answers`
///
/// # Errors
///
/// Returns `ScoreError` under the same conditions as scoring a dictionary:
/// empty or mixed-length answers, a word of the wrong length, or a bad scale.
pub fn explain_word(
    word: &Word,
    answers: &[Word],
    scale_factor: f64,
) -> Result<Explanation, ScoreError> {
    let table = FrequencyTable::build(answers)?;
    let scorer = Scorer::new(&table, scale_factor)?;
    let score = scorer.score(word)?;

    let positions = word
        .letters()
        .iter()
        .enumerate()
        .map(|(position, &letter)| PositionDetail {
            position,
            letter: char::from(letter),
            count: table.count_at(position, letter),
            frequency: table.frequency_at(position, letter),
            overall_frequency: table.letter_frequency(letter),
        })
        .collect();

    Ok(Explanation {
        word: word.text().to_string(),
        positions,
        score,
        scale_factor: scorer.scale_factor(),
        answer_count: table.answer_count(),
        is_answer: answers.contains(word),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::DEFAULT_SCALE_FACTOR;
    use crate::wordlists::loader::words_from_slice;

    fn answers() -> Vec<Word> {
        words_from_slice(&["abcde", "abcdf"]).unwrap()
    }

    #[test]
    fn explains_each_position() {
        let word = Word::new("abcde").unwrap();
        let explanation = explain_word(&word, &answers(), DEFAULT_SCALE_FACTOR).unwrap();

        assert_eq!(explanation.word, "abcde");
        assert_eq!(explanation.positions.len(), 5);
        assert_eq!(explanation.positions[0].letter, 'a');
        assert_eq!(explanation.positions[0].count, 2);
        assert_eq!(explanation.positions[4].count, 1);
        assert!((explanation.positions[4].frequency - 0.5).abs() < f64::EPSILON);
        assert!((explanation.positions[4].overall_frequency - 0.1).abs() < f64::EPSILON);
        assert!((explanation.score - 5_000_000.0).abs() < f64::EPSILON);
        assert_eq!(explanation.answer_count, 2);
        assert!(explanation.is_answer);
    }

    #[test]
    fn flags_zero_positions() {
        let word = Word::new("zbcdz").unwrap();
        let explanation = explain_word(&word, &answers(), DEFAULT_SCALE_FACTOR).unwrap();

        let zeros: Vec<usize> = explanation.zero_positions().map(|d| d.position).collect();
        assert_eq!(zeros, vec![0, 4]);
        assert!(explanation.score == 0.0);
        assert!(!explanation.is_answer);
    }

    #[test]
    fn reports_configured_scale() {
        let word = Word::new("abcde").unwrap();
        let explanation = explain_word(&word, &answers(), 250.0).unwrap();

        assert!((explanation.scale_factor - 250.0).abs() < f64::EPSILON);
        assert!((explanation.score - 125.0).abs() < f64::EPSILON);
    }

    #[test]
    fn wrong_length_fails() {
        let word = Word::new("abc").unwrap();
        let result = explain_word(&word, &answers(), DEFAULT_SCALE_FACTOR);
        assert!(matches!(result, Err(ScoreError::LengthMismatch { .. })));
    }
}
