//! Dictionary scoring command
//!
//! Builds the frequency tables from the answers and scores every dictionary word.

use crate::core::Word;
use crate::scoring::{FrequencyTable, ScoreError, ScoreTable, Scorer};
use std::time::Instant;
use tracing::info;

/// Score `dictionary` against the letter-position frequencies of `answers`
///
/// # Errors
///
/// Returns `ScoreError` if the answer set is empty or of mixed length, if a
/// dictionary word's length differs from the answers', or if the scale factor
/// is not finite and positive. No scores are returned on error.
///
/// # Examples
/// ```
/// use wordle_likelihood::commands::score_dictionary;
/// use wordle_likelihood::wordlists::loader::words_from_slice;
///
/// let answers = words_from_slice(&["abcde", "abcdf"]).unwrap();
/// let dictionary = words_from_slice(&["abcde", "abcdz"]).unwrap();
///
/// let scores = score_dictionary(&answers, &dictionary, 10_000_000.0).unwrap();
/// assert_eq!(scores.get("abcde"), Some(5_000_000.0));
/// assert_eq!(scores.get("abcdz"), Some(0.0));
/// ```
pub fn score_dictionary(
    answers: &[Word],
    dictionary: &[Word],
    scale_factor: f64,
) -> Result<ScoreTable, ScoreError> {
    let start = Instant::now();

    let table = FrequencyTable::build(answers)?;
    let scorer = Scorer::new(&table, scale_factor)?;
    let scores = scorer.score_all(dictionary)?;

    let nonzero = scores.iter().filter(|&(_, score)| score > 0.0).count();
    info!(
        answers = table.answer_count(),
        words = scores.len(),
        nonzero,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "scored dictionary"
    );

    Ok(scores)
}
