//! Comma-separated reports
//!
//! Plain text only: these go to stdout and are meant for other tools, so no
//! colors and no re-ordering. Scores print with `f64`'s shortest round-trip
//! form, so whole numbers have no fractional part.

use crate::scoring::{FrequencyTable, ScoreTable};
use std::io::{self, Write};

/// Write `word,percentage` followed by one `word,score` line per entry
///
/// The `percentage` column holds scaled likelihood scores, not percentages.
///
/// # Errors
///
/// Returns any I/O error from `out`.
///
/// # Examples
/// ```
/// use wordle_likelihood::output::report::write_scores;
/// use wordle_likelihood::scoring::ScoreTable;
///
/// let mut scores = ScoreTable::new();
/// scores.insert("abcde", 5_000_000.0);
///
/// let mut out = Vec::new();
/// write_scores(&mut out, &scores).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "word,percentage\nabcde,5000000\n");
/// ```
pub fn write_scores<W: Write>(out: &mut W, scores: &ScoreTable) -> io::Result<()> {
    writeln!(out, "word,percentage")?;
    for (word, score) in scores.iter() {
        writeln!(out, "{word},{score}")?;
    }
    Ok(())
}

/// Write `pos,letter,occurrences,percentage` for every observed letter and position
///
/// Positions are 1-based; `percentage` is the share of answers with that
/// letter there.
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn write_positions<W: Write>(out: &mut W, table: &FrequencyTable) -> io::Result<()> {
    writeln!(out, "pos,letter,occurrences,percentage")?;
    for position in 0..table.word_length() {
        for (letter, count) in table.position_counts(position) {
            writeln!(
                out,
                "{},{},{count},{}",
                position + 1,
                char::from(letter),
                table.frequency_at(position, letter)
            )?;
        }
    }
    Ok(())
}

/// Write `letter,occurrences,percentage` for every observed letter
///
/// `percentage` is the share of all answer letters, over every position.
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn write_letters<W: Write>(out: &mut W, table: &FrequencyTable) -> io::Result<()> {
    writeln!(out, "letter,occurrences,percentage")?;
    for (letter, count) in table.letter_counts() {
        writeln!(
            out,
            "{},{count},{}",
            char::from(letter),
            table.letter_frequency(letter)
        )?;
    }
    Ok(())
}
