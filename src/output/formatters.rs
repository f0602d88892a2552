//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a frequency in `[0, 1]` as a bar
#[must_use]
pub fn frequency_bar(frequency: f64, width: usize) -> String {
    create_progress_bar(frequency, 1.0, width)
}

/// Format a letter as its uppercase display form
#[must_use]
pub fn display_letter(letter: char) -> char {
    letter.to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn frequency_bar_clamps() {
        assert_eq!(frequency_bar(1.5, 4), "████");
        assert_eq!(frequency_bar(0.25, 4), "█░░░");
    }

    #[test]
    fn letters_display_uppercase() {
        assert_eq!(display_letter('e'), 'E');
    }
}
