//! Display functions for command results

use super::formatters::{display_letter, frequency_bar};
use crate::commands::Explanation;
use colored::Colorize;

/// Print the per-position breakdown of a word's score
pub fn print_explanation(result: &Explanation) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "LIKELIHOOD:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} answers:", result.answer_count);
    for detail in &result.positions {
        let bar = frequency_bar(detail.frequency, 30);
        let bar = if detail.count == 0 {
            bar.red()
        } else {
            bar.green()
        };
        println!(
            "   {} {}: [{}] {:>5} ({:5.1}%, {:4.1}% overall)",
            detail.position + 1,
            display_letter(detail.letter),
            bar,
            detail.count,
            detail.frequency * 100.0,
            detail.overall_frequency * 100.0
        );
    }

    println!(
        "\n   Score:   {} (scale {})",
        format!("{}", result.score).bright_yellow().bold(),
        result.scale_factor
    );

    let zeros: Vec<String> = result
        .zero_positions()
        .map(|detail| {
            format!(
                "{} at {}",
                display_letter(detail.letter),
                detail.position + 1
            )
        })
        .collect();
    if !zeros.is_empty() {
        println!(
            "   {}",
            format!("Never seen in answers: {}", zeros.join(", ")).red()
        );
    }

    if result.is_answer {
        println!("   {}", "✅ In the answer list".green());
    } else {
        println!("   {}", "Not in the answer list".bright_black());
    }
}
