//! Formatting utilities for terminal output

use crate::core::{Match, Sequence};
use colored::Colorize;

/// Render a sequence as colored pegs
///
/// Uses a fixed eight-color palette, cycling for larger alphabets.
#[must_use]
pub fn sequence_pegs(sequence: &Sequence) -> String {
    let mut result = String::new();
    for &color in sequence.colors() {
        let peg = match color % 8 {
            0 => "●".red(),
            1 => "●".green(),
            2 => "●".yellow(),
            3 => "●".blue(),
            4 => "●".magenta(),
            5 => "●".cyan(),
            6 => "●".white(),
            _ => "●".bright_black(),
        };
        result.push_str(&peg.to_string());
    }
    result
}

/// Render feedback as the classic peg row
///
/// Black hits come first, then white hits, then a dot per unscored peg.
#[must_use]
pub fn feedback_pegs(feedback: Match, length: usize) -> String {
    let black = usize::from(feedback.black_hits());
    let white = usize::from(feedback.white_hits());
    let rest = length.saturating_sub(black + white);

    format!(
        "{}{}{}",
        "●".repeat(black),
        "○".repeat(white),
        "·".repeat(rest)
    )
}

/// Create a plain progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
