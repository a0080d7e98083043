//! Formatting utilities for terminal output

use crate::board::SolutionSummary;
use crate::core::{Feedback, LetterStatus, Word};
use colored::Colorize;

/// A guess with each letter on its feedback colour, e.g. for `SLATE Y-G--`
#[must_use]
pub fn colored_guess(word: &Word, feedback: &Feedback) -> String {
    word.chars()
        .iter()
        .zip(feedback.statuses())
        .map(|(&letter, status)| {
            let cell = format!(" {} ", char::from(letter).to_ascii_uppercase());
            match status {
                LetterStatus::Green => cell.black().on_green().bold().to_string(),
                LetterStatus::Yellow => cell.black().on_yellow().bold().to_string(),
                LetterStatus::Gray => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Known greens as a pattern, `_` for unknown positions
///
/// # Examples
/// ```
/// use wordle_helper::board::SolutionSummary;
/// use wordle_helper::output::formatters::green_pattern;
///
/// let summary = SolutionSummary {
///     greens: [None, Some(b'a'), None, None, Some(b'e')],
///     yellows: vec![],
/// };
/// assert_eq!(green_pattern(&summary), "_ A _ _ E");
/// ```
#[must_use]
pub fn green_pattern(summary: &SolutionSummary) -> String {
    summary
        .greens
        .iter()
        .map(|green| green.map_or('_', |letter| char::from(letter).to_ascii_uppercase()))
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Yellow letters still to be placed, comma separated
#[must_use]
pub fn yellow_letters(summary: &SolutionSummary) -> String {
    summary
        .yellows
        .iter()
        .map(|&letter| char::from(letter).to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
