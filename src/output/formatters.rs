//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::Colorize;

/// Format a guess as coloured letter tiles
#[must_use]
pub fn feedback_tiles(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, &mark)| {
            let tile = format!(" {} ", char::from(letter.to_ascii_uppercase()));
            match mark {
                Mark::Correct => tile.black().on_green().bold().to_string(),
                Mark::WrongSpot => tile.black().on_yellow().bold().to_string(),
                Mark::Absent => tile.white().on_bright_black().bold().to_string(),
                Mark::Unknown => tile,
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
