//! Formatting utilities for terminal output

use crate::core::Feedback;
use colored::Colorize;

/// Format feedback as colored pegs, bulls first
#[must_use]
pub fn feedback_pegs(feedback: Feedback, squares: usize) -> String {
    let misses = squares.saturating_sub(feedback.bulls() + feedback.cows());
    format!(
        "{}{}{}",
        "●".repeat(feedback.bulls()).green(),
        "○".repeat(feedback.cows()).yellow(),
        "·".repeat(misses).bright_black()
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a candidate score, fuller means fewer distinct symbols
#[must_use]
pub fn score_bar(score: usize, squares: usize, width: usize) -> String {
    let squares = squares.max(1);
    let preference = squares + 1 - score.clamp(1, squares);
    create_progress_bar(preference as f64, squares as f64, width)
}
