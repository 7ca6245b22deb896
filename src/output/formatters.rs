//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackRow, Word};
use colored::Colorize;
use std::fmt::Write;
use std::time::Duration;

/// Render a guess with one colored cell per letter
///
/// Hits are black on green, present letters blue on yellow, absent letters
/// white on black.
#[must_use]
pub fn colorize_row(guess: &Word, row: &FeedbackRow) -> String {
    guess
        .text()
        .chars()
        .zip(row.iter())
        .fold(String::new(), |mut out, (letter, cell)| {
            let letter = letter.to_string();
            let cell = match cell {
                Feedback::Hit => letter.black().on_green(),
                Feedback::Present => letter.bright_blue().on_bright_yellow(),
                Feedback::Absent => letter.white().on_black(),
            };
            let _ = write!(out, "{cell}");
            out
        })
}

/// Format a duration as `S.mmms`, `MmS.mmms` or `HhMmS.mmms`
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let seconds = (total % 60) as f64 + f64::from(duration.subsec_millis()) / 1000.0;

    if total < 60 {
        format!("{seconds:.3}s")
    } else if total < 3600 {
        format!("{}m{seconds:.3}s", total / 60)
    } else {
        format!("{}h{}m{seconds:.3}s", total / 3600, total % 3600 / 60)
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
