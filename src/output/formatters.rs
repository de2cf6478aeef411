//! Formatting utilities for terminal output

use crate::commands::ShortlistEntry;

/// Characters of decoded text shown in a shortlist line
pub const DEFAULT_PREVIEW_WIDTH: usize = 60;

/// Format a shift with an explicit sign: `+3`, `-5`
#[must_use]
pub fn signed_shift(shift: i32) -> String {
    if shift > 0 {
        format!("+{shift}")
    } else {
        shift.to_string()
    }
}

/// First `width` characters of `text` with newlines flattened to spaces
#[must_use]
pub fn preview(text: &str, width: usize) -> String {
    text.chars()
        .take(width)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect()
}

/// Label for the best candidate's header: the raw shift, no forced sign
#[must_use]
pub fn best_shift_label(shift: i32) -> String {
    format!("Shift={shift}")
}

/// Render one shortlist line
///
/// `[Shift  +3] Score: 2500.4 | Matches:  2 | preview text`
#[must_use]
pub fn shortlist_line(entry: &ShortlistEntry) -> String {
    format!(
        "[Shift {:>3}] Score: {:6.1} | Matches: {:2} | {}",
        signed_shift(entry.shift),
        entry.total_score,
        entry.word_match_count,
        entry.preview
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a letter percentage, scaled so 15% fills the width
#[must_use]
pub fn frequency_bar(percentage: f64, width: usize) -> String {
    let max_percentage = 15.0; // Just above E's 12.7%
    create_progress_bar(percentage, max_percentage, width)
}
