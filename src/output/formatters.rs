//! Formatting utilities for terminal output

use crate::core::MatchVerdict;
use colored::{ColoredString, Colorize};

/// Width of one attribute cell in line-mode tables
pub const CELL_WIDTH: usize = 14;

/// Fit text into exactly `width` columns, cutting with '…' when too long
#[must_use]
pub fn fit_cell(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        format!("{text:<width$}")
    } else {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

/// Color a cell by its verdict: green exact, yellow partial, red none
#[must_use]
pub fn verdict_cell(text: &str, verdict: MatchVerdict) -> ColoredString {
    let cell = format!(" {} ", fit_cell(text, CELL_WIDTH - 2));
    match verdict {
        MatchVerdict::Exact => cell.black().on_green(),
        MatchVerdict::Partial => cell.black().on_yellow(),
        MatchVerdict::None => cell.white().on_red(),
    }
}

/// Short label used in legends
#[must_use]
pub const fn verdict_label(verdict: MatchVerdict) -> &'static str {
    match verdict {
        MatchVerdict::Exact => "exact match",
        MatchVerdict::Partial => "partial overlap",
        MatchVerdict::None => "no overlap",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
