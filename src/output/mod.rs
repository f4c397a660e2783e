//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_comparison, print_distribution, print_guess_header, print_guess_row, print_history,
    print_legend, print_solved_banner, print_suggestions,
};
