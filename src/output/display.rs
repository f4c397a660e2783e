//! Display functions for CLI output

use super::formatters::{CELL_WIDTH, create_progress_bar, fit_cell, verdict_cell, verdict_label};
use crate::core::{Entity, GuessResult, MatchVerdict, Schema};
use colored::Colorize;

/// Print the table header: name column then one column per attribute
pub fn print_guess_header(schema: &Schema) {
    let mut header = format!(" {} ", fit_cell("Champion", CELL_WIDTH - 2));
    for attribute in schema {
        header.push_str(&format!(" {} ", fit_cell(&attribute.label(), CELL_WIDTH - 2)));
    }
    println!("{}", header.bright_cyan().bold());
}

/// Print one evaluated guess as a colored row
pub fn print_guess_row(result: &GuessResult) {
    let guess = result.guess();
    let mut row = format!(
        " {} ",
        fit_cell(guess.display_name(), CELL_WIDTH - 2).bright_white().bold()
    );
    for v in result.verdicts() {
        row.push_str(&verdict_cell(&guess.display_value(&v.attribute), v.verdict).to_string());
    }
    println!("{row}");
}

/// Print the guess history newest first
pub fn print_history(schema: &Schema, history: &[GuessResult]) {
    if history.is_empty() {
        return;
    }
    print_guess_header(schema);
    for result in history.iter().rev() {
        print_guess_row(result);
    }
}

/// Print a single comparison between a guess and a known target
pub fn print_comparison(schema: &Schema, result: &GuessResult, target: &Entity) {
    println!("\n{}", "═".repeat(70).cyan());
    println!(
        " {} {} {} {}",
        "COMPARE:".bright_cyan().bold(),
        result.guess().display_name().bright_yellow().bold(),
        "against".bright_black(),
        target.display_name().bright_yellow().bold()
    );
    println!("{}", "═".repeat(70).cyan());
    println!();

    print_guess_header(schema);
    print_guess_row(result);

    let counts = result.counts();
    println!(
        "\n  {}  {} exact, {} partial, {} none",
        result.to_emoji(),
        counts.exact.to_string().green(),
        counts.partial.to_string().yellow(),
        counts.none.to_string().red()
    );
    print_legend();
}

/// Print the verdict color legend
pub fn print_legend() {
    println!(
        "  {} {}  {} {}  {} {}",
        verdict_cell("", MatchVerdict::Exact),
        verdict_label(MatchVerdict::Exact),
        verdict_cell("", MatchVerdict::Partial),
        verdict_label(MatchVerdict::Partial),
        verdict_cell("", MatchVerdict::None),
        verdict_label(MatchVerdict::None)
    );
}

/// Print autocomplete suggestions
pub fn print_suggestions(suggestions: &[&Entity]) {
    if suggestions.is_empty() {
        println!("  {}", "No matching champions".bright_black());
        return;
    }
    for entity in suggestions {
        println!(
            "  • {} {}",
            entity.display_name().bright_white(),
            format!("({})", entity.identifier()).bright_black()
        );
    }
}

/// Print the victory banner with the share-style emoji history
pub fn print_solved_banner(history: &[GuessResult]) {
    let turns = history.len();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "        🎉  C H A M P I O N   F O U N D !  🎉        "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    if let Some(last) = history.last() {
        println!(
            "\n  It was {} - found in {} {}",
            last.guess().display_name().bright_yellow().bold(),
            turns.to_string().bright_cyan().bold(),
            if turns == 1 { "guess" } else { "guesses" }
        );
    }

    println!("\n  Guess history:");
    for (i, result) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            result.to_emoji(),
            result.guess().display_name().bright_white()
        );
    }
    println!();
}

/// Print a guess-count distribution as bars
pub fn print_distribution(distribution: &[(usize, usize)], total: usize) {
    let max_count = distribution.iter().map(|&(_, c)| c).max().unwrap_or(0);
    for &(guesses, count) in distribution {
        let pct = if total > 0 {
            count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("  {guesses:2} guesses: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
