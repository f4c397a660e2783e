//! Test all targets - self-play evaluation
//!
//! Plays a full game against every catalog entity with the given strategy and
//! generates statistics on how many guesses each took.

use crate::core::{Entity, GuessResult, evaluate};
use crate::output::print_distribution;
use crate::solver::{Solver, Strategy};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result from playing against a single target
#[derive(Debug, Clone)]
pub struct TargetTestResult {
    pub target: String,
    pub guesses: Vec<String>,
    pub success: bool,
}

impl TargetTestResult {
    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.guesses.len()
    }
}

/// Statistics from testing all targets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub strategy: &'static str,
    pub total_targets: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub hardest_targets: Vec<(String, usize)>,
}

/// Play one game against `target`, letting the solver pick every guess
///
/// Stops when the target is guessed or the solver has nothing left to offer.
pub fn play_out<S: Strategy>(solver: &Solver<S>, target: &Entity) -> TargetTestResult {
    let catalog = solver.catalog();
    let mut history: Vec<GuessResult> = Vec::new();
    let mut success = false;

    while let Some(guess) = solver.next_guess(&history) {
        history.push(evaluate(catalog.schema(), target, guess));
        if guess == target {
            success = true;
            break;
        }
    }

    TargetTestResult {
        target: target.display_name().to_string(),
        guesses: history
            .iter()
            .map(|r| r.guess().display_name().to_string())
            .collect(),
        success,
    }
}

/// Run the solver against every target (or the first `limit` of them)
///
/// Targets are played in parallel; results keep catalog order.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_test_all<S: Strategy + Sync>(
    solver: &Solver<S>,
    strategy: &'static str,
    limit: Option<usize>,
) -> TestAllStatistics {
    let targets = solver.catalog().list_all();
    let targets = &targets[..limit.unwrap_or(targets.len()).min(targets.len())];

    println!("🎯 Testing {} targets...", targets.len());

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    let results: Vec<TargetTestResult> = targets
        .par_iter()
        .map(|target| {
            let result = play_out(solver, target);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");
    log::debug!("test-all finished {} games", results.len());

    summarize(strategy, &results, total_start.elapsed())
}

fn summarize(
    strategy: &'static str,
    results: &[TargetTestResult],
    total_time: Duration,
) -> TestAllStatistics {
    let solved: Vec<&TargetTestResult> = results.iter().filter(|r| r.success).collect();

    let mut guess_distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for r in &solved {
        *guess_distribution.entry(r.num_guesses()).or_insert(0) += 1;
    }

    let total_guesses: usize = solved.iter().map(|r| r.num_guesses()).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let mut hardest_targets: Vec<(String, usize)> = solved
        .iter()
        .map(|r| (r.target.clone(), r.num_guesses()))
        .collect();
    hardest_targets.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest_targets.truncate(5);

    TestAllStatistics {
        strategy,
        total_targets: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved.iter().map(|r| r.num_guesses()).max().unwrap_or(0),
        min_guesses: solved.iter().map(|r| r.num_guesses()).min().unwrap_or(0),
        hardest_targets,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ({} strategy) ", stats.strategy);
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total targets:       {}", stats.total_targets);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_targets.max(1) as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!("  Failed to solve:     {}", stats.failed.to_string().red());
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Best / worst:        {} / {}",
        stats.min_guesses.to_string().green(),
        stats.max_guesses.to_string().yellow()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let distribution: Vec<(usize, usize)> = stats
        .guess_distribution
        .iter()
        .map(|(&guesses, &count)| (guesses, count))
        .collect();
    print_distribution(&distribution, stats.solved);

    if !stats.hardest_targets.is_empty() {
        println!("\n😰 {}", "Hardest Targets".yellow().bold());
        for (name, guesses) in &stats.hardest_targets {
            println!("  {} ({} guesses)", name.yellow(), guesses);
        }
    }
}
