//! Minimax guess selection
//!
//! Picks the guess that minimizes the worst-case number of candidates left
//! after its feedback row comes back.

use crate::catalog::Catalog;
use crate::core::{Entity, MatchVerdict, compare_attributes};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Candidates are grouped by the verdict row the guess would receive if they
/// were the target. The guess itself never counts: guessing the target ends
/// the game.
///
/// # Examples
/// ```
/// use champdle::catalog::Catalog;
/// use champdle::solver::minimax::calculate_max_remaining;
///
/// let catalog = Catalog::champions().unwrap();
/// let candidates: Vec<_> = catalog.list_all().iter().collect();
/// let guess = catalog.get("jax").unwrap();
///
/// let max_remaining = calculate_max_remaining(&catalog, guess, &candidates);
/// assert!(max_remaining < candidates.len());
/// ```
#[must_use]
pub fn calculate_max_remaining(catalog: &Catalog, guess: &Entity, candidates: &[&Entity]) -> usize {
    group_by_pattern(catalog, guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Group candidates by the verdict row they produce with the guess
fn group_by_pattern(
    catalog: &Catalog,
    guess: &Entity,
    candidates: &[&Entity],
) -> FxHashMap<Vec<MatchVerdict>, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        if candidate == guess {
            continue;
        }
        let pattern = compare_attributes(catalog.schema(), candidate, guess);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Select the guess with the lowest worst case
///
/// Ties prefer guesses that are themselves candidates (they might win
/// outright), then catalog order. Returns the guess and its worst case, or
/// `None` if the pool is empty.
#[must_use]
pub fn select_best_guess<'a>(
    catalog: &Catalog,
    guess_pool: &[&'a Entity],
    candidates: &[&Entity],
) -> Option<(&'a Entity, usize)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(order, &guess)| {
            let max_remaining = calculate_max_remaining(catalog, guess, candidates);
            let is_candidate = candidates.contains(&guess);
            (guess, max_remaining, !is_candidate, order)
        })
        .min_by_key(|&(_, max, not_candidate, order)| (max, not_candidate, order))
        .map(|(guess, max, _, _)| (guess, max))
}
