//! Main solver interface

use super::candidates::{count_candidates, filter_candidates};
use super::strategy::Strategy;
use crate::catalog::Catalog;
use crate::core::{Entity, GuessResult};

/// Deduction helper
///
/// Coordinates candidate filtering and guess selection using a given strategy.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    catalog: &'a Catalog,
}

impl<'a, S: Strategy> Solver<'a, S> {
    pub const fn new(strategy: S, catalog: &'a Catalog) -> Self {
        Self { strategy, catalog }
    }

    /// Get the next best guess given the results so far
    ///
    /// Returns `None` if no candidates remain or every candidate was guessed.
    pub fn next_guess(&self, history: &[GuessResult]) -> Option<&'a Entity> {
        let candidates = filter_candidates(self.catalog, history);

        if candidates.is_empty() {
            return None;
        }

        let guess_pool: Vec<&'a Entity> = self
            .catalog
            .list_all()
            .iter()
            .filter(|e| !history.iter().any(|r| r.guess() == *e))
            .collect();

        // If only one candidate remains, just guess it
        if let [only] = candidates.as_slice() {
            return guess_pool.contains(only).then_some(*only);
        }

        self.strategy
            .select_guess(self.catalog, &guess_pool, &candidates)
    }

    /// Count how many candidates remain given the history
    pub fn count_candidates(&self, history: &[GuessResult]) -> usize {
        count_candidates(self.catalog, history)
    }

    /// Get the current candidates
    pub fn get_candidates(&self, history: &[GuessResult]) -> Vec<&'a Entity> {
        filter_candidates(self.catalog, history)
    }

    #[inline]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }
}
