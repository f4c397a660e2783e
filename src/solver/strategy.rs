//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::catalog::Catalog;
use crate::core::Entity;

/// A strategy for selecting the next guess
pub trait Strategy {
    /// Select a guess from the pool given the remaining candidates
    ///
    /// The pool holds every entity not yet guessed. Returns `None` if nothing
    /// can be selected.
    fn select_guess<'a>(
        &self,
        catalog: &Catalog,
        guess_pool: &[&'a Entity],
        candidates: &[&'a Entity],
    ) -> Option<&'a Entity>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Worst-case minimization (default)
    Minimax(MinimaxStrategy),
    /// First remaining candidate in catalog order
    First(FirstCandidateStrategy),
    /// Random selection from candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(
        &self,
        catalog: &Catalog,
        guess_pool: &[&'a Entity],
        candidates: &[&'a Entity],
    ) -> Option<&'a Entity> {
        match self {
            Self::Minimax(s) => s.select_guess(catalog, guess_pool, candidates),
            Self::First(s) => s.select_guess(catalog, guess_pool, candidates),
            Self::Random(s) => s.select_guess(catalog, guess_pool, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "first", "random".
    /// Defaults to minimax if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "first" | "naive" => Self::First(FirstCandidateStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Minimax(_) => "minimax",
            Self::First(_) => "first",
            Self::Random(_) => "random",
        }
    }
}

/// Pure minimax strategy
///
/// Always selects the guess that minimizes worst-case remaining candidates.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(
        &self,
        catalog: &Catalog,
        guess_pool: &[&'a Entity],
        candidates: &[&'a Entity],
    ) -> Option<&'a Entity> {
        super::minimax::select_best_guess(catalog, guess_pool, candidates).map(|(best, _)| best)
    }
}

/// Naive strategy
///
/// Guesses the first remaining candidate, like a player going down the list.
pub struct FirstCandidateStrategy;

impl Strategy for FirstCandidateStrategy {
    fn select_guess<'a>(
        &self,
        _catalog: &Catalog,
        guess_pool: &[&'a Entity],
        candidates: &[&'a Entity],
    ) -> Option<&'a Entity> {
        candidates
            .iter()
            .find(|c| guess_pool.contains(*c))
            .copied()
    }
}

/// Random strategy
///
/// Randomly selects from remaining candidates.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(
        &self,
        _catalog: &Catalog,
        guess_pool: &[&'a Entity],
        candidates: &[&'a Entity],
    ) -> Option<&'a Entity> {
        use rand::prelude::IndexedRandom;

        // Only candidates that can still be guessed
        let valid_candidates: Vec<&'a Entity> = candidates
            .iter()
            .filter(|c| guess_pool.contains(*c))
            .copied()
            .collect();

        valid_candidates.choose(&mut rand::rng()).copied()
    }
}
