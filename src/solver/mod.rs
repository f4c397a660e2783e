//! Deduction helpers
//!
//! Candidate filtering plus guess selection strategies, used for in-game hints
//! and self-play analysis.

mod candidates;
mod engine;
pub mod minimax;
pub mod strategy;

pub use candidates::{count_candidates, filter_candidates};
pub use engine::Solver;
pub use strategy::{
    FirstCandidateStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType,
};
