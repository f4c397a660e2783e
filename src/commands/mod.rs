//! Command implementations

pub mod compare;
pub mod simple;
pub mod test_all;

pub use compare::{ComparisonResult, compare_entities};
pub use simple::run_simple;
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};

use crate::game::GameError;
use std::io;
use thiserror::Error;

/// Errors surfaced by the command front ends
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("no champion matches '{0}'")]
    UnknownChampion(String),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
