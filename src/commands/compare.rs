//! Compare command
//!
//! Evaluates one champion against another without a running game.

use super::CommandError;
use crate::catalog::Catalog;
use crate::core::{Entity, GuessResult, evaluate};

/// Result of comparing a guess against a chosen target
pub struct ComparisonResult<'a> {
    pub target: &'a Entity,
    pub result: GuessResult,
}

/// Compare `guess` against `target`; both accept an identifier or a display name
///
/// # Errors
///
/// Returns `CommandError::UnknownChampion` if either side cannot be resolved.
pub fn compare_entities<'a>(
    catalog: &'a Catalog,
    guess: &str,
    target: &str,
) -> Result<ComparisonResult<'a>, CommandError> {
    let resolve = |query: &str| {
        catalog
            .resolve(query)
            .ok_or_else(|| CommandError::UnknownChampion(query.to_string()))
    };

    let guess_entity = resolve(guess)?;
    let target_entity = resolve(target)?;

    Ok(ComparisonResult {
        target: target_entity,
        result: evaluate(catalog.schema(), target_entity, guess_entity),
    })
}
