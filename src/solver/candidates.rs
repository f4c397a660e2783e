//! Candidate filtering
//!
//! A candidate is a catalog entity that could still be the target: treating it
//! as the target would have produced every verdict row seen so far.

use crate::catalog::Catalog;
use crate::core::{Entity, GuessResult, compare_attributes};

/// Check whether `candidate` as the target explains one result
///
/// A solving row pins the target to its guess; any other row rules its guess
/// out, even when an attribute twin made it score all exact.
fn explains(catalog: &Catalog, candidate: &Entity, result: &GuessResult) -> bool {
    if result.solves_target() {
        return result.guess() == candidate;
    }
    result.guess() != candidate
        && compare_attributes(catalog.schema(), candidate, result.guess()) == result.pattern()
}

/// Filter catalog entities to those consistent with the guess history
///
/// Returns candidates in catalog order; with an empty history that is the
/// whole catalog.
///
/// # Examples
/// ```
/// use champdle::catalog::Catalog;
/// use champdle::core::evaluate;
/// use champdle::solver::filter_candidates;
///
/// let catalog = Catalog::champions().unwrap();
/// let target = catalog.get("ahri").unwrap();
/// let guess = catalog.get("garen").unwrap();
/// let history = vec![evaluate(catalog.schema(), target, guess)];
///
/// let candidates = filter_candidates(&catalog, &history);
/// assert!(candidates.contains(&target));
/// assert!(!candidates.contains(&guess));
/// ```
#[must_use]
pub fn filter_candidates<'a>(catalog: &'a Catalog, history: &[GuessResult]) -> Vec<&'a Entity> {
    catalog
        .list_all()
        .iter()
        .filter(|&candidate| history.iter().all(|result| explains(catalog, candidate, result)))
        .collect()
}

/// Count how many candidates remain given the history
#[must_use]
pub fn count_candidates(catalog: &Catalog, history: &[GuessResult]) -> usize {
    catalog
        .list_all()
        .iter()
        .filter(|&candidate| history.iter().all(|result| explains(catalog, candidate, result)))
        .count()
}
