//! Guess evaluation and per-attribute verdicts
//!
//! Each attribute of a guess is compared against the target:
//! - Single-valued: Exact on equality, otherwise None
//! - Multi-valued: Exact on equal ordered sequences, Partial on any shared tag,
//!   otherwise None
//!
//! A reordered or subset/superset tag list therefore only ever scores Partial.

use super::{AttributeKind, Entity, Schema};
use std::fmt;

/// Outcome of comparing one attribute between guess and target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatchVerdict {
    /// No overlap
    None,
    /// Some shared tags, but not the same ordered list
    Partial,
    /// Identical value (or identical ordered tag list)
    Exact,
}

impl MatchVerdict {
    /// Compare two single values
    #[inline]
    #[must_use]
    pub fn compare_single(target: &str, guess: &str) -> Self {
        if target == guess { Self::Exact } else { Self::None }
    }

    /// Compare two ordered tag lists
    ///
    /// # Examples
    /// ```
    /// use champdle::core::MatchVerdict;
    ///
    /// let top_jungle = ["Top".to_string(), "Jungle".to_string()];
    /// let jungle_top = ["Jungle".to_string(), "Top".to_string()];
    ///
    /// assert_eq!(MatchVerdict::compare_multi(&top_jungle, &top_jungle), MatchVerdict::Exact);
    /// assert_eq!(MatchVerdict::compare_multi(&top_jungle, &jungle_top), MatchVerdict::Partial);
    /// assert_eq!(MatchVerdict::compare_multi(&top_jungle, &[]), MatchVerdict::None);
    /// ```
    #[must_use]
    pub fn compare_multi(target: &[String], guess: &[String]) -> Self {
        if target == guess {
            Self::Exact
        } else if guess.iter().any(|tag| target.contains(tag)) {
            Self::Partial
        } else {
            Self::None
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Exact)
    }

    /// Emoji square for share-style output
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Partial => '🟨',
            Self::None => '🟥',
        }
    }
}

impl fmt::Display for MatchVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Partial => write!(f, "partial"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Verdict for one named attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeVerdict {
    pub attribute: String,
    pub kind: AttributeKind,
    pub verdict: MatchVerdict,
}

/// Result of one guess: the guessed entity plus a verdict per schema attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    guess: Entity,
    verdicts: Vec<AttributeVerdict>,
    solves: bool,
}

/// Tally of verdicts in a result
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VerdictCounts {
    pub exact: usize,
    pub partial: usize,
    pub none: usize,
}

impl GuessResult {
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Entity {
        &self.guess
    }

    /// Verdicts in schema order
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[AttributeVerdict] {
        &self.verdicts
    }

    /// Verdict for a named attribute
    #[must_use]
    pub fn verdict(&self, attribute: &str) -> Option<MatchVerdict> {
        self.verdicts
            .iter()
            .find(|v| v.attribute == attribute)
            .map(|v| v.verdict)
    }

    /// Bare verdict row in schema order, for feedback comparison
    #[must_use]
    pub fn pattern(&self) -> Vec<MatchVerdict> {
        self.verdicts.iter().map(|v| v.verdict).collect()
    }

    /// Check if every attribute matched exactly
    ///
    /// An entity with the same attributes as the target is perfect without
    /// being the target; see [`GuessResult::solves_target`].
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.verdicts.iter().all(|v| v.verdict.is_exact())
    }

    /// Whether the guess was the target itself
    #[inline]
    #[must_use]
    pub const fn solves_target(&self) -> bool {
        self.solves
    }

    #[must_use]
    pub fn counts(&self) -> VerdictCounts {
        let mut counts = VerdictCounts::default();
        for v in &self.verdicts {
            match v.verdict {
                MatchVerdict::Exact => counts.exact += 1,
                MatchVerdict::Partial => counts.partial += 1,
                MatchVerdict::None => counts.none += 1,
            }
        }
        counts
    }

    /// Convert the row to an emoji string like "🟩🟨🟥🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.verdicts.iter().map(|v| v.verdict.to_emoji()).collect()
    }
}

/// Compare one attribute; a missing value on either side scores None
fn compare_attribute(kind: AttributeKind, name: &str, target: &Entity, guess: &Entity) -> MatchVerdict {
    match kind {
        AttributeKind::Single => match (target.single(name), guess.single(name)) {
            (Some(t), Some(g)) => MatchVerdict::compare_single(t, g),
            _ => MatchVerdict::None,
        },
        AttributeKind::Multi => match (target.multi(name), guess.multi(name)) {
            (Some(t), Some(g)) => MatchVerdict::compare_multi(t, g),
            _ => MatchVerdict::None,
        },
    }
}

/// Verdict row for `guess` against `target`, in schema order
///
/// Cheaper than [`evaluate`] when only the row is needed (candidate filtering).
#[must_use]
pub fn compare_attributes(schema: &Schema, target: &Entity, guess: &Entity) -> Vec<MatchVerdict> {
    schema
        .iter()
        .map(|attribute| compare_attribute(attribute.kind(), attribute.name(), target, guess))
        .collect()
}

/// Evaluate `guess` against `target`
///
/// Pure and deterministic: one verdict per schema attribute, in schema order.
///
/// # Examples
/// ```
/// use champdle::core::{evaluate, AttributeKind, Entity, MatchVerdict, Schema};
///
/// let schema = Schema::new([("role", AttributeKind::Multi)]);
/// let a = Entity::new("a", "A", "").with_multi("role", ["Top"]);
/// let b = Entity::new("b", "B", "").with_multi("role", ["Top", "Jungle"]);
///
/// let result = evaluate(&schema, &b, &a);
/// assert_eq!(result.verdict("role"), Some(MatchVerdict::Partial));
/// assert!(!result.is_perfect());
/// ```
#[must_use]
pub fn evaluate(schema: &Schema, target: &Entity, guess: &Entity) -> GuessResult {
    let verdicts = schema
        .iter()
        .map(|attribute| AttributeVerdict {
            attribute: attribute.name().to_string(),
            kind: attribute.kind(),
            verdict: compare_attribute(attribute.kind(), attribute.name(), target, guess),
        })
        .collect();

    GuessResult {
        guess: guess.clone(),
        verdicts,
        solves: guess.identifier() == target.identifier(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn champion(id: &str, gender: &str, position: &[&str], year: &str) -> Entity {
        Entity::new(id, id.to_uppercase(), format!("{id}.jpg"))
            .with_single("gender", gender)
            .with_multi("position", position.iter().copied())
            .with_multi("species", ["Human"])
            .with_multi("resource", ["Mana"])
            .with_multi("range_type", ["Melee"])
            .with_multi("region", ["Ionia"])
            .with_single("release_year", year)
    }

    #[test]
    fn single_valued_exact_or_none() {
        assert_eq!(MatchVerdict::compare_single("Male", "Male"), MatchVerdict::Exact);
        assert_eq!(MatchVerdict::compare_single("Male", "Female"), MatchVerdict::None);
        // Case matters: values are compared strictly
        assert_eq!(MatchVerdict::compare_single("Male", "male"), MatchVerdict::None);
    }

    #[test]
    fn multi_valued_same_order_is_exact() {
        let t = tags(&["Top", "Jungle"]);
        assert_eq!(MatchVerdict::compare_multi(&t, &t), MatchVerdict::Exact);
    }

    #[test]
    fn multi_valued_reordered_is_partial() {
        let target = tags(&["Top", "Jungle"]);
        let guess = tags(&["Jungle", "Top"]);
        assert_eq!(
            MatchVerdict::compare_multi(&target, &guess),
            MatchVerdict::Partial
        );
    }

    #[test]
    fn multi_valued_subset_and_superset_are_partial() {
        let top = tags(&["Top"]);
        let top_jungle = tags(&["Top", "Jungle"]);
        assert_eq!(
            MatchVerdict::compare_multi(&top_jungle, &top),
            MatchVerdict::Partial
        );
        assert_eq!(
            MatchVerdict::compare_multi(&top, &top_jungle),
            MatchVerdict::Partial
        );
    }

    #[test]
    fn multi_valued_disjoint_is_none() {
        assert_eq!(
            MatchVerdict::compare_multi(&tags(&["Top"]), &tags(&["Support", "Middle"])),
            MatchVerdict::None
        );
    }

    #[test]
    fn multi_valued_duplicate_tags_not_exact() {
        // Same set, different length
        assert_eq!(
            MatchVerdict::compare_multi(&tags(&["Top"]), &tags(&["Top", "Top"])),
            MatchVerdict::Partial
        );
    }

    #[test]
    fn multi_valued_both_empty_is_exact() {
        assert_eq!(MatchVerdict::compare_multi(&[], &[]), MatchVerdict::Exact);
    }

    #[test]
    fn evaluate_reflexive() {
        let schema = Schema::champions();
        for e in [
            champion("garen", "Male", &["Top"], "2010"),
            champion("akali", "Female", &["Middle", "Top"], "2010"),
            champion("empty", "Other", &[], "2024"),
        ] {
            let result = evaluate(&schema, &e, &e);
            assert!(result.is_perfect(), "{} against itself", e.identifier());
            assert_eq!(result.verdicts().len(), schema.len());
        }
    }

    #[test]
    fn evaluate_single_attribute_difference() {
        let schema = Schema::champions();
        let target = champion("a", "Male", &["Top"], "2010");
        let guess = champion("b", "Female", &["Top"], "2010");

        let result = evaluate(&schema, &target, &guess);
        assert_eq!(result.verdict("gender"), Some(MatchVerdict::None));
        assert_eq!(result.verdict("position"), Some(MatchVerdict::Exact));
        assert_eq!(result.verdict("release_year"), Some(MatchVerdict::Exact));
        assert_eq!(
            result.counts(),
            VerdictCounts {
                exact: 6,
                partial: 0,
                none: 1
            }
        );
    }

    #[test]
    fn evaluate_keeps_schema_order() {
        let schema = Schema::champions();
        let target = champion("a", "Male", &["Top", "Jungle"], "2010");
        let guess = champion("b", "Female", &["Jungle"], "2013");

        let result = evaluate(&schema, &target, &guess);
        assert_eq!(
            result.pattern(),
            [
                MatchVerdict::None,
                MatchVerdict::Partial,
                MatchVerdict::Exact,
                MatchVerdict::Exact,
                MatchVerdict::Exact,
                MatchVerdict::Exact,
                MatchVerdict::None,
            ]
        );
        assert_eq!(result.to_emoji(), "🟥🟨🟩🟩🟩🟩🟥");
        assert_eq!(result.pattern(), compare_attributes(&schema, &target, &guess));
    }

    #[test]
    fn evaluate_missing_attribute_is_none() {
        let schema = Schema::champions();
        let target = champion("a", "Male", &["Top"], "2010");
        let bare = Entity::new("b", "B", "").with_single("gender", "Male");

        let result = evaluate(&schema, &target, &bare);
        assert_eq!(result.verdict("gender"), Some(MatchVerdict::Exact));
        assert_eq!(result.verdict("position"), Some(MatchVerdict::None));
        assert_eq!(result.verdict("release_year"), Some(MatchVerdict::None));
    }

    #[test]
    fn evaluate_single_tag_against_two() {
        let schema = Schema::new([("role", AttributeKind::Multi)]);
        let a = Entity::new("A", "A", "").with_multi("role", ["Top"]);
        let b = Entity::new("B", "B", "").with_multi("role", ["Top", "Jungle"]);

        let result = evaluate(&schema, &b, &a);
        assert_eq!(result.verdict("role"), Some(MatchVerdict::Partial));
        assert_eq!(result.guess().identifier(), "A");
    }

    #[test]
    fn attribute_twin_is_perfect_but_not_solving() {
        let schema = Schema::new([("role", AttributeKind::Multi)]);
        let a = Entity::new("A", "A", "").with_multi("role", ["Top"]);
        let b = Entity::new("B", "B", "").with_multi("role", ["Top"]);

        let twin = evaluate(&schema, &b, &a);
        assert!(twin.is_perfect());
        assert!(!twin.solves_target());
        assert!(evaluate(&schema, &b, &b).solves_target());
    }

    #[test]
    fn verdict_emoji() {
        assert_eq!(MatchVerdict::Exact.to_emoji(), '🟩');
        assert_eq!(MatchVerdict::Partial.to_emoji(), '🟨');
        assert_eq!(MatchVerdict::None.to_emoji(), '🟥');
    }
}
