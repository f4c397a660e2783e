//! Catalog of guessable entities
//!
//! The catalog is loaded once, eagerly, before any session begins and never
//! changes afterwards. It owns the attribute schema its entities conform to.

mod embedded;
pub mod loader;

pub use embedded::{CHAMPIONS, CHAMPIONS_COUNT};

use crate::core::{Entity, RecordError, Schema};
use rustc_hash::{FxHashMap, FxHashSet};
use std::io;
use thiserror::Error;

/// Errors raised while building a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is empty")]
    Empty,
    #[error("duplicate identifier '{0}'")]
    DuplicateIdentifier(String),
    #[error("entity '{0}' does not match the catalog schema")]
    SchemaMismatch(String),
    #[error("malformed record on line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: RecordError,
    },
    #[error("failed to read catalog: {0}")]
    Io(#[from] io::Error),
}

/// Fixed, ordered collection of entities
#[derive(Debug, Clone)]
pub struct Catalog {
    schema: Schema,
    entities: Vec<Entity>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, enforcing non-emptiness, unique identifiers and
    /// schema uniformity
    ///
    /// # Errors
    /// Returns `CatalogError::Empty`, `DuplicateIdentifier` or `SchemaMismatch`.
    pub fn new(schema: Schema, entities: Vec<Entity>) -> Result<Self, CatalogError> {
        if entities.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = FxHashMap::default();
        for (i, entity) in entities.iter().enumerate() {
            if !entity.conforms_to(&schema) {
                return Err(CatalogError::SchemaMismatch(entity.identifier().to_string()));
            }
            if index.insert(entity.identifier().to_string(), i).is_some() {
                return Err(CatalogError::DuplicateIdentifier(
                    entity.identifier().to_string(),
                ));
            }
        }

        log::debug!("catalog built with {} entities", entities.len());

        Ok(Self {
            schema,
            entities,
            index,
        })
    }

    /// The bundled champion catalog
    ///
    /// # Errors
    /// Only fails if the bundled dataset is broken.
    pub fn champions() -> Result<Self, CatalogError> {
        loader::catalog_from_records(Schema::champions(), CHAMPIONS)
    }

    #[inline]
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Every entity, in catalog order
    #[inline]
    #[must_use]
    pub fn list_all(&self) -> &[Entity] {
        &self.entities
    }

    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&Entity> {
        self.index.get(identifier).map(|&i| &self.entities[i])
    }

    /// Position of an entity in catalog order
    #[must_use]
    pub fn position(&self, identifier: &str) -> Option<usize> {
        self.index.get(identifier).copied()
    }

    /// Find an entity by its display name, ignoring case and surrounding spaces
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Entity> {
        let needle = name.trim().to_lowercase();
        self.entities
            .iter()
            .find(|e| e.display_name().to_lowercase() == needle)
    }

    /// Resolve free-form input: identifier first, then display name
    #[must_use]
    pub fn resolve(&self, query: &str) -> Option<&Entity> {
        self.get(query.trim()).or_else(|| self.find_by_name(query))
    }

    /// Entities whose display name starts with `prefix` (case-insensitive),
    /// skipping identifiers in `exclude`
    ///
    /// An empty prefix yields nothing: suggestions only appear once the player
    /// has typed something.
    ///
    /// # Examples
    /// ```
    /// use champdle::catalog::Catalog;
    /// use rustc_hash::FxHashSet;
    ///
    /// let catalog = Catalog::champions().unwrap();
    /// let names: Vec<&str> = catalog
    ///     .suggest("JA", &FxHashSet::default())
    ///     .iter()
    ///     .map(|e| e.display_name())
    ///     .collect();
    /// assert_eq!(names, ["Janna", "Jarvan IV", "Jax"]);
    /// assert!(catalog.suggest("", &FxHashSet::default()).is_empty());
    /// ```
    #[must_use]
    pub fn suggest(&self, prefix: &str, exclude: &FxHashSet<String>) -> Vec<&Entity> {
        if prefix.is_empty() {
            return Vec::new();
        }

        let prefix = prefix.to_lowercase();
        self.entities
            .iter()
            .filter(|e| e.display_name().to_lowercase().starts_with(&prefix))
            .filter(|e| !exclude.contains(e.identifier()))
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Always false for a constructed catalog
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AttributeKind;

    fn role_catalog() -> Catalog {
        let schema = Schema::new([("role", AttributeKind::Multi)]);
        Catalog::new(
            schema,
            vec![
                Entity::new("A", "Alpha", "").with_multi("role", ["Top"]),
                Entity::new("B", "Beta", "").with_multi("role", ["Top", "Jungle"]),
                Entity::new("C", "alpine", "").with_multi("role", ["Support"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn champions_count_matches_const() {
        let catalog = Catalog::champions().unwrap();
        assert_eq!(catalog.len(), CHAMPIONS_COUNT);
        assert_eq!(CHAMPIONS.len(), CHAMPIONS_COUNT);
    }

    #[test]
    fn champions_conform_to_schema() {
        let catalog = Catalog::champions().unwrap();
        for entity in catalog.list_all() {
            assert!(
                entity.conforms_to(catalog.schema()),
                "'{}' misses attributes",
                entity.identifier()
            );
        }
    }

    #[test]
    fn new_rejects_empty() {
        assert!(matches!(
            Catalog::new(Schema::champions(), Vec::new()),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn new_rejects_duplicates() {
        let schema = Schema::new([("role", AttributeKind::Multi)]);
        let result = Catalog::new(
            schema,
            vec![
                Entity::new("A", "Alpha", "").with_multi("role", ["Top"]),
                Entity::new("A", "Again", "").with_multi("role", ["Mid"]),
            ],
        );
        assert!(matches!(result, Err(CatalogError::DuplicateIdentifier(id)) if id == "A"));
    }

    #[test]
    fn new_rejects_schema_mismatch() {
        let schema = Schema::new([("role", AttributeKind::Multi)]);
        let result = Catalog::new(schema, vec![Entity::new("A", "Alpha", "")]);
        assert!(matches!(result, Err(CatalogError::SchemaMismatch(id)) if id == "A"));
    }

    #[test]
    fn list_all_keeps_order() {
        let catalog = role_catalog();
        let ids: Vec<&str> = catalog.list_all().iter().map(Entity::identifier).collect();
        assert_eq!(ids, ["A", "B", "C"]);
    }

    #[test]
    fn get_and_position() {
        let catalog = role_catalog();
        assert_eq!(catalog.get("B").unwrap().display_name(), "Beta");
        assert_eq!(catalog.position("C"), Some(2));
        assert!(catalog.get("Z").is_none());
    }

    #[test]
    fn find_by_name_ignores_case() {
        let catalog = role_catalog();
        assert_eq!(catalog.find_by_name("  BETA ").unwrap().identifier(), "B");
        assert!(catalog.find_by_name("Bet").is_none());
    }

    #[test]
    fn resolve_identifier_then_name() {
        let catalog = role_catalog();
        assert_eq!(catalog.resolve("C").unwrap().display_name(), "alpine");
        assert_eq!(catalog.resolve("alpha").unwrap().identifier(), "A");
        assert!(catalog.resolve("gamma").is_none());
    }

    #[test]
    fn suggest_prefix_case_insensitive() {
        let catalog = role_catalog();
        let ids: Vec<&str> = catalog
            .suggest("AL", &FxHashSet::default())
            .iter()
            .map(|e| e.identifier())
            .collect();
        assert_eq!(ids, ["A", "C"]);
    }

    #[test]
    fn suggest_respects_exclude() {
        let catalog = role_catalog();
        let exclude: FxHashSet<String> = ["A".to_string()].into_iter().collect();
        let ids: Vec<&str> = catalog
            .suggest("al", &exclude)
            .iter()
            .map(|e| e.identifier())
            .collect();
        assert_eq!(ids, ["C"]);
    }

    #[test]
    fn suggest_empty_prefix_is_empty() {
        let catalog = role_catalog();
        assert!(catalog.suggest("", &FxHashSet::default()).is_empty());
    }

    #[test]
    fn suggest_excluding_everything_is_empty() {
        let catalog = role_catalog();
        let all: FxHashSet<String> = catalog
            .list_all()
            .iter()
            .map(|e| e.identifier().to_string())
            .collect();
        for prefix in ["a", "b", "alp"] {
            assert!(catalog.suggest(prefix, &all).is_empty());
        }
    }

    #[test]
    fn suggest_no_match_is_empty() {
        let catalog = role_catalog();
        assert!(catalog.suggest("zz", &FxHashSet::default()).is_empty());
    }
}
