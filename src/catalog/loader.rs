//! Catalog loading utilities
//!
//! Provides functions to build a catalog from a record file or from the
//! embedded record constants.

use super::{Catalog, CatalogError};
use crate::core::{Entity, Schema};
use std::fs;
use std::path::Path;

/// Parse records into entities, skipping blank lines and `#` comments
///
/// Line numbers in errors are 1-based positions in `records`.
///
/// # Errors
/// Returns `CatalogError::Malformed` for the first record that fails to parse.
pub fn entities_from_records<'a, I>(schema: &Schema, records: I) -> Result<Vec<Entity>, CatalogError>
where
    I: IntoIterator<Item = &'a str>,
{
    records
        .into_iter()
        .enumerate()
        .filter(|(_, record)| {
            let trimmed = record.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(i, record)| {
            Entity::parse_record(record, schema)
                .map_err(|source| CatalogError::Malformed { line: i + 1, source })
        })
        .collect()
}

/// Build a catalog from a slice of record strings
///
/// # Errors
/// Returns `CatalogError` if a record is malformed or the catalog invariants
/// are violated.
///
/// # Examples
/// ```
/// use champdle::catalog::loader::catalog_from_records;
/// use champdle::catalog::CHAMPIONS;
/// use champdle::core::Schema;
///
/// let catalog = catalog_from_records(Schema::champions(), CHAMPIONS).unwrap();
/// assert_eq!(catalog.len(), CHAMPIONS.len());
/// ```
pub fn catalog_from_records(schema: Schema, records: &[&str]) -> Result<Catalog, CatalogError> {
    let entities = entities_from_records(&schema, records.iter().copied())?;
    Catalog::new(schema, entities)
}

/// Load a catalog from a record file
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be read, or any parse or
/// invariant error from the records.
///
/// # Examples
/// ```no_run
/// use champdle::catalog::loader::load_from_file;
/// use champdle::core::Schema;
///
/// let catalog = load_from_file("data/champions.txt", Schema::champions()).unwrap();
/// println!("Loaded {} champions", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, schema: Schema) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    log::info!("loading catalog from {}", path.display());

    let entities = entities_from_records(&schema, content.lines())?;
    Catalog::new(schema, entities)
}
