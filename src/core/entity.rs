//! Catalog entity representation
//!
//! An Entity is one selectable character with its single- and multi-valued
//! attributes. Identity is the `identifier`; everything else is payload.

use super::{AttributeKind, Schema};
use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Field separator inside a catalog record
pub const FIELD_SEPARATOR: char = '|';

/// Tag separator inside a multi-valued field
pub const TAG_SEPARATOR: char = ',';

/// Leading fields before the schema attributes: identifier, name, image
const FIXED_FIELDS: usize = 3;

/// One selectable character
#[derive(Debug, Clone)]
pub struct Entity {
    identifier: String,
    display_name: String,
    image_ref: String,
    single: FxHashMap<String, String>,
    multi: FxHashMap<String, Vec<String>>,
}

/// Error type for records that cannot become an Entity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected {expected} fields, got {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("identifier is empty")]
    EmptyIdentifier,
    #[error("display name is empty")]
    EmptyName,
}

impl Entity {
    /// Create an entity with no attributes yet
    #[must_use]
    pub fn new(
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            image_ref: image_ref.into(),
            single: FxHashMap::default(),
            multi: FxHashMap::default(),
        }
    }

    /// Add a single-valued attribute
    #[must_use]
    pub fn with_single(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.single.insert(name.into(), value.into());
        self
    }

    /// Add a multi-valued attribute, keeping tag order
    #[must_use]
    pub fn with_multi<I, S>(mut self, name: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.multi
            .insert(name.into(), tags.into_iter().map(Into::into).collect());
        self
    }

    /// Parse one `|`-separated catalog record against a schema
    ///
    /// Layout: `identifier|display name|image ref|<one field per attribute>`.
    /// Multi-valued fields are `,`-separated tag lists.
    ///
    /// # Errors
    /// Returns `RecordError` if the field count does not match the schema or
    /// the identifier or name is blank.
    ///
    /// # Examples
    /// ```
    /// use champdle::core::{AttributeKind, Entity, Schema};
    ///
    /// let schema = Schema::new([("gender", AttributeKind::Single), ("role", AttributeKind::Multi)]);
    /// let entity = Entity::parse_record("jax|Jax|jax.png|Male|Top, Jungle", &schema).unwrap();
    ///
    /// assert_eq!(entity.display_name(), "Jax");
    /// assert_eq!(entity.multi("role").unwrap(), ["Top", "Jungle"]);
    /// ```
    pub fn parse_record(record: &str, schema: &Schema) -> Result<Self, RecordError> {
        let fields: Vec<&str> = record.split(FIELD_SEPARATOR).map(str::trim).collect();

        let expected = FIXED_FIELDS + schema.len();
        if fields.len() != expected {
            return Err(RecordError::FieldCount {
                expected,
                found: fields.len(),
            });
        }
        if fields[0].is_empty() {
            return Err(RecordError::EmptyIdentifier);
        }
        if fields[1].is_empty() {
            return Err(RecordError::EmptyName);
        }

        let mut entity = Self::new(fields[0], fields[1], fields[2]);
        for (attribute, &raw) in schema.iter().zip(&fields[FIXED_FIELDS..]) {
            entity = match attribute.kind() {
                AttributeKind::Single => entity.with_single(attribute.name(), raw),
                AttributeKind::Multi => entity.with_multi(
                    attribute.name(),
                    raw.split(TAG_SEPARATOR)
                        .map(str::trim)
                        .filter(|tag| !tag.is_empty()),
                ),
            };
        }

        Ok(entity)
    }

    #[inline]
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[inline]
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Opaque asset reference; never interpreted by the game logic
    #[inline]
    #[must_use]
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    /// Value of a single-valued attribute
    #[must_use]
    pub fn single(&self, name: &str) -> Option<&str> {
        self.single.get(name).map(String::as_str)
    }

    /// Tags of a multi-valued attribute, in declared order
    #[must_use]
    pub fn multi(&self, name: &str) -> Option<&[String]> {
        self.multi.get(name).map(Vec::as_slice)
    }

    /// Human-readable value of any attribute (tags joined with ", ")
    #[must_use]
    pub fn display_value(&self, name: &str) -> String {
        if let Some(value) = self.single(name) {
            value.to_string()
        } else {
            self.multi(name).map(|tags| tags.join(", ")).unwrap_or_default()
        }
    }

    /// Check whether this entity carries every attribute of the schema
    #[must_use]
    pub fn conforms_to(&self, schema: &Schema) -> bool {
        schema.iter().all(|attribute| match attribute.kind() {
            AttributeKind::Single => self.single.contains_key(attribute.name()),
            AttributeKind::Multi => self.multi.contains_key(attribute.name()),
        })
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for Entity {}

impl Hash for Entity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}
