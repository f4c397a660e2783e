//! Attribute schema shared by every entity in a catalog
//!
//! The schema is an ordered list of (attribute name, comparison kind) pairs.
//! Evaluation iterates it, so adding an attribute is a schema entry plus a data
//! column and nothing else.

use std::fmt;

/// How an attribute is compared between a guess and the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// One scalar value, compared by strict equality
    Single,
    /// Ordered tag list, compared by ordered equality then set overlap
    Multi,
}

/// A named attribute in the schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    kind: AttributeKind,
}

impl Attribute {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> AttributeKind {
        self.kind
    }

    /// Column header used by the front ends ("release_year" -> "Release Year")
    #[must_use]
    pub fn label(&self) -> String {
        self.name
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars).collect()
                })
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Attributes of the bundled champion dataset, in record column order
pub const CHAMPION_ATTRIBUTES: &[(&str, AttributeKind)] = &[
    ("gender", AttributeKind::Single),
    ("position", AttributeKind::Multi),
    ("species", AttributeKind::Multi),
    ("resource", AttributeKind::Multi),
    ("range_type", AttributeKind::Multi),
    ("region", AttributeKind::Multi),
    ("release_year", AttributeKind::Single),
];

/// Ordered attribute schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    attributes: Vec<Attribute>,
}

impl Schema {
    /// Build a schema from (name, kind) pairs, keeping their order
    ///
    /// # Examples
    /// ```
    /// use champdle::core::{AttributeKind, Schema};
    ///
    /// let schema = Schema::new([("gender", AttributeKind::Single), ("role", AttributeKind::Multi)]);
    /// assert_eq!(schema.len(), 2);
    /// assert_eq!(schema.get("role").map(|a| a.kind()), Some(AttributeKind::Multi));
    /// ```
    pub fn new<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (S, AttributeKind)>,
        S: Into<String>,
    {
        Self {
            attributes: attributes
                .into_iter()
                .map(|(name, kind)| Attribute::new(name, kind))
                .collect(),
        }
    }

    /// Schema of the bundled champion dataset
    #[must_use]
    pub fn champions() -> Self {
        Self::new(CHAMPION_ATTRIBUTES.iter().copied())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Multi => write!(f, "multi"),
        }
    }
}
