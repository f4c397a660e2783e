//! Core domain types for the guessing game
//!
//! This module contains the entity model, the attribute schema and the guess
//! evaluator. Everything here is pure and has no I/O.

mod entity;
mod schema;
mod verdict;

pub use entity::{Entity, FIELD_SEPARATOR, RecordError, TAG_SEPARATOR};
pub use schema::{Attribute, AttributeKind, CHAMPION_ATTRIBUTES, Schema};
pub use verdict::{
    AttributeVerdict, GuessResult, MatchVerdict, VerdictCounts, compare_attributes, evaluate,
};
