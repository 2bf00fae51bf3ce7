//! Entity identifiers.
//!
//! An id is a kind plus a number. Two serialized shapes map to it: the
//! canonical string form (`"Q42"`) and the legacy pair form
//! `["item", 42]`. Once constructed, ids from either origin are
//! indistinguishable and interchangeable.

use std::fmt;

use thiserror::Error;

use crate::de::EntityIdParser;

/// The kind of entity an id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Item,
    Property,
}

impl EntityKind {
    /// Creates a kind from its legacy serialized name.
    pub fn from_legacy_name(name: &str) -> Option<EntityKind> {
        match name {
            "item" => Some(EntityKind::Item),
            "property" => Some(EntityKind::Property),
            _ => None,
        }
    }

    /// Returns the canonical id prefix letter for this kind.
    pub fn prefix(self) -> char {
        match self {
            EntityKind::Item => 'Q',
            EntityKind::Property => 'P',
        }
    }
}

/// A typed entity identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId {
    kind: EntityKind,
    number: u64,
}

impl EntityId {
    /// Creates an id from its kind and numeric part.
    pub fn new(kind: EntityKind, number: u64) -> Self {
        Self { kind, number }
    }

    /// Creates an id from the legacy `(kind name, number)` pair parts.
    pub fn from_legacy_parts(kind: &str, number: u64) -> Result<EntityId, EntityIdParseError> {
        match EntityKind::from_legacy_name(kind) {
            Some(kind) => Ok(EntityId::new(kind, number)),
            None => Err(EntityIdParseError(format!(
                "'{kind}' is not a known entity kind"
            ))),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn number(&self) -> u64 {
        self.number
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.number)
    }
}

/// Error for an id serialization that could not be interpreted.
///
/// Also the error type spoken by [`EntityIdParser`] collaborators, so
/// external parser failures carry their message through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct EntityIdParseError(pub String);

/// Minimal parser for canonical textual ids: a kind prefix letter
/// followed by the decimal number. Prefixes are accepted
/// case-insensitively (`"q42"` parses like `"Q42"`).
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicEntityIdParser;

impl BasicEntityIdParser {
    pub fn new() -> Self {
        Self
    }
}

impl EntityIdParser for BasicEntityIdParser {
    fn parse(&self, id: &str) -> Result<EntityId, EntityIdParseError> {
        let mut chars = id.chars();
        let kind = match chars.next() {
            Some('Q' | 'q') => EntityKind::Item,
            Some('P' | 'p') => EntityKind::Property,
            _ => {
                return Err(EntityIdParseError(format!(
                    "'{id}' has no known entity id prefix"
                )));
            }
        };

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EntityIdParseError(format!(
                "'{id}' is not a valid entity id"
            )));
        }

        let number: u64 = digits
            .parse()
            .map_err(|_| EntityIdParseError(format!("entity id number in '{id}' is out of range")))?;

        Ok(EntityId::new(kind, number))
    }
}
