//! Snaks: atomic property/value assertion units within claims.

use serde_json::Value;
use thiserror::Error;

/// An opaque typed data value produced by the data value collaborator.
///
/// This crate never inspects the payload; it only carries it inside
/// value snaks.
#[derive(Debug, Clone, PartialEq)]
pub struct DataValue {
    /// The value type name (`"string"`, `"time"`, `"quantity"`, …).
    pub kind: String,
    /// The raw value payload, interpreted only by the collaborator.
    pub value: Value,
}

impl DataValue {
    pub fn new(kind: impl Into<String>, value: Value) -> Self {
        Self {
            kind: kind.into(),
            value,
        }
    }
}

/// Error produced by a data value collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct DataValueError(pub String);

/// A property/value assertion, tagged by how much is known about the
/// property's value.
#[derive(Debug, Clone, PartialEq)]
pub enum Snak {
    /// The property is known to have no value.
    NoValue { property: u64 },
    /// The property has some value, but it is unknown.
    SomeValue { property: u64 },
    /// The property has the given value.
    Value { property: u64, value: DataValue },
}

impl Snak {
    /// Returns the numeric id of the property this snak is about.
    pub fn property(&self) -> u64 {
        match self {
            Snak::NoValue { property }
            | Snak::SomeValue { property }
            | Snak::Value { property, .. } => *property,
        }
    }
}
