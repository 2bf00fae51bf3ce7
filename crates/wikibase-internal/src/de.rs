//! Capability traits for deserializers and their collaborators.
//!
//! Every deserializer receives its dependencies through these interfaces
//! at construction time and is immutable afterwards; there is no global
//! registry and no runtime reconfiguration. All implementations must be
//! shareable across threads, which is why the traits require
//! `Send + Sync`.

use serde_json::Value;

use crate::error::DecodeError;
use crate::model::{DataValue, DataValueError, EntityId, EntityIdParseError};

/// A deserializer from an untyped record to one output type.
///
/// Implementations are pure functions of their input: no I/O, no shared
/// mutable state, no partial results on failure.
pub trait Deserializer: Send + Sync {
    type Output;

    fn deserialize(&self, value: &Value) -> Result<Self::Output, DecodeError>;
}

/// A deserializer that can also report, from key shape alone, whether a
/// record looks like its format.
///
/// Routers hold an ordered list of these and consult the predicates
/// before attempting any decode, which keeps format precedence explicit
/// and independently testable.
pub trait DispatchableDeserializer: Deserializer {
    fn is_deserializer_for(&self, value: &Value) -> bool;
}

/// Collaborator that parses the canonical textual form of entity ids
/// (`"Q42"`, `"P31"`).
pub trait EntityIdParser: Send + Sync {
    fn parse(&self, id: &str) -> Result<EntityId, EntityIdParseError>;
}

/// Collaborator that decodes leaf data values (typed literals such as
/// strings, quantities, times, coordinates).
///
/// The legacy snak deserializer hands it a `{"type": …, "value": …}`
/// mapping assembled from the snak tuple. Its error type is separate from
/// [`DecodeError`] so collaborator failures stay distinguishable from the
/// core's own errors once wrapped.
pub trait DataValueDeserializer: Send + Sync {
    fn deserialize(&self, value: &Value) -> Result<DataValue, DataValueError>;
}
