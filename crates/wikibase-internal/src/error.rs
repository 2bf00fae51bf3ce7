//! Error types for internal-format deserialization.

use thiserror::Error;

use crate::model::{DataValueError, EntityIdParseError};

/// Error during deserialization of an untyped record.
///
/// Every variant carries enough structure (key name, element position,
/// wrapped cause) for callers to build a diagnostic without re-parsing
/// the input. No deserializer ever returns a partial result alongside
/// one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// The record (or a sub-value) is not the expected container kind.
    #[error("{what} serialization should be {expected}")]
    ShapeMismatch {
        what: &'static str,
        expected: &'static str,
    },

    /// A required key is absent from a mapping. Absence is distinct from
    /// a key that is present with a null value.
    #[error("attribute '{key}' is missing")]
    MissingAttribute { key: &'static str },

    /// A key is present but its value fails a shape or semantic constraint.
    #[error("invalid attribute '{key}': {reason}")]
    InvalidAttribute {
        key: String,
        value: serde_json::Value,
        reason: &'static str,
    },

    /// An element within a sequence failed to decode.
    #[error("element at position {position} is invalid")]
    ElementDecodeFailure {
        position: usize,
        #[source]
        cause: Box<DecodeError>,
    },

    /// No known format matched the record and every fallback attempt failed.
    #[error("the provided serialization is not a valid {what}")]
    UnrecognizedFormat { what: &'static str },

    /// The entity id parser collaborator rejected an id serialization.
    #[error("entity id deserialization failed: {0}")]
    IdParse(#[from] EntityIdParseError),

    /// The data value collaborator rejected a value serialization.
    #[error("data value deserialization failed: {0}")]
    DataValue(#[from] DataValueError),
}

impl DecodeError {
    /// Shorthand for [`DecodeError::InvalidAttribute`], cloning the
    /// offending value out of the record.
    pub(crate) fn invalid(
        key: impl Into<String>,
        value: &serde_json::Value,
        reason: &'static str,
    ) -> Self {
        DecodeError::InvalidAttribute {
            key: key.into(),
            value: value.clone(),
            reason,
        }
    }

    /// Wraps a sequence element failure with its position.
    pub(crate) fn at_position(position: usize, cause: DecodeError) -> Self {
        DecodeError::ElementDecodeFailure {
            position,
            cause: Box::new(cause),
        }
    }
}
