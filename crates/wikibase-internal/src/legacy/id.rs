//! Legacy entity id deserialization.
//!
//! Legacy records carry entity ids in one of two shapes: the canonical
//! string form (`"Q42"`), handed to the external id parser, or the
//! legacy pair form `["item", 42]`, interpreted locally.

use std::sync::Arc;

use serde_json::Value;

use crate::de::{Deserializer, DispatchableDeserializer, EntityIdParser};
use crate::error::DecodeError;
use crate::model::{EntityId, EntityIdParseError};

/// Decodes an [`EntityId`] from either serialized shape.
pub struct LegacyEntityIdDeserializer {
    id_parser: Arc<dyn EntityIdParser>,
}

impl LegacyEntityIdDeserializer {
    pub fn new(id_parser: Arc<dyn EntityIdParser>) -> Self {
        Self { id_parser }
    }

    fn from_pair(&self, pair: &[Value]) -> Result<EntityId, DecodeError> {
        let kind = pair[0].as_str().ok_or_else(|| {
            EntityIdParseError("legacy entity id kind should be a string".to_string())
        })?;
        let number = pair[1].as_u64().ok_or_else(|| {
            EntityIdParseError("legacy entity id number should be an unsigned integer".to_string())
        })?;

        Ok(EntityId::from_legacy_parts(kind, number)?)
    }
}

impl Deserializer for LegacyEntityIdDeserializer {
    type Output = EntityId;

    fn deserialize(&self, value: &Value) -> Result<EntityId, DecodeError> {
        if let Some(id) = value.as_str() {
            return Ok(self.id_parser.parse(id)?);
        }

        match value.as_array() {
            Some(pair) if pair.len() == 2 => self.from_pair(pair),
            _ => Err(DecodeError::UnrecognizedFormat { what: "entity id" }),
        }
    }
}

impl DispatchableDeserializer for LegacyEntityIdDeserializer {
    /// Recognizes the legacy pair shape without decoding it, so the
    /// deserializer can sit in a dispatch table that tries id encodings
    /// by shape.
    fn is_deserializer_for(&self, value: &Value) -> bool {
        value.as_array().is_some_and(|pair| pair.len() == 2)
    }
}
