//! Legacy entity deserialization: item/property dispatch.
//!
//! Legacy entity records carry no type tag. Properties are the only
//! legacy entities with a `datatype`, so its presence decides the kind.

use serde_json::Value;

use crate::de::{Deserializer, DispatchableDeserializer};
use crate::error::DecodeError;
use crate::model::{Entity, Item, Property};

/// Keys that only occur in legacy entity records (the current format
/// nests terms under plural keys and uses `id` instead of `entity`).
const LEGACY_ENTITY_KEYS: [&str; 6] = [
    "entity",
    "label",
    "description",
    "aliases",
    "links",
    "datatype",
];

/// Decodes a legacy entity record of either kind.
pub struct LegacyEntityDeserializer {
    item: Box<dyn Deserializer<Output = Item>>,
    property: Box<dyn Deserializer<Output = Property>>,
}

impl LegacyEntityDeserializer {
    pub fn new(
        item: Box<dyn Deserializer<Output = Item>>,
        property: Box<dyn Deserializer<Output = Property>>,
    ) -> Self {
        Self { item, property }
    }
}

impl Deserializer for LegacyEntityDeserializer {
    type Output = Entity;

    fn deserialize(&self, value: &Value) -> Result<Entity, DecodeError> {
        let record = value.as_object().ok_or(DecodeError::ShapeMismatch {
            what: "entity",
            expected: "a map",
        })?;

        if record.contains_key("datatype") {
            Ok(Entity::Property(self.property.deserialize(value)?))
        } else {
            Ok(Entity::Item(self.item.deserialize(value)?))
        }
    }
}

impl DispatchableDeserializer for LegacyEntityDeserializer {
    fn is_deserializer_for(&self, value: &Value) -> bool {
        value.as_object().is_some_and(|record| {
            LEGACY_ENTITY_KEYS
                .iter()
                .any(|key| record.contains_key(*key))
        })
    }
}
