//! Deserializers for the legacy internal serialization format.
//!
//! The legacy encoding predates the current one and uses short cryptic
//! keys (`m`, `q`, `g`), entity ids serialized as strings or as
//! `[kind, number]` pairs, terms spread over top-level keys, and the
//! historical `statements` name for the `claims` key. These
//! deserializers exist for compatibility with records of that era; they
//! make no attempt to normalize the two encodings into one schema.

pub mod entity;
pub mod fingerprint;
pub mod id;
pub mod item;
pub mod property;
pub mod sitelink;
pub mod snak;
pub mod statement;

pub use entity::LegacyEntityDeserializer;
pub use fingerprint::LegacyFingerprintDeserializer;
pub use id::LegacyEntityIdDeserializer;
pub use item::LegacyItemDeserializer;
pub use property::LegacyPropertyDeserializer;
pub use sitelink::LegacySiteLinkListDeserializer;
pub use snak::{LegacySnakDeserializer, LegacySnakListDeserializer};
pub use statement::LegacyStatementDeserializer;

use std::sync::Arc;

use crate::de::{DataValueDeserializer, EntityIdParser};

/// Constructs fully wired legacy-format deserializers.
///
/// The two collaborators are fixed at construction and shared by every
/// deserializer the factory produces; each accessor returns a freshly
/// wired decoder graph.
pub struct LegacyDeserializerFactory {
    data_value: Arc<dyn DataValueDeserializer>,
    id_parser: Arc<dyn EntityIdParser>,
}

impl LegacyDeserializerFactory {
    pub fn new(
        data_value: Arc<dyn DataValueDeserializer>,
        id_parser: Arc<dyn EntityIdParser>,
    ) -> Self {
        Self {
            data_value,
            id_parser,
        }
    }

    /// An entity deserializer dispatching between items and properties.
    pub fn entity_deserializer(&self) -> LegacyEntityDeserializer {
        LegacyEntityDeserializer::new(
            Box::new(self.item_deserializer()),
            Box::new(self.property_deserializer()),
        )
    }

    pub fn item_deserializer(&self) -> LegacyItemDeserializer {
        LegacyItemDeserializer::new(
            Box::new(self.entity_id_deserializer()),
            Box::new(LegacySiteLinkListDeserializer::new()),
            Box::new(self.statement_deserializer()),
            Box::new(LegacyFingerprintDeserializer::new()),
        )
    }

    pub fn property_deserializer(&self) -> LegacyPropertyDeserializer {
        LegacyPropertyDeserializer::new(
            Box::new(self.entity_id_deserializer()),
            Box::new(self.statement_deserializer()),
            Box::new(LegacyFingerprintDeserializer::new()),
        )
    }

    pub fn statement_deserializer(&self) -> LegacyStatementDeserializer {
        LegacyStatementDeserializer::new(
            Box::new(self.snak_deserializer()),
            Box::new(self.snak_list_deserializer()),
        )
    }

    pub fn snak_deserializer(&self) -> LegacySnakDeserializer {
        LegacySnakDeserializer::new(self.data_value.clone())
    }

    pub fn snak_list_deserializer(&self) -> LegacySnakListDeserializer {
        LegacySnakListDeserializer::new(Box::new(self.snak_deserializer()))
    }

    pub fn entity_id_deserializer(&self) -> LegacyEntityIdDeserializer {
        LegacyEntityIdDeserializer::new(self.id_parser.clone())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use serde_json::Value;

    use super::LegacyDeserializerFactory;
    use crate::de::DataValueDeserializer;
    use crate::model::{BasicEntityIdParser, DataValue, DataValueError};

    /// Wraps any `{"type": …, "value": …}` record without interpreting
    /// the payload, standing in for a real data value library.
    pub struct RawDataValueDeserializer;

    impl DataValueDeserializer for RawDataValueDeserializer {
        fn deserialize(&self, value: &Value) -> Result<DataValue, DataValueError> {
            let record = value
                .as_object()
                .ok_or_else(|| DataValueError("value record should be a map".to_string()))?;
            let kind = record
                .get("type")
                .and_then(Value::as_str)
                .ok_or_else(|| DataValueError("value record has no type".to_string()))?;
            let payload = record
                .get("value")
                .ok_or_else(|| DataValueError("value record has no value".to_string()))?;
            Ok(DataValue::new(kind, payload.clone()))
        }
    }

    pub fn new_legacy_factory() -> LegacyDeserializerFactory {
        LegacyDeserializerFactory::new(
            Arc::new(RawDataValueDeserializer),
            Arc::new(BasicEntityIdParser::new()),
        )
    }
}
