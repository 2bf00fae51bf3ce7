//! Legacy snak and snak list deserialization.
//!
//! A legacy snak is a tuple `[kind, property, …]`: `["novalue", 42]`,
//! `["somevalue", 1337]` or `["value", 7, type, payload]`. For value
//! snaks the type and payload are reassembled into a
//! `{"type": …, "value": …}` mapping and handed to the data value
//! collaborator.

use std::sync::Arc;

use serde_json::Value;

use crate::de::{DataValueDeserializer, Deserializer};
use crate::error::DecodeError;
use crate::model::Snak;

/// Decodes one legacy snak tuple.
pub struct LegacySnakDeserializer {
    data_value: Arc<dyn DataValueDeserializer>,
}

impl LegacySnakDeserializer {
    pub fn new(data_value: Arc<dyn DataValueDeserializer>) -> Self {
        Self { data_value }
    }

    fn data_value_record(kind: &Value, payload: &Value) -> Value {
        let mut record = serde_json::Map::new();
        record.insert("type".to_string(), kind.clone());
        record.insert("value".to_string(), payload.clone());
        Value::Object(record)
    }
}

impl Deserializer for LegacySnakDeserializer {
    type Output = Snak;

    fn deserialize(&self, value: &Value) -> Result<Snak, DecodeError> {
        let tuple = value.as_array().ok_or(DecodeError::ShapeMismatch {
            what: "snak",
            expected: "an array",
        })?;
        if tuple.len() < 2 {
            return Err(DecodeError::ShapeMismatch {
                what: "snak",
                expected: "an array with at least two elements",
            });
        }

        let kind = tuple[0]
            .as_str()
            .ok_or_else(|| DecodeError::invalid("snak type", &tuple[0], "should be a string"))?;
        let property = tuple[1].as_u64().ok_or_else(|| {
            DecodeError::invalid("property", &tuple[1], "should be an unsigned integer")
        })?;

        match kind {
            "novalue" => Ok(Snak::NoValue { property }),
            "somevalue" => Ok(Snak::SomeValue { property }),
            "value" => {
                if tuple.len() < 4 {
                    return Err(DecodeError::ShapeMismatch {
                        what: "value snak",
                        expected: "an array with at least four elements",
                    });
                }
                let record = Self::data_value_record(&tuple[2], &tuple[3]);
                let value = self.data_value.deserialize(&record)?;
                Ok(Snak::Value { property, value })
            }
            _ => Err(DecodeError::invalid(
                "snak type",
                &tuple[0],
                "is not a known snak type",
            )),
        }
    }
}

/// Decodes an ordered sequence of legacy snak tuples.
///
/// Fails at the first invalid element, reporting its position and the
/// underlying cause; no partial list is returned.
pub struct LegacySnakListDeserializer {
    snak: Box<dyn Deserializer<Output = Snak>>,
}

impl LegacySnakListDeserializer {
    pub fn new(snak: Box<dyn Deserializer<Output = Snak>>) -> Self {
        Self { snak }
    }
}

impl Deserializer for LegacySnakListDeserializer {
    type Output = Vec<Snak>;

    fn deserialize(&self, value: &Value) -> Result<Vec<Snak>, DecodeError> {
        // A mapping is rejected even if its keys look array-like.
        let list = value.as_array().ok_or(DecodeError::ShapeMismatch {
            what: "snak list",
            expected: "an array",
        })?;

        list.iter()
            .enumerate()
            .map(|(position, element)| {
                self.snak
                    .deserialize(element)
                    .map_err(|cause| DecodeError::at_position(position, cause))
            })
            .collect()
    }
}
