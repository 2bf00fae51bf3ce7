//! Legacy property deserialization.

use serde_json::Value;

use crate::de::Deserializer;
use crate::error::DecodeError;
use crate::legacy::item::decode_claims;
use crate::model::{ClaimOrStatement, EntityId, EntityKind, Fingerprint, Property};

/// Decodes a legacy property record.
///
/// `datatype` is required and checked before any other field; everything
/// else is optional. A decoded `entity` id must be property-kind.
pub struct LegacyPropertyDeserializer {
    id: Box<dyn Deserializer<Output = EntityId>>,
    statement: Box<dyn Deserializer<Output = ClaimOrStatement>>,
    fingerprint: Box<dyn Deserializer<Output = Fingerprint>>,
}

impl LegacyPropertyDeserializer {
    pub fn new(
        id: Box<dyn Deserializer<Output = EntityId>>,
        statement: Box<dyn Deserializer<Output = ClaimOrStatement>>,
        fingerprint: Box<dyn Deserializer<Output = Fingerprint>>,
    ) -> Self {
        Self {
            id,
            statement,
            fingerprint,
        }
    }
}

impl Deserializer for LegacyPropertyDeserializer {
    type Output = Property;

    fn deserialize(&self, value: &Value) -> Result<Property, DecodeError> {
        let record = value.as_object().ok_or(DecodeError::ShapeMismatch {
            what: "property",
            expected: "a map",
        })?;

        let data_type = match record.get("datatype") {
            None => return Err(DecodeError::MissingAttribute { key: "datatype" }),
            Some(Value::String(data_type)) => data_type.clone(),
            Some(other) => {
                return Err(DecodeError::invalid(
                    "datatype",
                    other,
                    "should point to a string",
                ));
            }
        };

        let mut property = Property::with_data_type(data_type);
        if let Some(id_value) = record.get("entity") {
            let id = self.id.deserialize(id_value)?;
            if id.kind() != EntityKind::Property {
                return Err(DecodeError::invalid(
                    "entity",
                    id_value,
                    "properties should have a property id",
                ));
            }
            property.id = Some(id);
        }
        property.claims = decode_claims(record, self.statement.as_ref())?;
        property.fingerprint = self.fingerprint.deserialize(value)?;

        Ok(property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legacy::test_support::new_legacy_factory;
    use serde_json::json;

    fn deserialize(value: Value) -> Result<Property, DecodeError> {
        new_legacy_factory()
            .property_deserializer()
            .deserialize(&value)
    }

    #[test]
    fn test_null_is_a_shape_mismatch() {
        assert!(matches!(
            deserialize(json!(null)),
            Err(DecodeError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_missing_datatype_is_reported_even_when_everything_else_is_valid() {
        assert_eq!(
            deserialize(json!({})),
            Err(DecodeError::MissingAttribute { key: "datatype" })
        );
        assert_eq!(
            deserialize(json!({
                "entity": "P42",
                "label": {"en": "foo"},
            })),
            Err(DecodeError::MissingAttribute { key: "datatype" })
        );
    }

    #[test]
    fn test_non_string_datatype_is_invalid() {
        assert!(matches!(
            deserialize(json!({"datatype": null})),
            Err(DecodeError::InvalidAttribute { .. })
        ));
    }

    #[test]
    fn test_datatype_is_set() {
        let property = deserialize(json!({"datatype": "foo"})).unwrap();
        assert_eq!(property.data_type, "foo");
        assert!(property.id.is_none());
    }

    #[test]
    fn test_entity_key_sets_a_property_id() {
        let property = deserialize(json!({"datatype": "foo", "entity": "p42"})).unwrap();
        assert_eq!(property.id.unwrap().to_string(), "P42");

        let property = deserialize(json!({"datatype": "foo", "entity": ["property", 1]})).unwrap();
        assert_eq!(property.id.unwrap().to_string(), "P1");
    }

    #[test]
    fn test_item_id_under_a_property_record_is_rejected() {
        let result = deserialize(json!({"datatype": "foo", "entity": "q42"}));
        match result {
            Err(DecodeError::InvalidAttribute { key, .. }) => assert_eq!(key, "entity"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_entity_id_is_rejected() {
        assert!(matches!(
            deserialize(json!({"datatype": "foo", "entity": "spam spam spam"})),
            Err(DecodeError::IdParse(_))
        ));
    }

    #[test]
    fn test_fingerprint_is_read_from_the_top_level() {
        let property = deserialize(json!({
            "datatype": "foo",
            "label": {"en": "foo", "de": "bar"},
            "aliases": {"en": ["foo", "bar"]},
        }))
        .unwrap();

        assert_eq!(property.fingerprint.labels["de"], "bar");
        assert_eq!(property.fingerprint.aliases["en"], ["foo", "bar"]);
    }

    #[test]
    fn test_claims_are_decoded_with_the_rename_shim() {
        let property = deserialize(json!({
            "datatype": "foo",
            "statements": [{"m": ["novalue", 42], "q": [], "g": null}],
        }))
        .unwrap();

        assert_eq!(property.claims.len(), 1);
        assert_eq!(property.claims[0].claim().mainsnak.property(), 42);
    }

    #[test]
    fn test_invalid_term_maps_are_rejected() {
        for record in [
            json!({"datatype": "foo", "label": null}),
            json!({"datatype": "foo", "aliases": null}),
        ] {
            assert!(deserialize(record.clone()).is_err(), "record: {record}");
        }
    }
}
