//! Legacy fingerprint deserialization.
//!
//! Legacy records spread terms across the top-level keys `label`,
//! `description` and `aliases` instead of nesting them under one
//! fingerprint key, so this deserializer is handed the whole entity
//! record. All three keys are independently optional; absence yields an
//! empty component.

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};

use crate::de::Deserializer;
use crate::error::DecodeError;
use crate::model::Fingerprint;

/// Decodes a [`Fingerprint`] from an entity record's top-level keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyFingerprintDeserializer;

impl LegacyFingerprintDeserializer {
    pub fn new() -> Self {
        Self
    }
}

impl Deserializer for LegacyFingerprintDeserializer {
    type Output = Fingerprint;

    fn deserialize(&self, value: &Value) -> Result<Fingerprint, DecodeError> {
        let record = value.as_object().ok_or(DecodeError::ShapeMismatch {
            what: "fingerprint",
            expected: "a map",
        })?;

        Ok(Fingerprint {
            labels: decode_term_map(record, "label")?,
            descriptions: decode_term_map(record, "description")?,
            aliases: decode_alias_map(record)?,
        })
    }
}

fn decode_term_map(
    record: &Map<String, Value>,
    key: &'static str,
) -> Result<FxHashMap<String, String>, DecodeError> {
    let Some(value) = record.get(key) else {
        return Ok(FxHashMap::default());
    };
    let map = value.as_object().ok_or_else(|| {
        DecodeError::invalid(key, value, "should be a map of language codes to strings")
    })?;

    let mut terms = FxHashMap::default();
    for (language, text) in map {
        let text = text
            .as_str()
            .ok_or_else(|| DecodeError::invalid(language, text, "term text should be a string"))?;
        terms.insert(language.clone(), text.to_string());
    }
    Ok(terms)
}

fn decode_alias_map(
    record: &Map<String, Value>,
) -> Result<FxHashMap<String, Vec<String>>, DecodeError> {
    let Some(value) = record.get("aliases") else {
        return Ok(FxHashMap::default());
    };
    let map = value.as_object().ok_or_else(|| {
        DecodeError::invalid(
            "aliases",
            value,
            "should be a map of language codes to string arrays",
        )
    })?;

    let mut aliases = FxHashMap::default();
    for (language, texts) in map {
        let group = texts.as_array().ok_or_else(|| {
            DecodeError::invalid(language, texts, "alias group should be an array")
        })?;

        let mut decoded = Vec::with_capacity(group.len());
        for text in group {
            let text = text.as_str().ok_or_else(|| {
                DecodeError::invalid(language, text, "alias should be a string")
            })?;
            decoded.push(text.to_string());
        }
        aliases.insert(language.clone(), decoded);
    }
    Ok(aliases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn deserialize(value: Value) -> Result<Fingerprint, DecodeError> {
        LegacyFingerprintDeserializer::new().deserialize(&value)
    }

    #[test]
    fn test_empty_record_yields_empty_fingerprint() {
        assert_eq!(deserialize(json!({})), Ok(Fingerprint::new()));
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        let fingerprint = deserialize(json!({"entity": "Q42", "links": {}})).unwrap();
        assert!(fingerprint.is_empty());
    }

    #[test]
    fn test_labels_and_descriptions() {
        let fingerprint = deserialize(json!({
            "label": {"en": "foo", "de": "bar"},
            "description": {"en": "a foo"},
        }))
        .unwrap();

        assert_eq!(fingerprint.labels.len(), 2);
        assert_eq!(fingerprint.labels["en"], "foo");
        assert_eq!(fingerprint.labels["de"], "bar");
        assert_eq!(fingerprint.descriptions["en"], "a foo");
        assert!(fingerprint.aliases.is_empty());
    }

    #[test]
    fn test_aliases_preserve_order_and_duplicates() {
        let fingerprint = deserialize(json!({
            "aliases": {
                "en": ["foo", "bar", "foo"],
                "nl": ["bah"],
            },
        }))
        .unwrap();

        assert_eq!(fingerprint.aliases["en"], ["foo", "bar", "foo"]);
        assert_eq!(fingerprint.aliases["nl"], ["bah"]);
    }

    #[test]
    fn test_non_map_record_is_a_shape_mismatch() {
        assert!(matches!(
            deserialize(json!(null)),
            Err(DecodeError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_present_keys_must_have_the_right_shape() {
        for record in [
            json!({"label": null}),
            json!({"label": ["foo"]}),
            json!({"description": null}),
            json!({"aliases": null}),
            json!({"aliases": {"en": "not-an-array"}}),
        ] {
            assert!(
                matches!(
                    deserialize(record.clone()),
                    Err(DecodeError::InvalidAttribute { .. })
                ),
                "record: {record}"
            );
        }
    }

    proptest! {
        /// Any map of language codes to strings decodes to a label map
        /// with exactly the same entries.
        #[test]
        fn prop_label_maps_decode_verbatim(
            labels in prop::collection::hash_map("[a-z]{2}(-[a-z]{2,8})?", ".*", 0..8),
        ) {
            let fingerprint = LegacyFingerprintDeserializer::new()
                .deserialize(&json!({"label": labels.clone()}))
                .unwrap();

            prop_assert_eq!(fingerprint.labels.len(), labels.len());
            for (language, text) in &labels {
                prop_assert_eq!(fingerprint.labels.get(language), Some(text));
            }
            prop_assert!(fingerprint.descriptions.is_empty());
            prop_assert!(fingerprint.aliases.is_empty());
        }
    }

    #[test]
    fn test_term_errors_name_the_language_key() {
        let result = deserialize(json!({"label": {"en": "foo", "de": 7}}));
        match result {
            Err(DecodeError::InvalidAttribute { key, .. }) => assert_eq!(key, "de"),
            other => panic!("unexpected result: {other:?}"),
        }

        let result = deserialize(json!({"aliases": {"en": ["foo", null]}}));
        match result {
            Err(DecodeError::InvalidAttribute { key, .. }) => assert_eq!(key, "en"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
