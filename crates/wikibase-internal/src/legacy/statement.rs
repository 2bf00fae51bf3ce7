//! Legacy claim/statement deserialization.
//!
//! A legacy claim record is a mapping with the keys `m` (mainsnak tuple),
//! `q` (qualifier snak list) and `g` (guid, string or null). Records that
//! additionally carry `rank` or `refs` decode to a statement; legacy
//! records have no explicit type tag, so the upgrade is decided purely by
//! key presence.

use serde_json::Value;

use crate::de::{Deserializer, DispatchableDeserializer};
use crate::error::DecodeError;
use crate::model::{Claim, ClaimOrStatement, Rank, Reference, Snak, Statement};

/// Decodes a single legacy claim/statement record.
pub struct LegacyStatementDeserializer {
    snak: Box<dyn Deserializer<Output = Snak>>,
    snak_list: Box<dyn Deserializer<Output = Vec<Snak>>>,
}

impl LegacyStatementDeserializer {
    pub fn new(
        snak: Box<dyn Deserializer<Output = Snak>>,
        snak_list: Box<dyn Deserializer<Output = Vec<Snak>>>,
    ) -> Self {
        Self { snak, snak_list }
    }

    fn decode_references(&self, value: &Value) -> Result<Vec<Reference>, DecodeError> {
        let groups = value
            .as_array()
            .ok_or_else(|| DecodeError::invalid("refs", value, "should point to an array"))?;

        groups
            .iter()
            .enumerate()
            .map(|(position, group)| {
                self.snak_list
                    .deserialize(group)
                    .map(Reference::new)
                    .map_err(|cause| DecodeError::at_position(position, cause))
            })
            .collect()
    }
}

fn decode_guid(value: &Value) -> Result<Option<String>, DecodeError> {
    match value {
        Value::Null => Ok(None),
        Value::String(guid) => Ok(Some(guid.clone())),
        other => Err(DecodeError::invalid(
            "g",
            other,
            "should be a string or null",
        )),
    }
}

fn decode_rank(value: &Value) -> Result<Rank, DecodeError> {
    let rank = match value {
        Value::Number(number) => number.as_u64().and_then(Rank::from_int),
        Value::String(name) => Rank::from_name(name),
        _ => None,
    };

    rank.ok_or_else(|| DecodeError::invalid("rank", value, "is not a known statement rank"))
}

impl Deserializer for LegacyStatementDeserializer {
    type Output = ClaimOrStatement;

    fn deserialize(&self, value: &Value) -> Result<ClaimOrStatement, DecodeError> {
        let record = value.as_object().ok_or(DecodeError::ShapeMismatch {
            what: "claim",
            expected: "a map",
        })?;

        let mainsnak = record
            .get("m")
            .ok_or(DecodeError::MissingAttribute { key: "m" })?;
        let qualifiers = record
            .get("q")
            .ok_or(DecodeError::MissingAttribute { key: "q" })?;
        let guid = record
            .get("g")
            .ok_or(DecodeError::MissingAttribute { key: "g" })?;

        let claim = Claim {
            mainsnak: self.snak.deserialize(mainsnak)?,
            qualifiers: self.snak_list.deserialize(qualifiers)?,
            guid: decode_guid(guid)?,
        };

        if !record.contains_key("rank") && !record.contains_key("refs") {
            return Ok(ClaimOrStatement::Claim(claim));
        }

        let rank = match record.get("rank") {
            Some(value) => decode_rank(value)?,
            None => Rank::Normal,
        };
        let references = match record.get("refs") {
            Some(value) => self.decode_references(value)?,
            None => Vec::new(),
        };

        Ok(ClaimOrStatement::Statement(Statement {
            claim,
            rank,
            references,
        }))
    }
}

impl DispatchableDeserializer for LegacyStatementDeserializer {
    fn is_deserializer_for(&self, value: &Value) -> bool {
        value.as_object().is_some_and(|record| record.contains_key("m"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::de::DataValueDeserializer;
    use crate::legacy::{LegacySnakDeserializer, LegacySnakListDeserializer};
    use crate::model::{DataValue, DataValueError};
    use serde_json::json;
    use std::sync::Arc;

    struct RejectingDataValueDeserializer;

    impl DataValueDeserializer for RejectingDataValueDeserializer {
        fn deserialize(&self, _: &Value) -> Result<DataValue, DataValueError> {
            Err(DataValueError("no data values in these tests".to_string()))
        }
    }

    fn new_deserializer() -> LegacyStatementDeserializer {
        let data_value: Arc<dyn DataValueDeserializer> = Arc::new(RejectingDataValueDeserializer);
        LegacyStatementDeserializer::new(
            Box::new(LegacySnakDeserializer::new(data_value.clone())),
            Box::new(LegacySnakListDeserializer::new(Box::new(
                LegacySnakDeserializer::new(data_value),
            ))),
        )
    }

    #[test]
    fn test_record_without_rank_or_refs_is_a_claim() {
        let result = new_deserializer().deserialize(&json!({
            "m": ["novalue", 42],
            "q": [],
            "g": null,
        }));

        assert_eq!(
            result,
            Ok(ClaimOrStatement::Claim(Claim::new(Snak::NoValue {
                property: 42
            })))
        );
    }

    #[test]
    fn test_qualifiers_and_guid_are_decoded() {
        let result = new_deserializer().deserialize(&json!({
            "m": ["novalue", 42],
            "q": [["novalue", 23], ["novalue", 1337]],
            "g": "foo bar baz",
        }));

        let mut expected = Claim::new(Snak::NoValue { property: 42 });
        expected.qualifiers = vec![
            Snak::NoValue { property: 23 },
            Snak::NoValue { property: 1337 },
        ];
        expected.guid = Some("foo bar baz".to_string());

        assert_eq!(result, Ok(ClaimOrStatement::Claim(expected)));
    }

    #[test]
    fn test_rank_and_refs_upgrade_the_claim_to_a_statement() {
        let result = new_deserializer().deserialize(&json!({
            "m": ["novalue", 42],
            "q": [],
            "g": "foo",
            "rank": "preferred",
            "refs": [[["novalue", 1], ["novalue", 2]]],
        }));

        let mut claim = Claim::new(Snak::NoValue { property: 42 });
        claim.guid = Some("foo".to_string());
        let expected = Statement {
            claim,
            rank: Rank::Preferred,
            references: vec![Reference::new(vec![
                Snak::NoValue { property: 1 },
                Snak::NoValue { property: 2 },
            ])],
        };

        assert_eq!(result, Ok(ClaimOrStatement::Statement(expected)));
    }

    #[test]
    fn test_integer_ranks_are_accepted() {
        for (encoded, expected) in [(0, Rank::Deprecated), (1, Rank::Normal), (2, Rank::Preferred)]
        {
            let result = new_deserializer().deserialize(&json!({
                "m": ["novalue", 42],
                "q": [],
                "g": null,
                "rank": encoded,
            }));

            match result {
                Ok(ClaimOrStatement::Statement(statement)) => assert_eq!(statement.rank, expected),
                other => panic!("unexpected result: {other:?}"),
            }
        }
    }

    #[test]
    fn test_refs_alone_make_a_statement_with_normal_rank() {
        let result = new_deserializer().deserialize(&json!({
            "m": ["novalue", 42],
            "q": [],
            "g": null,
            "refs": [],
        }));

        match result {
            Ok(ClaimOrStatement::Statement(statement)) => {
                assert_eq!(statement.rank, Rank::Normal);
                assert!(statement.references.is_empty());
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_each_missing_required_key_is_named() {
        let deserializer = new_deserializer();

        let cases = [
            (json!({}), "m"),
            (json!({"m": ["novalue", 42]}), "q"),
            (json!({"m": ["novalue", 42], "q": []}), "g"),
        ];
        for (record, key) in cases {
            assert_eq!(
                deserializer.deserialize(&record),
                Err(DecodeError::MissingAttribute { key }),
                "record: {record}"
            );
        }
    }

    #[test]
    fn test_invalid_records() {
        let deserializer = new_deserializer();

        assert!(matches!(
            deserializer.deserialize(&json!(null)),
            Err(DecodeError::ShapeMismatch { .. })
        ));
        // Non-string guid.
        assert!(matches!(
            deserializer.deserialize(&json!({"m": ["novalue", 42], "q": [], "g": 42})),
            Err(DecodeError::InvalidAttribute { .. })
        ));
        // Invalid qualifier element.
        assert!(matches!(
            deserializer.deserialize(&json!({"m": ["novalue", 42], "q": [null], "g": null})),
            Err(DecodeError::ElementDecodeFailure { .. })
        ));
        // Unknown rank.
        assert!(matches!(
            deserializer.deserialize(&json!({
                "m": ["novalue", 42], "q": [], "g": null, "rank": "truth",
            })),
            Err(DecodeError::InvalidAttribute { .. })
        ));
        // refs must be an array of snak lists.
        assert!(matches!(
            deserializer.deserialize(&json!({
                "m": ["novalue", 42], "q": [], "g": null, "refs": {},
            })),
            Err(DecodeError::InvalidAttribute { .. })
        ));
        assert!(matches!(
            deserializer.deserialize(&json!({
                "m": ["novalue", 42], "q": [], "g": null, "refs": [null],
            })),
            Err(DecodeError::ElementDecodeFailure { .. })
        ));
    }

    #[test]
    fn test_predicate_requires_the_mainsnak_marker() {
        let deserializer = new_deserializer();
        assert!(deserializer.is_deserializer_for(&json!({"m": []})));
        assert!(!deserializer.is_deserializer_for(&json!({"mainsnak": {}})));
        assert!(!deserializer.is_deserializer_for(&json!({})));
        assert!(!deserializer.is_deserializer_for(&json!(null)));
    }
}
