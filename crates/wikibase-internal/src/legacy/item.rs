//! Legacy item deserialization.

use serde_json::{Map, Value};

use crate::de::Deserializer;
use crate::error::DecodeError;
use crate::model::{ClaimOrStatement, EntityId, Fingerprint, Item, SiteLinkList};

/// Decodes a legacy item record.
///
/// All keys are optional; an empty mapping decodes to an empty item. A
/// key that is present must satisfy its shape constraint or decoding
/// fails naming that key.
pub struct LegacyItemDeserializer {
    id: Box<dyn Deserializer<Output = EntityId>>,
    sitelinks: Box<dyn Deserializer<Output = SiteLinkList>>,
    statement: Box<dyn Deserializer<Output = ClaimOrStatement>>,
    fingerprint: Box<dyn Deserializer<Output = Fingerprint>>,
}

impl LegacyItemDeserializer {
    pub fn new(
        id: Box<dyn Deserializer<Output = EntityId>>,
        sitelinks: Box<dyn Deserializer<Output = SiteLinkList>>,
        statement: Box<dyn Deserializer<Output = ClaimOrStatement>>,
        fingerprint: Box<dyn Deserializer<Output = Fingerprint>>,
    ) -> Self {
        Self {
            id,
            sitelinks,
            statement,
            fingerprint,
        }
    }
}

impl Deserializer for LegacyItemDeserializer {
    type Output = Item;

    fn deserialize(&self, value: &Value) -> Result<Item, DecodeError> {
        let record = value.as_object().ok_or(DecodeError::ShapeMismatch {
            what: "item",
            expected: "a map",
        })?;

        let mut item = Item::new();
        if let Some(id) = record.get("entity") {
            item.id = Some(self.id.deserialize(id)?);
        }
        if let Some(links) = record.get("links") {
            item.sitelinks = self.sitelinks.deserialize(links)?;
        }
        item.claims = decode_claims(record, self.statement.as_ref())?;
        item.fingerprint = self.fingerprint.deserialize(value)?;

        Ok(item)
    }
}

/// Applies the `statements` → `claims` key rename and decodes the claim
/// list.
///
/// `statements` is the name DataModel 0.2/0.3 used for `claims`. When
/// both keys are present the `statements` value wins and the `claims`
/// value is silently dropped, matching the historical key rewrite.
pub(crate) fn decode_claims(
    record: &Map<String, Value>,
    statement: &dyn Deserializer<Output = ClaimOrStatement>,
) -> Result<Vec<ClaimOrStatement>, DecodeError> {
    let (key, value) = match record.get("statements") {
        Some(value) => ("statements", value),
        None => match record.get("claims") {
            Some(value) => ("claims", value),
            None => return Ok(Vec::new()),
        },
    };

    let list = value
        .as_array()
        .ok_or_else(|| DecodeError::invalid(key, value, "should point to an array"))?;

    list.iter()
        .enumerate()
        .map(|(position, claim)| {
            statement
                .deserialize(claim)
                .map_err(|cause| DecodeError::at_position(position, cause))
        })
        .collect()
}
