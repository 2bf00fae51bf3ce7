//! Legacy site link list deserialization.
//!
//! The legacy form is a flat mapping of site key to page title; it
//! carries no badges.

use serde_json::Value;

use crate::de::Deserializer;
use crate::error::DecodeError;
use crate::model::{SiteLink, SiteLinkList};

/// Decodes a [`SiteLinkList`] from a site-key → page-title mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacySiteLinkListDeserializer;

impl LegacySiteLinkListDeserializer {
    pub fn new() -> Self {
        Self
    }
}

impl Deserializer for LegacySiteLinkListDeserializer {
    type Output = SiteLinkList;

    fn deserialize(&self, value: &Value) -> Result<SiteLinkList, DecodeError> {
        let record = value.as_object().ok_or(DecodeError::ShapeMismatch {
            what: "site link list",
            expected: "a map",
        })?;

        let mut links = SiteLinkList::new();
        for (site, title) in record {
            let title = title.as_str().ok_or_else(|| {
                DecodeError::invalid(site, title, "page title should be a string")
            })?;
            links.insert(SiteLink::new(site.clone(), title));
        }
        Ok(links)
    }
}
