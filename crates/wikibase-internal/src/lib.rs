//! Deserialization of Wikibase's internal entity serialization.
//!
//! Wikibase has stored entities in two JSON encodings over the years: a
//! legacy format with short cryptic keys (`m`, `q`, `g`, `entity`,
//! `links`) and the current format (`mainsnak`, `id`, plural term keys).
//! Stored records carry no version tag, so this crate detects the format
//! from key shape and decodes both through one entry point.
//!
//! # Overview
//!
//! - Legacy records are decoded by this crate's own deserializers.
//! - Current-format records are delegated to an injected deserializer;
//!   this crate detects that format but does not decode it.
//! - Records whose shape matches neither format fail with
//!   [`DecodeError::UnrecognizedFormat`].
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use serde_json::{json, Value};
//! use wikibase_internal::{
//!     DataValue, DataValueDeserializer, DataValueError, Deserializer,
//!     Entity, LegacyDeserializerFactory,
//! };
//! use wikibase_internal::model::BasicEntityIdParser;
//!
//! // A data value decoder that keeps payloads untyped. Real setups
//! // plug in a library that knows quantities, times and coordinates.
//! struct RawDataValues;
//!
//! impl DataValueDeserializer for RawDataValues {
//!     fn deserialize(&self, value: &Value) -> Result<DataValue, DataValueError> {
//!         let record = value
//!             .as_object()
//!             .ok_or_else(|| DataValueError("not a value record".to_string()))?;
//!         match (record.get("type"), record.get("value")) {
//!             (Some(Value::String(kind)), Some(payload)) => {
//!                 Ok(DataValue::new(kind, payload.clone()))
//!             }
//!             _ => Err(DataValueError("not a value record".to_string())),
//!         }
//!     }
//! }
//!
//! let factory = LegacyDeserializerFactory::new(
//!     Arc::new(RawDataValues),
//!     Arc::new(BasicEntityIdParser::new()),
//! );
//!
//! let entity = factory
//!     .entity_deserializer()
//!     .deserialize(&json!({
//!         "entity": "Q42",
//!         "label": {"en": "Douglas Adams"},
//!     }))
//!     .unwrap();
//!
//! assert_eq!(entity.id().unwrap().to_string(), "Q42");
//! assert_eq!(entity.fingerprint().labels["en"], "Douglas Adams");
//! # match entity { Entity::Item(_) => {}, _ => panic!() }
//! ```
//!
//! # Modules
//!
//! - [`model`]: Decoded types (entities, claims, snaks, terms, ids)
//! - [`legacy`]: Deserializers for the legacy format
//! - [`dispatch`]: Format-detecting routers over both formats
//! - [`factory`]: Top-level wiring, given a current-format deserializer
//! - [`de`]: Capability traits for deserializers and collaborators
//! - [`error`]: Error types
//!
//! # Untrusted input
//!
//! Decoders never panic on malformed records: every shape violation is
//! reported as a [`DecodeError`] naming the offending key or position,
//! and a failed decode produces no partial output.

pub mod de;
pub mod dispatch;
pub mod error;
pub mod factory;
pub mod legacy;
pub mod model;

// Re-export commonly used types at crate root
pub use de::{DataValueDeserializer, Deserializer, DispatchableDeserializer, EntityIdParser};
pub use dispatch::{EntityDeserializer, StatementDeserializer};
pub use error::DecodeError;
pub use factory::DeserializerFactory;
pub use legacy::LegacyDeserializerFactory;
pub use model::{
    Claim, ClaimOrStatement, DataValue, DataValueError, Entity, EntityId, EntityIdParseError,
    EntityKind, Fingerprint, Item, Property, Rank, Reference, SiteLink, SiteLinkList, Snak,
    Statement,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
