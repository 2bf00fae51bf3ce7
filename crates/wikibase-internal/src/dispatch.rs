//! Format routing between the legacy and current serializations.
//!
//! Records carry no version tag, so detection is key-shape sniffing: each
//! route's deserializer reports whether a record looks like its format,
//! and the routes are consulted in a fixed order. When no route claims a
//! record (some minimal records are structurally valid under both
//! encodings), the router probes the routes in the same order and only
//! fails once every probe has failed. Legacy is tried before current;
//! that order preserves the historical behavior for ambiguous empty
//! records and is a policy choice, not an invariant.

use std::sync::Arc;

use serde_json::Value;

use crate::de::{Deserializer, DispatchableDeserializer};
use crate::error::DecodeError;
use crate::model::{ClaimOrStatement, Entity};

fn dispatch<T>(
    routes: &[Arc<dyn DispatchableDeserializer<Output = T>>],
    value: &Value,
    what: &'static str,
) -> Result<T, DecodeError> {
    for route in routes {
        if route.is_deserializer_for(value) {
            return route.deserialize(value);
        }
    }

    // Unknown shape: probe each route in order. A probe's error is
    // discarded only while a later route remains to be tried; when all
    // fail the result is a single unrecognized-format error rather than
    // any one underlying message.
    for route in routes {
        if let Ok(decoded) = route.deserialize(value) {
            return Ok(decoded);
        }
    }

    Err(DecodeError::UnrecognizedFormat { what })
}

/// Routes entity records to the legacy or the current deserializer.
pub struct EntityDeserializer {
    routes: Vec<Arc<dyn DispatchableDeserializer<Output = Entity>>>,
}

impl EntityDeserializer {
    /// The legacy route is tried before the current one.
    pub fn new(
        legacy: Arc<dyn DispatchableDeserializer<Output = Entity>>,
        current: Arc<dyn DispatchableDeserializer<Output = Entity>>,
    ) -> Self {
        Self {
            routes: vec![legacy, current],
        }
    }
}

impl Deserializer for EntityDeserializer {
    type Output = Entity;

    fn deserialize(&self, value: &Value) -> Result<Entity, DecodeError> {
        dispatch(&self.routes, value, "entity")
    }
}

/// Routes claim/statement records to the legacy or the current
/// deserializer.
pub struct StatementDeserializer {
    routes: Vec<Arc<dyn DispatchableDeserializer<Output = ClaimOrStatement>>>,
}

impl StatementDeserializer {
    /// The legacy route is tried before the current one.
    pub fn new(
        legacy: Arc<dyn DispatchableDeserializer<Output = ClaimOrStatement>>,
        current: Arc<dyn DispatchableDeserializer<Output = ClaimOrStatement>>,
    ) -> Self {
        Self {
            routes: vec![legacy, current],
        }
    }
}

impl Deserializer for StatementDeserializer {
    type Output = ClaimOrStatement;

    fn deserialize(&self, value: &Value) -> Result<ClaimOrStatement, DecodeError> {
        dispatch(&self.routes, value, "claim")
    }
}
