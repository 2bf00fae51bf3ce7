//! Top-level factory wiring routers over both formats.

use std::sync::Arc;

use crate::de::{DataValueDeserializer, DispatchableDeserializer, EntityIdParser};
use crate::dispatch::{EntityDeserializer, StatementDeserializer};
use crate::legacy::LegacyDeserializerFactory;
use crate::model::{ClaimOrStatement, Entity};

/// Constructs deserializers that accept records in either the legacy or
/// the current internal serialization.
///
/// The current-format deserializers are injected rather than built here;
/// this crate only knows how to detect their format, not how to decode
/// it. The legacy side is built from the two collaborators.
pub struct DeserializerFactory {
    legacy: LegacyDeserializerFactory,
    current_entity: Arc<dyn DispatchableDeserializer<Output = Entity>>,
    current_statement: Arc<dyn DispatchableDeserializer<Output = ClaimOrStatement>>,
}

impl DeserializerFactory {
    pub fn new(
        data_value: Arc<dyn DataValueDeserializer>,
        id_parser: Arc<dyn EntityIdParser>,
        current_entity: Arc<dyn DispatchableDeserializer<Output = Entity>>,
        current_statement: Arc<dyn DispatchableDeserializer<Output = ClaimOrStatement>>,
    ) -> Self {
        Self {
            legacy: LegacyDeserializerFactory::new(data_value, id_parser),
            current_entity,
            current_statement,
        }
    }

    /// An entity deserializer handling both formats.
    pub fn entity_deserializer(&self) -> EntityDeserializer {
        EntityDeserializer::new(
            Arc::new(self.legacy.entity_deserializer()),
            self.current_entity.clone(),
        )
    }

    /// A claim/statement deserializer handling both formats.
    pub fn statement_deserializer(&self) -> StatementDeserializer {
        StatementDeserializer::new(
            Arc::new(self.legacy.statement_deserializer()),
            self.current_statement.clone(),
        )
    }
}
