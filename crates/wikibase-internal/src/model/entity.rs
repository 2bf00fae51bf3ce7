//! Entities: items and properties.

use crate::model::{ClaimOrStatement, EntityId, Fingerprint, SiteLinkList};

/// An item: the entity kind that can carry site links.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Item {
    pub id: Option<EntityId>,
    pub fingerprint: Fingerprint,
    pub sitelinks: SiteLinkList,
    /// Claims and statements, in input order.
    pub claims: Vec<ClaimOrStatement>,
}

impl Item {
    /// Creates an empty item: no id, no links, no claims, empty
    /// fingerprint.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A property: the entity kind that carries a data type.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Always a property-kind id when present.
    pub id: Option<EntityId>,
    pub data_type: String,
    pub fingerprint: Fingerprint,
    /// Claims and statements, in input order.
    pub claims: Vec<ClaimOrStatement>,
}

impl Property {
    /// Creates an empty property with the given data type.
    pub fn with_data_type(data_type: impl Into<String>) -> Self {
        Self {
            id: None,
            data_type: data_type.into(),
            fingerprint: Fingerprint::new(),
            claims: Vec::new(),
        }
    }
}

/// A decoded entity of either kind; callers pattern-match on the tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Item(Item),
    Property(Property),
}

impl Entity {
    pub fn id(&self) -> Option<EntityId> {
        match self {
            Entity::Item(item) => item.id,
            Entity::Property(property) => property.id,
        }
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        match self {
            Entity::Item(item) => &item.fingerprint,
            Entity::Property(property) => &property.fingerprint,
        }
    }
}
