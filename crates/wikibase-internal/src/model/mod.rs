//! Domain model types for Wikibase entities.
//!
//! These are the decode targets of the deserializers:
//! - Identifiers (kind + number)
//! - Snaks and opaque data values
//! - Claims, statements, ranks and references
//! - Fingerprints (labels, descriptions, aliases)
//! - Site links
//! - Entities (items and properties)
//!
//! All types are plain immutable values; the deserializers construct them
//! once, fully, per decode call.

pub mod entity;
pub mod fingerprint;
pub mod id;
pub mod sitelink;
pub mod snak;
pub mod statement;

pub use entity::{Entity, Item, Property};
pub use fingerprint::Fingerprint;
pub use id::{BasicEntityIdParser, EntityId, EntityIdParseError, EntityKind};
pub use sitelink::{SiteLink, SiteLinkList};
pub use snak::{DataValue, DataValueError, Snak};
pub use statement::{Claim, ClaimOrStatement, Rank, Reference, Statement};
