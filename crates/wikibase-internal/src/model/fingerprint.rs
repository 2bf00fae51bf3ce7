//! Fingerprints: the bundle of labels, descriptions and aliases attached
//! to an entity.

use rustc_hash::FxHashMap;

/// Per-language terms of an entity.
///
/// Labels and descriptions hold one string per language; aliases hold an
/// ordered list per language, duplicates permitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fingerprint {
    pub labels: FxHashMap<String, String>,
    pub descriptions: FxHashMap<String, String>,
    pub aliases: FxHashMap<String, Vec<String>>,
}

impl Fingerprint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when no labels, descriptions or aliases are present.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.descriptions.is_empty() && self.aliases.is_empty()
    }
}
