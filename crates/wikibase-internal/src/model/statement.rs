//! Claims and statements.
//!
//! A claim is a mainsnak, ordered qualifier snaks and an optional guid.
//! A statement is a claim plus a rank and references. Whether a legacy
//! record decodes to one or the other is a structural decision based on
//! key presence, so decode results are the tagged [`ClaimOrStatement`].

use crate::model::Snak;

/// Statement rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rank {
    Deprecated,
    #[default]
    Normal,
    Preferred,
}

impl Rank {
    /// Creates a rank from the legacy integer encoding.
    pub fn from_int(value: u64) -> Option<Rank> {
        match value {
            0 => Some(Rank::Deprecated),
            1 => Some(Rank::Normal),
            2 => Some(Rank::Preferred),
            _ => None,
        }
    }

    /// Creates a rank from its textual name.
    pub fn from_name(name: &str) -> Option<Rank> {
        match name {
            "deprecated" => Some(Rank::Deprecated),
            "normal" => Some(Rank::Normal),
            "preferred" => Some(Rank::Preferred),
            _ => None,
        }
    }
}

/// One ordered group of snaks backing a statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reference {
    pub snaks: Vec<Snak>,
}

impl Reference {
    pub fn new(snaks: Vec<Snak>) -> Self {
        Self { snaks }
    }
}

/// A bare claim. Has no rank and no references.
#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    pub mainsnak: Snak,
    /// Qualifier snaks, in input order.
    pub qualifiers: Vec<Snak>,
    /// Globally unique identifier, opaque to this crate. May be absent.
    pub guid: Option<String>,
}

impl Claim {
    pub fn new(mainsnak: Snak) -> Self {
        Self {
            mainsnak,
            qualifiers: Vec::new(),
            guid: None,
        }
    }
}

/// A claim with a rank and references. Both are always present on the
/// decoded value, defaulting to [`Rank::Normal`] and no references.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub claim: Claim,
    pub rank: Rank,
    /// References, in input order.
    pub references: Vec<Reference>,
}

impl Statement {
    pub fn new(claim: Claim) -> Self {
        Self {
            claim,
            rank: Rank::Normal,
            references: Vec::new(),
        }
    }
}

/// Decode result for claim records; callers pattern-match on the tag.
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimOrStatement {
    Claim(Claim),
    Statement(Statement),
}

impl ClaimOrStatement {
    /// Returns the underlying claim regardless of variant.
    pub fn claim(&self) -> &Claim {
        match self {
            ClaimOrStatement::Claim(claim) => claim,
            ClaimOrStatement::Statement(statement) => &statement.claim,
        }
    }

    /// Returns the guid, if one was set.
    pub fn guid(&self) -> Option<&str> {
        self.claim().guid.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_int_encoding() {
        assert_eq!(Rank::from_int(0), Some(Rank::Deprecated));
        assert_eq!(Rank::from_int(1), Some(Rank::Normal));
        assert_eq!(Rank::from_int(2), Some(Rank::Preferred));
        assert_eq!(Rank::from_int(3), None);
    }

    #[test]
    fn test_rank_name_encoding() {
        assert_eq!(Rank::from_name("preferred"), Some(Rank::Preferred));
        assert_eq!(Rank::from_name("normal"), Some(Rank::Normal));
        assert_eq!(Rank::from_name("deprecated"), Some(Rank::Deprecated));
        assert_eq!(Rank::from_name("truth"), None);
    }

    #[test]
    fn test_claim_accessor_on_both_variants() {
        let mut claim = Claim::new(Snak::NoValue { property: 42 });
        claim.guid = Some("guid".to_string());

        let as_claim = ClaimOrStatement::Claim(claim.clone());
        let as_statement = ClaimOrStatement::Statement(Statement::new(claim.clone()));

        assert_eq!(as_claim.claim(), &claim);
        assert_eq!(as_statement.claim(), &claim);
        assert_eq!(as_statement.guid(), Some("guid"));
    }
}
