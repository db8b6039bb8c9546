//! Contradiction records - pairwise conflicts between claims

use crate::claim::ClaimId;
use std::fmt;

/// Unique identifier for a contradiction record (UUIDv7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContradictionId(u128);

impl ContradictionId {
    /// Generate a new UUIDv7-based ContradictionId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for ContradictionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContradictionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Classification of a detected contradiction
///
/// `none` from the detection rules is represented by the absence of a
/// record; only real conflicts are ever persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContradictionKind {
    /// Same-ish claim with opposite negation polarity
    DirectNegation,
    /// Shared topic using opposite concepts (increase vs decrease, ...)
    Semantic,
    /// Shared topic reporting different numbers
    Statistical,
}

impl ContradictionKind {
    /// Stable string form used in audit events and explanations
    pub fn as_str(&self) -> &'static str {
        match self {
            ContradictionKind::DirectNegation => "direct_negation",
            ContradictionKind::Semantic => "semantic",
            ContradictionKind::Statistical => "statistical",
        }
    }
}

impl fmt::Display for ContradictionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected logical conflict between exactly two claims
///
/// The pair is conceptually unordered; `new` stores the ids in ascending
/// order so that at most one record can exist per unordered pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Contradiction {
    /// Unique identifier
    pub id: ContradictionId,

    /// First claim of the pair (smaller id)
    pub claim_a: ClaimId,

    /// Second claim of the pair (larger id)
    pub claim_b: ClaimId,

    /// Conflict classification
    pub kind: ContradictionKind,

    /// How serious the conflict is [0.0, 1.0]
    pub importance: f64,

    /// Human-readable description of the conflict
    pub explanation: String,

    /// Creation timestamp (Unix seconds)
    pub created_at: u64,
}

impl Contradiction {
    /// Create a contradiction record, normalizing the pair order
    pub fn new(
        claim_a: ClaimId,
        claim_b: ClaimId,
        kind: ContradictionKind,
        importance: f64,
        explanation: impl Into<String>,
        created_at: u64,
    ) -> Self {
        let (claim_a, claim_b) = if claim_a <= claim_b {
            (claim_a, claim_b)
        } else {
            (claim_b, claim_a)
        };
        Self {
            id: ContradictionId::new(),
            claim_a,
            claim_b,
            kind,
            importance: importance.clamp(0.0, 1.0),
            explanation: explanation.into(),
            created_at,
        }
    }

    /// The unordered pair key enforcing the one-record-per-pair invariant
    pub fn pair_key(&self) -> (ClaimId, ClaimId) {
        (self.claim_a, self.claim_b)
    }

    /// Whether this record involves the given claim
    pub fn involves(&self, id: ClaimId) -> bool {
        self.claim_a == id || self.claim_b == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_order_normalized() {
        let a = ClaimId::from_value(2);
        let b = ClaimId::from_value(1);
        let c = Contradiction::new(a, b, ContradictionKind::Semantic, 0.8, "opposites", 0);
        assert_eq!(c.claim_a, ClaimId::from_value(1));
        assert_eq!(c.claim_b, ClaimId::from_value(2));
    }

    #[test]
    fn test_pair_key_is_order_independent() {
        let a = ClaimId::from_value(7);
        let b = ClaimId::from_value(3);
        let ab = Contradiction::new(a, b, ContradictionKind::Statistical, 0.9, "numbers", 0);
        let ba = Contradiction::new(b, a, ContradictionKind::Statistical, 0.9, "numbers", 0);
        assert_eq!(ab.pair_key(), ba.pair_key());
    }

    #[test]
    fn test_importance_clamped() {
        let c = Contradiction::new(
            ClaimId::from_value(1),
            ClaimId::from_value(2),
            ContradictionKind::DirectNegation,
            1.7,
            "denial",
            0,
        );
        assert_eq!(c.importance, 1.0);
    }

    #[test]
    fn test_kind_strings() {
        assert_eq!(ContradictionKind::DirectNegation.as_str(), "direct_negation");
        assert_eq!(ContradictionKind::Semantic.as_str(), "semantic");
        assert_eq!(ContradictionKind::Statistical.as_str(), "statistical");
    }
}
