//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the analysis engine and
//! infrastructure. Persistence, job queues, and external fact-checking
//! services implement them; the engine never touches storage or transport
//! directly.

use crate::claim::{Claim, ClaimId};
use crate::content::ContentId;
use crate::contradiction::Contradiction;

/// Read-only view of an existing claim used for contradiction scans
///
/// Snapshots are plain data: the detector compares a new claim against a
/// snapshot of the corpus without ever mutating it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimSnapshot {
    /// Id of the existing claim
    pub id: ClaimId,

    /// The claim text
    pub text: String,

    /// Negation flag recorded at extraction time
    pub is_negated: bool,
}

impl ClaimSnapshot {
    /// Build a snapshot view from a full claim record
    pub fn from_claim(claim: &Claim) -> Self {
        Self {
            id: claim.id,
            text: claim.text.clone(),
            is_negated: claim.is_negated,
        }
    }
}

/// Trait for storing and retrieving analysis results
///
/// Implemented by the infrastructure layer. The engine only requires what
/// the processing pipeline needs: writing new records and reading the
/// corpus snapshot a new submission is compared against.
pub trait ClaimStore {
    /// Error type for store operations
    type Error;

    /// Persist a new claim
    fn insert_claim(&mut self, claim: Claim) -> Result<ClaimId, Self::Error>;

    /// Persist a new contradiction record
    ///
    /// Implementations must uphold the unordered-pair uniqueness invariant:
    /// a second record for the same pair replaces the first.
    fn insert_contradiction(&mut self, contradiction: Contradiction) -> Result<(), Self::Error>;

    /// Snapshot of all claims except those owned by the given content
    fn snapshot_excluding(&self, content_id: ContentId) -> Result<Vec<ClaimSnapshot>, Self::Error>;

    /// Number of contradictions involving the given content's claims
    fn contradiction_count(&self, content_id: ContentId) -> Result<usize, Self::Error>;
}

/// Result of an external fact-verification lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Verification {
    /// External sources corroborate the claim
    pub corroborated: bool,

    /// External sources refute the claim
    pub refuted: bool,
}

/// Trait for optional external fact-verification lookups
///
/// Implementations may consult fact-checking services. A lookup failure is
/// recoverable: the caller proceeds with internal signals only.
pub trait FactVerifier {
    /// Error type for lookup operations
    type Error;

    /// Verify a claim text against external sources
    fn verify(&self, claim_text: &str) -> Result<Verification, Self::Error>;
}
