//! Candidate types produced by the extraction strategies

/// Which extraction strategy produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Sentence classification plus confidence scoring
    Sentence,
    /// Entity-anchored context extraction
    Entity,
}

/// An extracted claim candidate, prior to persistence
///
/// Candidates from all strategies are merged and deduplicated before they
/// become claims.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimCandidate {
    /// The candidate text
    pub text: String,

    /// Extraction confidence [0.35, 1.0] for sentence candidates,
    /// [0.0, 1.0] for entity candidates
    pub confidence: f64,

    /// Whether a negation word was detected
    pub is_negated: bool,

    /// Whether a hedging qualifier was detected
    pub has_qualifier: bool,

    /// Producing strategy
    pub strategy: Strategy,
}

/// Round to two decimal places, the precision all emitted scores carry
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
