//! Content records - text submissions and their derived trust state

use std::fmt;

/// Unique identifier for a content submission (UUIDv7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentId(u128);

impl ContentId {
    /// Generate a new UUIDv7-based ContentId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a ContentId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for ContentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Lifecycle state of a submission
///
/// Extraction runs asynchronously; callers must be able to distinguish a
/// submission that has not been analyzed yet from one with a real score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingStatus {
    /// Submitted but not yet analyzed
    #[default]
    Pending,
    /// Analysis complete; trust fields are populated
    Processed,
    /// Analysis gave up after exhausting retries
    Failed,
}

/// A text submission owning a collection of extracted claims
///
/// `trust_score` and `trust_explanation` are derived caches, recomputed
/// whenever the claim/contradiction set changes. They are never hand-edited
/// and must be recomputable from scratch with identical results.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    /// Unique identifier
    pub id: ContentId,

    /// The submitted text
    pub raw_text: String,

    /// Derived trust score [0.0, 1.0], present once processed
    pub trust_score: Option<f64>,

    /// Derived human-readable rationale, present once processed
    pub trust_explanation: Option<String>,

    /// Lifecycle state
    pub status: ProcessingStatus,

    /// Creation timestamp (Unix seconds)
    pub created_at: u64,
}

impl Content {
    /// Create a new pending submission
    pub fn new(raw_text: impl Into<String>, created_at: u64) -> Self {
        Self {
            id: ContentId::new(),
            raw_text: raw_text.into(),
            trust_score: None,
            trust_explanation: None,
            status: ProcessingStatus::Pending,
            created_at,
        }
    }

    /// Record a recomputed trust score and mark the submission processed
    pub fn apply_trust(&mut self, score: f64, explanation: impl Into<String>) {
        self.trust_score = Some(score.clamp(0.0, 1.0));
        self.trust_explanation = Some(explanation.into());
        self.status = ProcessingStatus::Processed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_content_is_pending() {
        let content = Content::new("The vaccine is 95% effective.", 1000);
        assert_eq!(content.status, ProcessingStatus::Pending);
        assert!(content.trust_score.is_none());
        assert!(content.trust_explanation.is_none());
    }

    #[test]
    fn test_apply_trust_marks_processed() {
        let mut content = Content::new("The vaccine is 95% effective.", 1000);
        content.apply_trust(0.7, "Analyzed 1 claim.");
        assert_eq!(content.status, ProcessingStatus::Processed);
        assert_eq!(content.trust_score, Some(0.7));
    }

    #[test]
    fn test_apply_trust_clamps_score() {
        let mut content = Content::new("text", 0);
        content.apply_trust(1.3, "clamped");
        assert_eq!(content.trust_score, Some(1.0));
    }
}
