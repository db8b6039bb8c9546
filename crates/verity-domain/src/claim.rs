//! Claim module - the fundamental unit of Verity's analysis pipeline

use crate::content::ContentId;
use crate::source::SourceId;
use std::fmt;

/// Unique identifier for a claim based on UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability for temporal queries
/// - 128-bit uniqueness
/// - No coordination required for distributed generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClaimId(u128);

impl ClaimId {
    /// Generate a new UUIDv7-based ClaimId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a ClaimId from a raw u128 value
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a ClaimId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUID string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Get the timestamp component of the UUIDv7 (milliseconds since Unix epoch)
    pub fn timestamp(&self) -> u64 {
        // UUIDv7: top 48 bits are Unix millisecond timestamp
        (self.0 >> 80) as u64
    }
}

impl Default for ClaimId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// A claim - a single factual assertion extracted from submitted text
///
/// Extraction-time fields (`text`, `is_negated`, `has_qualifier`) are fixed
/// at creation. `confidence` may later be revised by external verification,
/// always clamped to [0.0, 1.0].
#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,

    /// The asserted sentence, as extracted (non-empty)
    pub text: String,

    /// Extraction confidence [0.0, 1.0]
    pub confidence: f64,

    /// Whether the claim contains a negating word
    pub is_negated: bool,

    /// Whether the claim contains a hedging qualifier
    pub has_qualifier: bool,

    /// Content this claim was extracted from
    pub content_id: ContentId,

    /// Optional attribution source
    pub source_id: Option<SourceId>,

    /// Creation timestamp (Unix seconds)
    pub created_at: u64,
}

impl Claim {
    /// Create a new claim with a fresh id
    pub fn new(
        text: impl Into<String>,
        confidence: f64,
        is_negated: bool,
        has_qualifier: bool,
        content_id: ContentId,
        created_at: u64,
    ) -> Self {
        Self {
            id: ClaimId::new(),
            text: text.into(),
            confidence: confidence.clamp(0.0, 1.0),
            is_negated,
            has_qualifier,
            content_id,
            source_id: None,
            created_at,
        }
    }

    /// Attach an attribution source
    pub fn with_source(mut self, source_id: SourceId) -> Self {
        self.source_id = Some(source_id);
        self
    }

    /// Apply a bounded confidence adjustment, clamped to [0.0, 1.0]
    ///
    /// Used by external verification (+0.15 corroborated, -0.25 refuted).
    /// Extraction-time fields are never touched.
    pub fn adjust_confidence(&mut self, delta: f64) {
        self.confidence = (self.confidence + delta).clamp(0.0, 1.0);
    }
}
