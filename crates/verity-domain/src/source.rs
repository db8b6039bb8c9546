//! Source records - attribution targets with derived credibility scores

use std::fmt;

/// Unique identifier for an attribution source (UUIDv7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceId(u128);

impl SourceId {
    /// Generate a new UUIDv7-based SourceId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a SourceId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for SourceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// An attribution target for claims
///
/// `reliability_score` and `bias_score` are derived caches, recomputed by
/// the credibility engine over the source's claim history - never by claim
/// creation. Bias is a pole scale: 0.0 = one pole, 0.5 = neutral, 1.0 = the
/// opposite pole.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    /// Unique identifier
    pub id: SourceId,

    /// Display name
    pub name: String,

    /// Derived reliability [0.0, 1.0], 0.5 until first recompute
    pub reliability_score: f64,

    /// Derived bias estimate [0.0, 1.0], 0.5 = neutral
    pub bias_score: f64,

    /// Timestamp of the last credibility recompute (Unix seconds)
    pub last_updated: u64,
}

impl Source {
    /// Create a new source with neutral starting scores
    pub fn new(name: impl Into<String>, created_at: u64) -> Self {
        Self {
            id: SourceId::new(),
            name: name.into(),
            reliability_score: 0.5,
            bias_score: 0.5,
            last_updated: created_at,
        }
    }

    /// Record a recomputed credibility result
    pub fn apply_credibility(&mut self, reliability: f64, bias: f64, updated_at: u64) {
        self.reliability_score = reliability.clamp(0.0, 1.0);
        self.bias_score = bias.clamp(0.0, 1.0);
        self.last_updated = updated_at;
    }
}
