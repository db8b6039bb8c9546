//! Configuration for trust and credibility scoring

use serde::{Deserialize, Serialize};

/// Tunables for content trust aggregation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Trust deducted per detected contradiction
    pub contradiction_penalty: f64,

    /// Trust assigned when no claims were extracted
    pub neutral_trust: f64,

    /// Average confidence above which claims are called well-supported
    pub strong_confidence: f64,

    /// Average confidence below which claims are called weakly asserted
    pub weak_confidence: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            contradiction_penalty: 0.1,
            neutral_trust: 0.5,
            strong_confidence: 0.8,
            weak_confidence: 0.5,
        }
    }
}

impl ScoringConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("contradiction_penalty", self.contradiction_penalty),
            ("neutral_trust", self.neutral_trust),
            ("strong_confidence", self.strong_confidence),
            ("weak_confidence", self.weak_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be in [0.0, 1.0]", name));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

/// Tunables for source credibility scoring
///
/// The component weights sum to 1.0 by default; `validate` enforces it so
/// the composite stays in [0.0, 1.0].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredibilityConfig {
    /// Weight of historical claim accuracy
    pub accuracy_weight: f64,

    /// Weight of recent activity
    pub recency_weight: f64,

    /// Weight of topical breadth
    pub breadth_weight: f64,

    /// Weight of language neutrality
    pub neutrality_weight: f64,

    /// Weight of the fixed base component
    pub base_weight: f64,

    /// Constant value of the base component
    pub base_value: f64,

    /// Claims created within this many days count as recent
    pub recency_window_days: u64,

    /// Maximum recent claims sampled for the neutrality analysis
    pub claim_sample: usize,
}

impl Default for CredibilityConfig {
    fn default() -> Self {
        Self {
            accuracy_weight: 0.4,
            recency_weight: 0.2,
            breadth_weight: 0.15,
            neutrality_weight: 0.15,
            base_weight: 0.1,
            base_value: 0.5,
            recency_window_days: 30,
            claim_sample: 100,
        }
    }
}

impl CredibilityConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let weights = [
            ("accuracy_weight", self.accuracy_weight),
            ("recency_weight", self.recency_weight),
            ("breadth_weight", self.breadth_weight),
            ("neutrality_weight", self.neutrality_weight),
            ("base_weight", self.base_weight),
        ];
        for (name, value) in weights {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be in [0.0, 1.0]", name));
            }
        }
        let total: f64 = weights.iter().map(|(_, w)| w).sum();
        if (total - 1.0).abs() > 1e-9 {
            return Err(format!("component weights must sum to 1.0, got {}", total));
        }
        if !(0.0..=1.0).contains(&self.base_value) {
            return Err("base_value must be in [0.0, 1.0]".to_string());
        }
        if self.recency_window_days == 0 {
            return Err("recency_window_days must be greater than 0".to_string());
        }
        if self.claim_sample == 0 {
            return Err("claim_sample must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
