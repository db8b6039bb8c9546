//! Configuration for the extractor

use serde::{Deserialize, Serialize};

/// Configuration for the extraction pipeline
///
/// Two extraction-threshold values (0.50 and 0.55) were observed across
/// historical revisions of the heuristics; the threshold is therefore a
/// tunable, with both values reachable via the presets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum input text length (characters)
    pub max_text_chars: usize,

    /// Sentences at or below this trimmed length are discarded
    pub min_sentence_chars: usize,

    /// Minimum confidence for a scored sentence to become a claim
    pub confidence_threshold: f64,

    /// Whether the entity-anchored alternate strategy runs
    pub entity_strategy: bool,

    /// Maximum number of entity-anchored candidates per text
    pub entity_claim_limit: usize,

    /// Context window radius around an entity match (characters)
    pub entity_context_chars: usize,

    /// Word-set Jaccard overlap above which two candidates are duplicates
    pub duplicate_overlap_threshold: f64,
}

impl Default for ExtractorConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            max_text_chars: 50_000,
            min_sentence_chars: 15,
            confidence_threshold: 0.50,
            entity_strategy: true,
            entity_claim_limit: 10,
            entity_context_chars: 100,
            duplicate_overlap_threshold: 0.85,
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: the higher historical acceptance threshold
    pub fn strict() -> Self {
        Self {
            confidence_threshold: 0.55,
            ..Default::default()
        }
    }

    /// Lenient preset: longer texts, more entity candidates
    pub fn lenient() -> Self {
        Self {
            max_text_chars: 100_000,
            confidence_threshold: 0.45,
            entity_claim_limit: 20,
            ..Default::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_chars == 0 {
            return Err("max_text_chars must be greater than 0".to_string());
        }
        if self.min_sentence_chars >= self.max_text_chars {
            return Err("min_sentence_chars cannot exceed max_text_chars".to_string());
        }
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err("confidence_threshold must be in [0.0, 1.0]".to_string());
        }
        if !(0.0..=1.0).contains(&self.duplicate_overlap_threshold) {
            return Err("duplicate_overlap_threshold must be in [0.0, 1.0]".to_string());
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
