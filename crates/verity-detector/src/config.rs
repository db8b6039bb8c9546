//! Configuration for contradiction detection

use serde::{Deserialize, Serialize};

/// Thresholds for the pairwise decision rules
///
/// Historical revisions of the heuristics disagreed on the cutoffs
/// (similarity 0.5 vs 0.8, overlap 0.3 vs 0.6); they are tunables here.
/// The defaults are the permissive set, which is the one the reference
/// scenarios require.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Minimum text similarity for the direct-negation rule
    pub similarity_threshold: f64,

    /// Minimum keyword overlap for the semantic rule
    pub semantic_overlap: f64,

    /// Minimum keyword overlap for the statistical rule
    pub statistical_overlap: f64,

    /// Maximum keywords contributed per text
    pub max_keywords: usize,

    /// Whether batch scans narrow candidates through the corpus index
    ///
    /// Disabling forces exhaustive pairwise comparison.
    pub use_index: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.5,
            semantic_overlap: 0.3,
            statistical_overlap: 0.2,
            max_keywords: 15,
            use_index: true,
        }
    }
}

impl DetectorConfig {
    /// Conservative preset: the stricter historical cutoffs
    pub fn conservative() -> Self {
        Self {
            similarity_threshold: 0.8,
            semantic_overlap: 0.6,
            statistical_overlap: 0.4,
            ..Default::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("similarity_threshold", self.similarity_threshold),
            ("semantic_overlap", self.semantic_overlap),
            ("statistical_overlap", self.statistical_overlap),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be in [0.0, 1.0]", name));
            }
        }
        if self.max_keywords == 0 {
            return Err("max_keywords must be greater than 0".to_string());
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(DetectorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_conservative_config_is_valid() {
        assert!(DetectorConfig::conservative().validate().is_ok());
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let mut config = DetectorConfig::default();
        config.semantic_overlap = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = DetectorConfig::default();
        let parsed = DetectorConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config.similarity_threshold, parsed.similarity_threshold);
        assert_eq!(config.use_index, parsed.use_index);
    }
}
