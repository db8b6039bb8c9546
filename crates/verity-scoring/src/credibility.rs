//! Source credibility scoring
//!
//! Combines a source's contradiction history, activity recency, breadth,
//! and language neutrality into a weighted composite. Components with no
//! data fall back to 0.5, so a brand-new source starts at exactly the
//! neutral composite rather than being punished for having no history.

use crate::config::CredibilityConfig;
use crate::sentiment::SentimentAnalyzer;
use rayon::prelude::*;
use tracing::debug;

const SECONDS_PER_DAY: u64 = 86_400;

/// Observed claim history for one source, gathered by the caller
#[derive(Debug, Clone, Default)]
pub struct SourceProfile {
    /// Claims attributed to this source
    pub total_claims: usize,

    /// Attributed claims involved in at least one contradiction
    pub contradicted_claims: usize,

    /// Distinct content items the attributed claims came from
    pub content_count: usize,

    /// Creation timestamps (unix seconds) of the attributed claims
    pub claim_timestamps: Vec<u64>,

    /// Recent claim texts, newest first, for the bias analysis
    pub recent_claims: Vec<String>,
}

/// Per-component credibility scores plus the weighted composite
#[derive(Debug, Clone, PartialEq)]
pub struct CredibilityBreakdown {
    /// Fraction of attributed claims free of contradictions
    pub accuracy: f64,

    /// Fraction of claims created within the recency window
    pub recency: f64,

    /// Topical breadth from distinct content volume
    pub breadth: f64,

    /// How neutral the source's language is
    pub neutrality: f64,

    /// Estimated language bias [0.0, 1.0], 0.5 = neutral
    pub bias: f64,

    /// Fixed base component, a constant the composite rests on
    pub base: f64,

    /// Weighted composite [0.0, 1.0], rounded to 2 decimals
    pub score: f64,
}

/// Score a source from its observed claim history
///
/// `now` is a unix timestamp supplied by the caller so the computation
/// stays pure and testable.
pub fn assess_credibility(
    profile: &SourceProfile,
    now: u64,
    config: &CredibilityConfig,
    sentiment: &dyn SentimentAnalyzer,
) -> CredibilityBreakdown {
    let accuracy = if profile.total_claims == 0 {
        0.5
    } else {
        (1.0 - profile.contradicted_claims as f64 / profile.total_claims as f64).clamp(0.0, 1.0)
    };

    let recency = if profile.claim_timestamps.is_empty() {
        0.5
    } else {
        let window = config.recency_window_days * SECONDS_PER_DAY;
        let cutoff = now.saturating_sub(window);
        let recent = profile
            .claim_timestamps
            .iter()
            .filter(|&&created_at| created_at >= cutoff)
            .count();
        recent as f64 / profile.claim_timestamps.len() as f64
    };

    let breadth = if profile.content_count == 0 {
        0.5
    } else {
        (((profile.content_count + 1) as f64).log2() / 10.0).min(1.0)
    };

    let (neutrality, bias) = if profile.recent_claims.is_empty() {
        (0.5, 0.5)
    } else {
        let sample = &profile.recent_claims[..profile.recent_claims.len().min(config.claim_sample)];
        let mean_polarity = sample
            .par_iter()
            .map(|text| sentiment.polarity(text))
            .sum::<f64>()
            / sample.len() as f64;
        let bias = ((mean_polarity + 1.0) / 2.0).clamp(0.0, 1.0);
        let neutrality = (1.0 - 2.0 * (bias - 0.5).abs()).clamp(0.0, 1.0);
        (neutrality, bias)
    };

    let base = config.base_value;

    let score = round2(
        (config.accuracy_weight * accuracy
            + config.recency_weight * recency
            + config.breadth_weight * breadth
            + config.neutrality_weight * neutrality
            + config.base_weight * base)
            .clamp(0.0, 1.0),
    );

    debug!(
        accuracy,
        recency, breadth, neutrality, score, "credibility assessed"
    );

    CredibilityBreakdown {
        accuracy,
        recency,
        breadth,
        neutrality,
        bias,
        base,
        score,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::LexiconSentiment;

    const NOW: u64 = 1_700_000_000;

    fn assess(profile: &SourceProfile) -> CredibilityBreakdown {
        assess_credibility(
            profile,
            NOW,
            &CredibilityConfig::default(),
            &LexiconSentiment::default(),
        )
    }

    #[test]
    fn test_new_source_scores_neutral() {
        let breakdown = assess(&SourceProfile::default());
        assert_eq!(breakdown.accuracy, 0.5);
        assert_eq!(breakdown.recency, 0.5);
        assert_eq!(breakdown.breadth, 0.5);
        assert_eq!(breakdown.neutrality, 0.5);
        assert_eq!(breakdown.bias, 0.5);
        assert_eq!(breakdown.score, 0.5);
    }

    #[test]
    fn test_base_component_stays_constant() {
        let empty = assess(&SourceProfile::default());
        let busy = assess(&SourceProfile {
            total_claims: 10,
            contradicted_claims: 4,
            content_count: 6,
            ..Default::default()
        });
        assert_eq!(empty.base, 0.5);
        assert_eq!(busy.base, 0.5);
    }

    #[test]
    fn test_accuracy_from_contradiction_history() {
        let profile = SourceProfile {
            total_claims: 4,
            contradicted_claims: 1,
            ..Default::default()
        };
        assert_eq!(assess(&profile).accuracy, 0.75);
    }

    #[test]
    fn test_fully_contradicted_source_zero_accuracy() {
        let profile = SourceProfile {
            total_claims: 3,
            contradicted_claims: 3,
            ..Default::default()
        };
        assert_eq!(assess(&profile).accuracy, 0.0);
    }

    #[test]
    fn test_recency_is_fraction_within_window() {
        // two recent claims, two well outside the 30-day window
        let profile = SourceProfile {
            claim_timestamps: vec![
                NOW - SECONDS_PER_DAY,
                NOW - 5 * SECONDS_PER_DAY,
                NOW - 90 * SECONDS_PER_DAY,
                NOW - 400 * SECONDS_PER_DAY,
            ],
            ..Default::default()
        };
        assert_eq!(assess(&profile).recency, 0.5);
    }

    #[test]
    fn test_all_recent_claims_full_recency() {
        let profile = SourceProfile {
            claim_timestamps: vec![NOW, NOW - SECONDS_PER_DAY],
            ..Default::default()
        };
        assert_eq!(assess(&profile).recency, 1.0);
    }

    #[test]
    fn test_breadth_grows_with_content() {
        let few = SourceProfile {
            content_count: 3,
            ..Default::default()
        };
        let many = SourceProfile {
            content_count: 500,
            ..Default::default()
        };
        let few_breadth = assess(&few).breadth;
        let many_breadth = assess(&many).breadth;
        assert!(few_breadth < many_breadth);
        assert!(many_breadth <= 1.0);
    }

    #[test]
    fn test_breadth_capped_at_one() {
        let profile = SourceProfile {
            content_count: 5_000_000,
            ..Default::default()
        };
        assert_eq!(assess(&profile).breadth, 1.0);
    }

    #[test]
    fn test_neutral_language_full_neutrality() {
        let profile = SourceProfile {
            recent_claims: vec![
                "The committee met on Tuesday".to_string(),
                "Attendance was recorded at the session".to_string(),
            ],
            ..Default::default()
        };
        let breakdown = assess(&profile);
        assert_eq!(breakdown.neutrality, 1.0);
        assert_eq!(breakdown.bias, 0.5);
    }

    #[test]
    fn test_loaded_language_lowers_neutrality() {
        let profile = SourceProfile {
            recent_claims: vec![
                "A terrible disaster and an awful crisis".to_string(),
                "The worst failure in history".to_string(),
            ],
            ..Default::default()
        };
        let breakdown = assess(&profile);
        assert!(breakdown.neutrality < 1.0);
        // Uniformly critical language pushes bias below neutral
        assert!(breakdown.bias < 0.5);
    }

    #[test]
    fn test_score_within_bounds() {
        let profile = SourceProfile {
            total_claims: 10,
            contradicted_claims: 0,
            content_count: 10_000,
            claim_timestamps: vec![NOW; 10],
            recent_claims: vec!["The committee met on Tuesday".to_string()],
        };
        let breakdown = assess(&profile);
        assert!(breakdown.score <= 1.0);
        assert!(breakdown.score > 0.5);
    }

    #[test]
    fn test_idempotent() {
        let profile = SourceProfile {
            total_claims: 7,
            contradicted_claims: 2,
            content_count: 4,
            claim_timestamps: vec![NOW, NOW - 40 * SECONDS_PER_DAY],
            recent_claims: vec!["Stock prices increased 10%".to_string()],
        };
        assert_eq!(assess(&profile), assess(&profile));
    }
}
