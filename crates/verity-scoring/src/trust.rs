//! Content trust aggregation
//!
//! Folds a content item's claim confidences and contradiction count into a
//! single trust score plus a human-readable explanation. The function is
//! pure and idempotent; it never fails, because "no claims" is a valid
//! outcome, not an error.

use crate::config::ScoringConfig;
use tracing::debug;

/// Explanation used when a content item produced no claims
pub const NO_CLAIMS_EXPLANATION: &str = "No claims extracted. Unable to assess.";

/// A trust verdict for one content item
#[derive(Debug, Clone, PartialEq)]
pub struct TrustAssessment {
    /// Trust score [0.0, 1.0], rounded to 2 decimals
    pub score: f64,

    /// Human-readable reasoning behind the score
    pub explanation: String,
}

/// Aggregate claim confidences and contradictions into a trust verdict
///
/// No claims yields the neutral score with a fixed explanation. Otherwise
/// the score is the average confidence minus a per-contradiction penalty,
/// clamped to [0.0, 1.0].
pub fn assess_trust(
    confidences: &[f64],
    contradiction_count: usize,
    config: &ScoringConfig,
) -> TrustAssessment {
    if confidences.is_empty() {
        return TrustAssessment {
            score: round2(config.neutral_trust),
            explanation: NO_CLAIMS_EXPLANATION.to_string(),
        };
    }

    let average = confidences.iter().sum::<f64>() / confidences.len() as f64;
    let penalty = config.contradiction_penalty * contradiction_count as f64;
    let score = round2((average - penalty).clamp(0.0, 1.0));

    let mut explanation = format!(
        "Analyzed {} claim(s) with average confidence {:.0}%.",
        confidences.len(),
        average * 100.0
    );
    if contradiction_count > 0 {
        explanation.push_str(&format!(
            " {} contradiction(s) detected, lowering score.",
            contradiction_count
        ));
    } else {
        explanation.push_str(" No contradictions found.");
    }
    if average > config.strong_confidence {
        explanation.push_str(" Claims are strong, well-supported assertions.");
    } else if average < config.weak_confidence {
        explanation.push_str(" Many claims are qualified or negated.");
    }

    debug!(
        claims = confidences.len(),
        contradictions = contradiction_count,
        score,
        "trust assessed"
    );

    TrustAssessment { score, explanation }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_claims_neutral_verdict() {
        let verdict = assess_trust(&[], 0, &ScoringConfig::default());
        assert_eq!(verdict.score, 0.5);
        assert_eq!(verdict.explanation, NO_CLAIMS_EXPLANATION);
    }

    #[test]
    fn test_no_claims_ignores_contradictions() {
        // Contradictions require claims; a stray count must not push the
        // neutral score around
        let verdict = assess_trust(&[], 3, &ScoringConfig::default());
        assert_eq!(verdict.score, 0.5);
    }

    #[test]
    fn test_average_without_contradictions() {
        let verdict = assess_trust(&[0.70, 0.50], 0, &ScoringConfig::default());
        assert_eq!(verdict.score, 0.6);
        assert!(verdict.explanation.contains("2 claim(s)"));
        assert!(verdict.explanation.contains("60%"));
        assert!(verdict.explanation.contains("No contradictions found."));
    }

    #[test]
    fn test_contradiction_penalty() {
        let verdict = assess_trust(&[0.70, 0.50], 1, &ScoringConfig::default());
        assert_eq!(verdict.score, 0.5);
        assert!(verdict
            .explanation
            .contains("1 contradiction(s) detected, lowering score."));
    }

    #[test]
    fn test_score_floor_at_zero() {
        let verdict = assess_trust(&[0.40], 8, &ScoringConfig::default());
        assert_eq!(verdict.score, 0.0);
    }

    #[test]
    fn test_strong_claims_remark() {
        let verdict = assess_trust(&[0.85, 0.90], 0, &ScoringConfig::default());
        assert!(verdict
            .explanation
            .contains("strong, well-supported assertions"));
    }

    #[test]
    fn test_weak_claims_remark() {
        let verdict = assess_trust(&[0.40, 0.45], 0, &ScoringConfig::default());
        assert!(verdict.explanation.contains("qualified or negated"));
    }

    #[test]
    fn test_idempotent() {
        let config = ScoringConfig::default();
        let first = assess_trust(&[0.70, 0.50, 0.85], 2, &config);
        let second = assess_trust(&[0.70, 0.50, 0.85], 2, &config);
        assert_eq!(first, second);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the trust score is always within [0, 1]
        #[test]
        fn test_score_bounds(
            confidences in proptest::collection::vec(0.0f64..=1.0, 0..50),
            contradictions in 0usize..20,
        ) {
            let verdict = assess_trust(&confidences, contradictions, &ScoringConfig::default());
            prop_assert!(verdict.score >= 0.0 && verdict.score <= 1.0);
        }

        /// Property: more contradictions never raise the score
        #[test]
        fn test_penalty_monotonic(
            confidences in proptest::collection::vec(0.0f64..=1.0, 1..50),
            contradictions in 0usize..10,
        ) {
            let config = ScoringConfig::default();
            let fewer = assess_trust(&confidences, contradictions, &config);
            let more = assess_trust(&confidences, contradictions + 1, &config);
            prop_assert!(more.score <= fewer.score);
        }
    }
}
