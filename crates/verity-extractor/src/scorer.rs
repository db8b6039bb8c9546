//! Confidence scoring for accepted claim sentences

use crate::lexicon::CompiledLexicon;
use crate::types::{round2, ClaimCandidate, Strategy};

/// Base confidence before adjustments
const BASE_CONFIDENCE: f64 = 0.75;

/// Floor of the clamp applied to sentence confidence
const MIN_CONFIDENCE: f64 = 0.35;

/// Score a classified sentence into a claim candidate
///
/// Starts at 0.75 and applies additive adjustments in fixed order:
/// negation -0.15, qualifier -0.10, long sentence (> 20 words) +0.10,
/// short sentence (< 10 words) -0.10, digit present +0.05. The result is
/// clamped to [0.35, 1.0] and rounded to two decimals.
pub fn score_sentence(lexicon: &CompiledLexicon, sentence: &str) -> ClaimCandidate {
    let is_negated = lexicon.is_negated(sentence);
    let has_qualifier = lexicon.has_qualifier(sentence);

    let mut confidence = BASE_CONFIDENCE;

    if is_negated {
        confidence -= 0.15;
    }
    if has_qualifier {
        confidence -= 0.10;
    }

    // Longer sentences carry more detail
    let word_count = sentence.split_whitespace().count();
    if word_count > 20 {
        confidence += 0.10;
    } else if word_count < 10 {
        confidence -= 0.10;
    }

    // Statistics boost
    if lexicon.has_digit(sentence) {
        confidence += 0.05;
    }

    confidence = confidence.clamp(MIN_CONFIDENCE, 1.0);

    ClaimCandidate {
        text: sentence.trim().to_string(),
        confidence: round2(confidence),
        is_negated,
        has_qualifier,
        strategy: Strategy::Sentence,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: sentence confidence is always within [0.35, 1.0]
        #[test]
        fn test_confidence_bounds(sentence in "[a-zA-Z0-9 %.,]{1,200}") {
            let lexicon = CompiledLexicon::default_lexicon().unwrap();
            let candidate = score_sentence(&lexicon, &sentence);
            prop_assert!(candidate.confidence >= 0.35 && candidate.confidence <= 1.0);
        }

        /// Property: scoring the same sentence twice is deterministic
        #[test]
        fn test_scoring_deterministic(sentence in "[a-zA-Z0-9 %.,]{1,200}") {
            let lexicon = CompiledLexicon::default_lexicon().unwrap();
            prop_assert_eq!(
                score_sentence(&lexicon, &sentence),
                score_sentence(&lexicon, &sentence)
            );
        }
    }
}
