//! Pairwise contradiction classification
//!
//! A pure function over two claim texts plus their negation flags. The
//! decision rules run in a fixed order and the first match wins:
//! direct negation, then semantic opposites, then numeric discrepancy.

use crate::config::DetectorConfig;
use crate::error::DetectorError;
use crate::index::CorpusIndex;
use crate::keywords::{extract_keywords, keyword_overlap, normalize_token, stems_match};
use crate::lexicon::ConflictLexicon;
use rayon::prelude::*;
use regex::Regex;
use std::collections::HashSet;
use verity_domain::{ClaimId, ClaimSnapshot, ContradictionKind};

/// A classified conflict between two claims
///
/// Only real conflicts are represented; "no contradiction" is the absence
/// of a finding and is never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictFinding {
    /// Conflict classification
    pub kind: ContradictionKind,

    /// How serious the conflict is [0.0, 1.0], rounded to 2 decimals
    pub importance: f64,

    /// Human-readable description
    pub explanation: String,
}

/// Detects contradictions between claim pairs
#[derive(Debug)]
pub struct ContradictionDetector {
    config: DetectorConfig,
    stop_words: HashSet<String>,
    opposite_stems: Vec<(String, String)>,
    digits: Regex,
}

impl ContradictionDetector {
    /// Create a detector with the default vocabulary tables
    pub fn new(config: DetectorConfig) -> Result<Self, DetectorError> {
        Self::with_lexicon(config, &ConflictLexicon::default())
    }

    /// Create a detector with custom vocabulary tables
    pub fn with_lexicon(
        config: DetectorConfig,
        lexicon: &ConflictLexicon,
    ) -> Result<Self, DetectorError> {
        config.validate().map_err(DetectorError::Config)?;
        let opposite_stems = lexicon
            .opposite_pairs
            .iter()
            .map(|(a, b)| (normalize_token(a), normalize_token(b)))
            .collect();
        Ok(Self {
            config,
            stop_words: lexicon.stop_words.iter().cloned().collect(),
            opposite_stems,
            digits: Regex::new(r"\d+")?,
        })
    }

    /// Access the active configuration
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Normalized sequence similarity between two texts [0.0, 1.0]
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
    }

    /// Jaccard overlap between the two texts' keyword sets [0.0, 1.0]
    pub fn keyword_overlap(&self, a: &str, b: &str) -> f64 {
        let stops: HashSet<&str> = self.stop_words.iter().map(String::as_str).collect();
        let keywords_a = extract_keywords(a, &stops, self.config.max_keywords);
        let keywords_b = extract_keywords(b, &stops, self.config.max_keywords);
        keyword_overlap(&keywords_a, &keywords_b)
    }

    /// Classify a claim pair, returning `None` when no rule fires
    ///
    /// Evaluation is order-independent: swapping the two claims yields the
    /// same kind and importance.
    pub fn detect(
        &self,
        text_a: &str,
        negated_a: bool,
        text_b: &str,
        negated_b: bool,
    ) -> Option<ConflictFinding> {
        let similarity = self.similarity(text_a, text_b);
        let overlap = self.keyword_overlap(text_a, text_b);

        // Rule 1: same-ish claim, opposite negation
        if similarity > self.config.similarity_threshold && negated_a != negated_b {
            return Some(ConflictFinding {
                kind: ContradictionKind::DirectNegation,
                importance: round2((0.8 + overlap * 0.2).clamp(0.0, 1.0)),
                explanation: format!(
                    "Direct contradiction: one claims something, the other denies it (similarity: {})",
                    round2(similarity)
                ),
            });
        }

        // Rule 2: shared topic, opposite concepts
        if overlap > self.config.semantic_overlap && self.has_opposite_concepts(text_a, text_b) {
            return Some(ConflictFinding {
                kind: ContradictionKind::Semantic,
                importance: round2((0.7 + overlap * 0.25).clamp(0.0, 1.0)),
                explanation: format!(
                    "Semantic contradiction: claims use opposite concepts (keywords: {:.0}% overlap)",
                    overlap * 100.0
                ),
            });
        }

        // Rule 3: shared topic, different numbers
        if overlap > self.config.statistical_overlap {
            if let (Some(number_a), Some(number_b)) =
                (self.first_number(text_a), self.first_number(text_b))
            {
                if number_a != number_b {
                    return Some(ConflictFinding {
                        kind: ContradictionKind::Statistical,
                        importance: round2((0.65 + overlap * 0.3).clamp(0.0, 1.0)),
                        explanation: format!(
                            "Statistical discrepancy: different numbers reported ({} vs {})",
                            number_a, number_b
                        ),
                    });
                }
            }
        }

        None
    }

    /// Compare one new claim against a corpus snapshot
    ///
    /// With an index the scan visits claims sharing at least one token
    /// with the new claim, plus opposite-negation claims whose length gap
    /// still allows the direct-negation similarity cutoff to be cleared;
    /// without an index it is a full O(N) pass. Either way the candidate
    /// set covers every pair a rule could fire on, so indexed and
    /// exhaustive scans return the same findings in snapshot order.
    pub fn scan(
        &self,
        new_text: &str,
        new_negated: bool,
        corpus: &[ClaimSnapshot],
        index: Option<&CorpusIndex>,
    ) -> Vec<(ClaimId, ConflictFinding)> {
        match index.filter(|_| self.config.use_index) {
            Some(index) => {
                let mut positions = index.candidates(new_text);
                // Direct negation needs no shared vocabulary, only high
                // sequence similarity. Normalized Levenshtein is bounded
                // above by 1 - |len_a - len_b| / max_len, so any
                // opposite-negation claim under that ceiling can be
                // skipped without changing the outcome.
                let new_len = new_text.to_lowercase().chars().count() as f64;
                for (position, existing) in corpus.iter().enumerate() {
                    if existing.is_negated == new_negated {
                        continue;
                    }
                    let existing_len = existing.text.to_lowercase().chars().count() as f64;
                    let longest = new_len.max(existing_len);
                    let ceiling = if longest == 0.0 {
                        1.0
                    } else {
                        1.0 - (new_len - existing_len).abs() / longest
                    };
                    if ceiling > self.config.similarity_threshold {
                        positions.push(position);
                    }
                }
                positions.sort_unstable();
                positions.dedup();
                positions
                    .into_iter()
                    .filter_map(|i| {
                        let existing = &corpus[i];
                        self.detect(new_text, new_negated, &existing.text, existing.is_negated)
                            .map(|finding| (existing.id, finding))
                    })
                    .collect()
            }
            None => corpus
                .iter()
                .filter_map(|existing| {
                    self.detect(new_text, new_negated, &existing.text, existing.is_negated)
                        .map(|finding| (existing.id, finding))
                })
                .collect(),
        }
    }

    /// Compare a batch of new claims against a corpus snapshot in parallel
    ///
    /// Each new-claim-vs-corpus scan is independent, so the batch fans out
    /// across worker threads. Results keep the input order.
    pub fn scan_batch(
        &self,
        new_claims: &[ClaimSnapshot],
        corpus: &[ClaimSnapshot],
    ) -> Vec<Vec<(ClaimId, ConflictFinding)>> {
        let index = if self.config.use_index {
            Some(CorpusIndex::build(corpus))
        } else {
            None
        };

        new_claims
            .par_iter()
            .map(|claim| self.scan(&claim.text, claim.is_negated, corpus, index.as_ref()))
            .collect()
    }

    fn has_opposite_concepts(&self, text_a: &str, text_b: &str) -> bool {
        let tokens_a: Vec<String> = text_a
            .to_lowercase()
            .split_whitespace()
            .map(normalize_token)
            .collect();
        let tokens_b: Vec<String> = text_b
            .to_lowercase()
            .split_whitespace()
            .map(normalize_token)
            .collect();

        let contains = |tokens: &[String], stem: &str| {
            tokens.iter().any(|token| stems_match(token, stem))
        };

        self.opposite_stems.iter().any(|(left, right)| {
            (contains(&tokens_a, left) && contains(&tokens_b, right))
                || (contains(&tokens_a, right) && contains(&tokens_b, left))
        })
    }

    fn first_number(&self, text: &str) -> Option<String> {
        self.digits.find(text).map(|m| m.as_str().to_string())
    }
}

/// Round to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: importance is always within [0, 1]
        #[test]
        fn test_importance_bounds(
            text_a in "[a-zA-Z0-9 %]{1,120}",
            text_b in "[a-zA-Z0-9 %]{1,120}",
            negated_a: bool,
            negated_b: bool,
        ) {
            let detector = ContradictionDetector::new(DetectorConfig::default()).unwrap();
            if let Some(finding) = detector.detect(&text_a, negated_a, &text_b, negated_b) {
                prop_assert!(finding.importance >= 0.0 && finding.importance <= 1.0);
            }
        }

        /// Property: indexed and exhaustive scans agree on any corpus
        #[test]
        fn test_indexed_scan_matches_exhaustive(
            texts in proptest::collection::vec("[a-z0-9 %]{1,60}", 0..8),
            negated in proptest::collection::vec(proptest::bool::ANY, 8),
            new_text in "[a-z0-9 %]{1,60}",
            new_negated: bool,
        ) {
            let corpus: Vec<ClaimSnapshot> = texts
                .iter()
                .enumerate()
                .map(|(i, text)| ClaimSnapshot {
                    id: ClaimId::from_value(i as u128 + 1),
                    text: text.clone(),
                    is_negated: negated[i],
                })
                .collect();
            let detector = ContradictionDetector::new(DetectorConfig::default()).unwrap();
            let index = CorpusIndex::build(&corpus);
            prop_assert_eq!(
                detector.scan(&new_text, new_negated, &corpus, Some(&index)),
                detector.scan(&new_text, new_negated, &corpus, None)
            );
        }

        /// Property: classification is order-independent
        #[test]
        fn test_pair_symmetry(
            text_a in "[a-z0-9 ]{1,120}",
            text_b in "[a-z0-9 ]{1,120}",
            negated_a: bool,
            negated_b: bool,
        ) {
            let detector = ContradictionDetector::new(DetectorConfig::default()).unwrap();
            let forward = detector.detect(&text_a, negated_a, &text_b, negated_b);
            let backward = detector.detect(&text_b, negated_b, &text_a, negated_a);
            match (forward, backward) {
                (Some(f), Some(b)) => {
                    prop_assert_eq!(f.kind, b.kind);
                    prop_assert_eq!(f.importance, b.importance);
                }
                (None, None) => {}
                (f, b) => prop_assert!(false, "asymmetric verdict: {:?} vs {:?}", f, b),
            }
        }
    }
}
