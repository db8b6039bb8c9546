//! Candidate deduplication
//!
//! Multiple extraction strategies produce overlapping candidates, so the
//! merged list must be reduced to a set with no two near-duplicates.
//! First-seen order wins: later duplicates are dropped.

use crate::types::ClaimCandidate;
use std::collections::HashSet;

/// Remove near-duplicate candidates, keeping first-seen order
///
/// A candidate duplicates an accepted one when either text is a
/// case-insensitive substring of the other, or their word-set Jaccard
/// overlap exceeds `overlap_threshold`.
pub fn deduplicate(candidates: Vec<ClaimCandidate>, overlap_threshold: f64) -> Vec<ClaimCandidate> {
    let mut unique: Vec<ClaimCandidate> = Vec::new();
    let mut kept_lower: Vec<String> = Vec::new();

    for candidate in candidates {
        let lower = candidate.text.to_lowercase();
        let is_duplicate = kept_lower
            .iter()
            .any(|existing| texts_duplicate(&lower, existing, overlap_threshold));

        if !is_duplicate {
            kept_lower.push(lower);
            unique.push(candidate);
        }
    }

    unique
}

fn texts_duplicate(a: &str, b: &str, overlap_threshold: f64) -> bool {
    if a.contains(b) || b.contains(a) {
        return true;
    }
    word_overlap(a, b) > overlap_threshold
}

/// Jaccard overlap between the word sets of two lowercased texts
fn word_overlap(a: &str, b: &str) -> f64 {
    let words_a: HashSet<&str> = a.split_whitespace().collect();
    let words_b: HashSet<&str> = b.split_whitespace().collect();

    if words_a.is_empty() || words_b.is_empty() {
        return 0.0;
    }

    let intersection = words_a.intersection(&words_b).count();
    let union = words_a.union(&words_b).count();
    intersection as f64 / union as f64
}
