//! Keyword extraction and token normalization
//!
//! Keywords drive the overlap measure; normalized tokens drive the
//! opposite-pair matching. Both are deterministic: keyword order is
//! first-seen, and the cap is applied after ordering.

use std::collections::HashSet;

/// Punctuation stripped from word edges
const EDGE_PUNCT: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Punctuation stripped during token normalization (wider set)
const TOKEN_PUNCT: &[char] = &[
    '.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}', '"', '\'',
];

/// Extract up to `max_keywords` keywords from a text
///
/// Keywords are lowercase words longer than 3 characters after edge
/// punctuation is stripped, excluding stop words. First-seen order is kept
/// so the cap is deterministic.
pub fn extract_keywords(text: &str, stop_words: &HashSet<&str>, max_keywords: usize) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut keywords = Vec::new();

    for word in text.to_lowercase().split_whitespace() {
        let stripped = word.trim_matches(EDGE_PUNCT);
        if stripped.chars().count() <= 3 || stop_words.contains(stripped) {
            continue;
        }
        if seen.insert(stripped.to_string()) {
            keywords.push(stripped.to_string());
            if keywords.len() >= max_keywords {
                break;
            }
        }
    }

    keywords
}

/// Jaccard overlap between two keyword lists
pub fn keyword_overlap(keywords_a: &[String], keywords_b: &[String]) -> f64 {
    if keywords_a.is_empty() || keywords_b.is_empty() {
        return 0.0;
    }

    let set_a: HashSet<&str> = keywords_a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = keywords_b.iter().map(String::as_str).collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Very simple stemming for opposite-pair checks
///
/// Strips surrounding punctuation, then the first matching suffix of
/// ing/ed/es/s - but only when the stem keeps more than 2 characters.
pub fn normalize_token(word: &str) -> String {
    let word = word.to_lowercase();
    let word = word.trim_matches(TOKEN_PUNCT);

    for suffix in ["ing", "ed", "es", "s"] {
        if word.ends_with(suffix) && word.chars().count() > suffix.len() + 2 {
            return word[..word.len() - suffix.len()].to_string();
        }
    }
    word.to_string()
}

/// Whether two normalized stems refer to the same word
///
/// Exact equality, or a prefix relation when the shorter stem has at least
/// 4 characters (so "increas" matches "increase" while "up" only matches
/// exactly).
pub fn stems_match(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    let shorter = a.len().min(b.len());
    shorter >= 4 && (a.starts_with(b) || b.starts_with(a))
}
