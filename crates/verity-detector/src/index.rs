//! Inverted token index over a claim corpus
//!
//! The semantic and statistical rules require non-zero keyword overlap,
//! which implies at least one shared token. The index maps tokens to
//! claim positions so a scan visits the sharing subset instead of the
//! whole corpus for those rules. The direct-negation rule has no shared
//! vocabulary requirement; the detector widens the candidate set for it
//! separately.

use std::collections::HashMap;
use verity_domain::ClaimSnapshot;

/// Token-to-claim-position index for candidate narrowing
#[derive(Debug, Default)]
pub struct CorpusIndex {
    postings: HashMap<String, Vec<usize>>,
}

impl CorpusIndex {
    /// Build an index over a corpus slice
    ///
    /// Positions refer into the slice the index was built from; callers
    /// must pass the same slice to lookups.
    pub fn build(corpus: &[ClaimSnapshot]) -> Self {
        let mut postings: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, claim) in corpus.iter().enumerate() {
            for token in tokenize(&claim.text) {
                let entry = postings.entry(token).or_default();
                if entry.last() != Some(&position) {
                    entry.push(position);
                }
            }
        }
        Self { postings }
    }

    /// Positions of claims sharing at least one token with `text`
    ///
    /// Sorted ascending, so scan results come back in corpus order.
    pub fn candidates(&self, text: &str) -> Vec<usize> {
        let mut positions: Vec<usize> = tokenize(text)
            .into_iter()
            .filter_map(|token| self.postings.get(&token))
            .flatten()
            .copied()
            .collect();
        positions.sort_unstable();
        positions.dedup();
        positions
    }

    /// Number of distinct tokens indexed
    pub fn token_count(&self) -> usize {
        self.postings.len()
    }
}

/// Lowercased, edge-punctuation-stripped tokens of more than one character
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| word.trim_matches(['.', ',', '!', '?', ';', ':']).to_string())
        .filter(|token| token.chars().count() > 1)
        .collect()
}
