//! Vocabulary tables for contradiction detection
//!
//! Stop words excluded from keyword sets, and the opposite-concept pairs
//! driving the semantic rule. Held in a plain value so callers can swap in
//! domain-specific tables.

/// Stop words and opposite-concept pairs
#[derive(Debug, Clone)]
pub struct ConflictLexicon {
    /// Words never treated as keywords
    pub stop_words: Vec<String>,

    /// Pairs of opposite concepts; a normalized token matching one side
    /// while the other text contains the paired side signals a semantic
    /// conflict
    pub opposite_pairs: Vec<(String, String)>,
}

impl Default for ConflictLexicon {
    fn default() -> Self {
        Self {
            stop_words: [
                "is", "are", "was", "were", "the", "a", "an", "and", "or", "but", "in", "on",
                "at", "to", "for", "of", "with", "by", "from", "be", "been", "being",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            opposite_pairs: [
                ("increase", "decrease"),
                ("rise", "fall"),
                ("up", "down"),
                ("safe", "dangerous"),
                ("effective", "ineffective"),
                ("true", "false"),
                ("yes", "no"),
                ("support", "oppose"),
                ("help", "harm"),
                ("benefit", "harm"),
                ("flat", "spherical"),
            ]
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect(),
        }
    }
}
