//! Sentence segmentation
//!
//! Stateless splitting of raw text into sentence candidates. The split is
//! intentionally simple: sentence-terminal punctuation followed by
//! whitespace. The final fragment keeps any trailing terminator.

use regex::Regex;

/// Splits raw text into trimmed sentence candidates
#[derive(Debug)]
pub struct SentenceSegmenter {
    boundary: Regex,
    min_chars: usize,
}

impl SentenceSegmenter {
    /// Create a segmenter discarding sentences at or below `min_chars`
    pub fn new(min_chars: usize) -> Self {
        // Infallible: the pattern is a compile-time constant
        let boundary = Regex::new(r"[.!?]\s+").unwrap();
        Self { boundary, min_chars }
    }

    /// Split text into sentences, filtering out short fragments
    pub fn segment(&self, text: &str) -> Vec<String> {
        self.boundary
            .split(text)
            .map(str::trim)
            .filter(|s| s.chars().count() > self.min_chars)
            .map(str::to_string)
            .collect()
    }
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new(15)
    }
}
