//! Entity-anchored alternate extraction strategy
//!
//! A second, independent source of claim candidates: numeric and temporal
//! entities are located by pattern, and the surrounding context becomes the
//! candidate text. Confidence is keyed by entity category - hard quantities
//! (percentages, money) score higher than bare numbers. Candidates from
//! this strategy are merged with sentence candidates before deduplication.

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::types::{ClaimCandidate, Strategy};
use regex::Regex;

/// Entity categories the strategy can anchor on, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityCategory {
    /// A percentage value ("95%")
    Percent,
    /// A currency amount ("$3,000")
    Money,
    /// A four-digit year
    Date,
    /// Any other number
    Number,
}

impl EntityCategory {
    /// Label used inside the candidate text
    pub fn label(&self) -> &'static str {
        match self {
            EntityCategory::Percent => "PERCENT",
            EntityCategory::Money => "MONEY",
            EntityCategory::Date => "DATE",
            EntityCategory::Number => "NUMBER",
        }
    }

    /// Per-category extraction confidence
    pub fn confidence(&self) -> f64 {
        match self {
            EntityCategory::Percent => 0.85,
            EntityCategory::Money => 0.80,
            EntityCategory::Date => 0.80,
            EntityCategory::Number => 0.60,
        }
    }
}

/// Extracts entity-anchored claim candidates
#[derive(Debug)]
pub struct EntityExtractor {
    patterns: Vec<(EntityCategory, Regex)>,
    negation: Regex,
    qualifier: Regex,
    context_chars: usize,
    claim_limit: usize,
    min_context_chars: usize,
}

impl EntityExtractor {
    /// Build the extractor from configuration
    pub fn new(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        let patterns = vec![
            (EntityCategory::Percent, Regex::new(r"\b\d+(?:\.\d+)?%")?),
            (
                EntityCategory::Money,
                Regex::new(r"[$€£]\s?\d[\d,]*(?:\.\d+)?")?,
            ),
            (EntityCategory::Date, Regex::new(r"\b(?:19|20)\d{2}\b")?),
            (EntityCategory::Number, Regex::new(r"\b\d[\d,]*\b")?),
        ];
        Ok(Self {
            patterns,
            negation: Regex::new(r"\bnot\b")?,
            qualifier: Regex::new(r"\bmay\b")?,
            context_chars: config.entity_context_chars,
            claim_limit: config.entity_claim_limit,
            min_context_chars: config.min_sentence_chars,
        })
    }

    /// Extract entity-anchored candidates from text, in document order
    pub fn extract(&self, text: &str) -> Vec<ClaimCandidate> {
        let mut anchors: Vec<(usize, usize, EntityCategory, &str)> = Vec::new();

        for (category, pattern) in &self.patterns {
            for found in pattern.find_iter(text) {
                // Lower-priority categories skip spans already anchored
                // (a percent match would otherwise reappear as a number)
                let overlaps = anchors
                    .iter()
                    .any(|(start, end, _, _)| found.start() < *end && *start < found.end());
                if !overlaps {
                    anchors.push((found.start(), found.end(), *category, found.as_str()));
                }
            }
        }

        anchors.sort_by_key(|(start, _, _, _)| *start);

        let mut candidates = Vec::new();
        for (start, end, category, matched) in anchors {
            let context = self.context_window(text, start, end);
            if context.chars().count() < self.min_context_chars {
                continue;
            }

            let lower = context.to_lowercase();
            candidates.push(ClaimCandidate {
                text: format!("{} ({}): {}", matched, category.label(), context),
                confidence: category.confidence(),
                is_negated: self.negation.is_match(&lower),
                has_qualifier: self.qualifier.is_match(&lower),
                strategy: Strategy::Entity,
            });

            if candidates.len() >= self.claim_limit {
                break;
            }
        }

        candidates
    }

    /// Slice a window around the match, clamped to char boundaries
    fn context_window<'t>(&self, text: &'t str, start: usize, end: usize) -> &'t str {
        let mut lo = start.saturating_sub(self.context_chars);
        while lo > 0 && !text.is_char_boundary(lo) {
            lo -= 1;
        }
        let mut hi = (end + self.context_chars).min(text.len());
        while hi < text.len() && !text.is_char_boundary(hi) {
            hi += 1;
        }
        text[lo..hi].trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> EntityExtractor {
        EntityExtractor::new(&ExtractorConfig::default()).unwrap()
    }

    #[test]
    fn test_percent_anchor() {
        let candidates = extractor().extract("The vaccine is 95% effective against the virus.");
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].text.starts_with("95% (PERCENT):"));
        assert_eq!(candidates[0].confidence, 0.85);
    }

    #[test]
    fn test_percent_not_duplicated_as_number() {
        let candidates = extractor().extract("The vaccine is 95% effective against the virus.");
        assert!(candidates.iter().all(|c| !c.text.contains("(NUMBER)")));
    }

    #[test]
    fn test_money_anchor() {
        let candidates = extractor().extract("The project cost $3,000 more than initially planned.");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].confidence, 0.80);
        assert!(candidates[0].text.contains("(MONEY)"));
    }

    #[test]
    fn test_year_anchor() {
        let candidates = extractor().extract("Global emissions peaked in 2019 according to the report.");
        assert!(candidates.iter().any(|c| c.text.starts_with("2019 (DATE):")));
    }

    #[test]
    fn test_negation_flag_from_context() {
        let candidates = extractor().extract("The drug was not approved in 2020 by the agency.");
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].is_negated);
    }

    #[test]
    fn test_claim_limit_respected() {
        let text = (0..30)
            .map(|i| format!("Measurement number {} recorded a value near the sensor limit.", i + 100))
            .collect::<Vec<_>>()
            .join(" ");
        let candidates = extractor().extract(&text);
        assert!(candidates.len() <= 10);
    }

    #[test]
    fn test_no_entities_no_candidates() {
        let candidates = extractor().extract("The committee met again to discuss the agenda.");
        assert!(candidates.is_empty());
    }
}
