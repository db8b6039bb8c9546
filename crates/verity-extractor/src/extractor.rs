//! Claim extraction pipeline
//!
//! Orchestrates the strategies: segment, classify, score, merge with the
//! entity strategy, then deduplicate. Pure over its inputs - given the same
//! text and configuration it produces the identical candidate list.

use crate::config::ExtractorConfig;
use crate::dedup::deduplicate;
use crate::entity::EntityExtractor;
use crate::error::ExtractorError;
use crate::lexicon::{ClaimLexicon, CompiledLexicon};
use crate::scorer::score_sentence;
use crate::segmenter::SentenceSegmenter;
use crate::types::ClaimCandidate;
use tracing::{debug, info};

/// The claim extractor: raw text in, deduplicated candidates out
#[derive(Debug)]
pub struct ClaimExtractor {
    config: ExtractorConfig,
    lexicon: CompiledLexicon,
    segmenter: SentenceSegmenter,
    entity: EntityExtractor,
}

impl ClaimExtractor {
    /// Create an extractor with the given configuration and default lexicon
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        Self::with_lexicon(config, &ClaimLexicon::default())
    }

    /// Create an extractor with a custom lexicon
    pub fn with_lexicon(
        config: ExtractorConfig,
        lexicon: &ClaimLexicon,
    ) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        let compiled = CompiledLexicon::compile(lexicon)?;
        let segmenter = SentenceSegmenter::new(config.min_sentence_chars);
        let entity = EntityExtractor::new(&config)?;
        Ok(Self {
            config,
            lexicon: compiled,
            segmenter,
            entity,
        })
    }

    /// Access the active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract claim candidates from raw text
    ///
    /// Empty and over-length inputs are rejected before any extraction
    /// work. A text yielding zero candidates is a valid, empty result - not
    /// an error.
    pub fn extract(&self, text: &str) -> Result<Vec<ClaimCandidate>, ExtractorError> {
        if text.trim().is_empty() {
            return Err(ExtractorError::EmptyText);
        }
        let char_count = text.chars().count();
        if char_count > self.config.max_text_chars {
            return Err(ExtractorError::TextTooLong(
                char_count,
                self.config.max_text_chars,
            ));
        }

        let sentences = self.segmenter.segment(text);
        debug!("Segmented into {} sentence candidates", sentences.len());

        // Strategy 1: sentence classification + confidence scoring
        let mut candidates: Vec<ClaimCandidate> = sentences
            .iter()
            .filter(|s| self.lexicon.is_claim_sentence(s))
            .map(|s| score_sentence(&self.lexicon, s))
            .filter(|c| c.confidence >= self.config.confidence_threshold)
            .collect();

        // Strategy 2: entity-anchored extraction
        if self.config.entity_strategy {
            candidates.extend(self.entity.extract(text));
        }

        let unique = deduplicate(candidates, self.config.duplicate_overlap_threshold);

        info!(
            "Extracted {} unique claim candidates from {} chars",
            unique.len(),
            char_count
        );
        Ok(unique)
    }
}
