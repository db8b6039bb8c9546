//! Verity Extractor
//!
//! Converts free-form text submissions into claim candidates using
//! deterministic, rule-based heuristics.
//!
//! # Overview
//!
//! The extractor is the first stage of the analysis pipeline. It is
//! recall-oriented: the classifier accepts anything that looks remotely
//! claim-like, and the confidence scorer plus acceptance threshold do the
//! filtering.
//!
//! # Architecture
//!
//! ```text
//! Text → Segmenter → Classifier → Scorer ─┐
//!                                         ├→ Deduplicator → Candidates
//! Text → Entity strategy ─────────────────┘
//! ```
//!
//! Everything is pure over the input text and an [`ExtractorConfig`]:
//! identical inputs always produce the identical candidate list, in the
//! same order. No lookup table is mutable at runtime.
//!
//! # Example
//!
//! ```
//! use verity_extractor::{ClaimExtractor, ExtractorConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = ClaimExtractor::new(ExtractorConfig::default())?;
//! let candidates = extractor.extract("The vaccine is 95% effective.")?;
//!
//! assert_eq!(candidates.len(), 1);
//! assert_eq!(candidates[0].confidence, 0.70);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod dedup;
mod entity;
mod error;
mod extractor;
mod lexicon;
mod scorer;
mod segmenter;
mod types;

pub use config::ExtractorConfig;
pub use dedup::deduplicate;
pub use entity::{EntityCategory, EntityExtractor};
pub use error::ExtractorError;
pub use extractor::ClaimExtractor;
pub use lexicon::{ClaimLexicon, CompiledLexicon};
pub use segmenter::SentenceSegmenter;
pub use types::{ClaimCandidate, Strategy};
