//! # Verity Detector
//!
//! Contradiction detection between claims.
//!
//! ## Overview
//!
//! The detector classifies a pair of claims with an ordered set of
//! decision rules. The first rule that fires determines the verdict:
//!
//! 1. **Direct negation** - the texts are close variants of each other
//!    but disagree on negation ("X is effective" vs "X is not effective").
//! 2. **Semantic** - the texts share a topic and use opposite concepts
//!    ("prices increased" vs "prices decreased").
//! 3. **Statistical** - the texts share a topic but report different
//!    numbers ("50 people attended" vs "75 people attended").
//!
//! A pair that matches no rule is simply not a contradiction; there is no
//! "maybe" verdict.
//!
//! ## Scanning a corpus
//!
//! New claims are compared against a snapshot of the existing corpus.
//! [`CorpusIndex`] narrows each comparison to claims that share at least
//! one token with the new claim, and [`ContradictionDetector::scan_batch`]
//! fans independent scans across threads.
//!
//! ## Example
//!
//! ```
//! use verity_detector::{ContradictionDetector, DetectorConfig};
//! use verity_domain::ContradictionKind;
//!
//! let detector = ContradictionDetector::new(DetectorConfig::default()).unwrap();
//! let finding = detector
//!     .detect(
//!         "The vaccine is 95% effective",
//!         false,
//!         "The vaccine is not effective at all.",
//!         true,
//!     )
//!     .unwrap();
//! assert_eq!(finding.kind, ContradictionKind::DirectNegation);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod detector;
pub mod error;
pub mod index;
pub mod keywords;
pub mod lexicon;

pub use config::DetectorConfig;
pub use detector::{ConflictFinding, ContradictionDetector};
pub use error::DetectorError;
pub use index::CorpusIndex;
pub use keywords::{extract_keywords, keyword_overlap, normalize_token, stems_match};
pub use lexicon::ConflictLexicon;
