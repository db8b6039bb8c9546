//! # Verity Engine
//!
//! The claim analysis pipeline, end to end.
//!
//! ## Overview
//!
//! Submitted text flows through four stages:
//!
//! 1. **Extraction** - segment the text into sentences, keep the ones that
//!    assert something, score each one's confidence, and deduplicate.
//! 2. **Contradiction detection** - compare new claims against the
//!    existing corpus snapshot and against each other.
//! 3. **Trust aggregation** - fold claim confidences and contradictions
//!    into one trust score with a human-readable explanation.
//! 4. **Audit** - every stage emits a structured event through the
//!    configured [`AuditSink`].
//!
//! The engine itself is pure over its inputs: callers supply the corpus
//! snapshot and the clock, and persist the outcome through their
//! [`verity_domain::ClaimStore`] implementation. [`ProcessingWorker`] adds
//! the asynchronous shell: bounded retries for transient failures and
//! per-source serialization of credibility recomputes.
//!
//! ## Example
//!
//! ```
//! use verity_engine::{AnalysisEngine, EngineConfig};
//! use verity_domain::ContentId;
//!
//! let engine = AnalysisEngine::new(EngineConfig::default()).unwrap();
//! let outcome = engine
//!     .analyze(
//!         "The vaccine is 95% effective. The vaccine is not effective at all.",
//!         ContentId::new(),
//!         None,
//!         &[],
//!         0,
//!     )
//!     .unwrap();
//! assert_eq!(outcome.claims.len(), 2);
//! assert_eq!(outcome.contradictions.len(), 1);
//! ```

#![warn(missing_docs)]

pub mod audit;
pub mod engine;
pub mod error;
pub mod verify;
pub mod worker;

pub use audit::{AuditEvent, AuditSink, NullAuditSink, TracingAuditSink};
pub use engine::{AnalysisEngine, AnalysisOutcome, EngineConfig};
pub use error::EngineError;
pub use verify::{apply_verification, verify_claims, CORROBORATION_BOOST, REFUTATION_PENALTY};
pub use worker::{ProcessingWorker, WorkerConfig, WorkerError};
