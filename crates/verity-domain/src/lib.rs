//! Verity Domain Layer
//!
//! This crate contains the core data model for Verity, a claim analysis and
//! trust scoring engine. It defines the fundamental records, value objects,
//! and trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Claim**: a single extracted factual assertion with a confidence score
//! - **Contradiction**: a detected logical conflict between two claims,
//!   classified by kind
//! - **Content**: a text submission owning its extracted claims, with a
//!   derived trust score
//! - **Source**: an attribution target carrying derived reliability and bias
//!   scores
//!
//! ## Architecture
//!
//! Entities reference each other by value (`ClaimId`, `ContentId`,
//! `SourceId`), never through live pointers. Derived scores are caches over
//! the owned records and must be recomputable from scratch at any time.
//! Infrastructure implementations (persistence, verification lookups) live
//! behind the traits in [`traits`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod content;
pub mod contradiction;
pub mod source;
pub mod traits;

// Re-exports for convenience
pub use claim::{Claim, ClaimId};
pub use content::{Content, ContentId, ProcessingStatus};
pub use contradiction::{Contradiction, ContradictionId, ContradictionKind};
pub use source::{Source, SourceId};
pub use traits::{ClaimSnapshot, ClaimStore, FactVerifier, Verification};
