//! # Verity Scoring
//!
//! Trust aggregation and source credibility.
//!
//! ## Overview
//!
//! Two independent scoring surfaces live here:
//!
//! - **Content trust** ([`assess_trust`]) folds a content item's claim
//!   confidences and contradiction count into one score with a
//!   human-readable explanation. Zero claims is a valid outcome and maps
//!   to the neutral score.
//! - **Source credibility** ([`assess_credibility`]) combines a source's
//!   verification history, recency, breadth, and language neutrality into
//!   a weighted composite with a per-component breakdown.
//!
//! Both functions are pure: callers supply the observed inputs (and the
//! current time for credibility), so the same inputs always produce the
//! same scores.

#![warn(missing_docs)]

pub mod config;
pub mod credibility;
pub mod sentiment;
pub mod trust;

pub use config::{CredibilityConfig, ScoringConfig};
pub use credibility::{assess_credibility, CredibilityBreakdown, SourceProfile};
pub use sentiment::{LexiconSentiment, SentimentAnalyzer};
pub use trust::{assess_trust, TrustAssessment, NO_CLAIMS_EXPLANATION};
