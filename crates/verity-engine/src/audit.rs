//! Audit event trail
//!
//! Every pipeline action emits a structured event describing what
//! happened. Sinks decide where events go; the default sink writes them as
//! JSON lines through the tracing subscriber.

use serde::Serialize;
use tracing::{info, warn};

/// A structured record of one pipeline action
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AuditEvent {
    /// A content item entered the pipeline
    ContentSubmitted {
        /// Content id as a UUID string
        content_id: String,
        /// Character length of the submitted text
        chars: usize,
    },

    /// Extraction finished for a content item
    ClaimsExtracted {
        /// Content id as a UUID string
        content_id: String,
        /// Number of unique claims extracted
        count: usize,
    },

    /// A contradiction was recorded between two claims
    ContradictionDetected {
        /// First claim of the pair
        claim_a: String,
        /// Second claim of the pair
        claim_b: String,
        /// Conflict classification
        kind: String,
        /// Conflict importance [0.0, 1.0]
        importance: f64,
    },

    /// A trust score was computed for a content item
    ScoreCalculated {
        /// Content id as a UUID string
        content_id: String,
        /// The trust score [0.0, 1.0]
        score: f64,
    },

    /// A source credibility score was recomputed
    SourceUpdated {
        /// Source id as a UUID string
        source_id: String,
        /// The new credibility score [0.0, 1.0]
        score: f64,
    },
}

/// Receives audit events
///
/// Sinks must tolerate concurrent emission; the worker records events from
/// multiple tasks.
pub trait AuditSink: Send + Sync {
    /// Record one event
    fn record(&self, event: &AuditEvent);
}

/// Sink that writes events as JSON lines via tracing
#[derive(Debug, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, event: &AuditEvent) {
        match serde_json::to_string(event) {
            Ok(line) => info!(target: "verity::audit", "{}", line),
            Err(e) => warn!(target: "verity::audit", "unserializable audit event: {}", e),
        }
    }
}

/// Sink that drops all events
#[derive(Debug, Default)]
pub struct NullAuditSink;

impl AuditSink for NullAuditSink {
    fn record(&self, _event: &AuditEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_with_tag() {
        let event = AuditEvent::ClaimsExtracted {
            content_id: "0189d6e2-0000-7000-8000-000000000000".to_string(),
            count: 2,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event\":\"claims_extracted\""));
        assert!(json.contains("\"count\":2"));
    }

    #[test]
    fn test_contradiction_event_carries_kind() {
        let event = AuditEvent::ContradictionDetected {
            claim_a: "a".to_string(),
            claim_b: "b".to_string(),
            kind: "direct_negation".to_string(),
            importance: 0.9,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event\":\"contradiction_detected\""));
        assert!(json.contains("\"kind\":\"direct_negation\""));
    }

    #[test]
    fn test_null_sink_accepts_events() {
        let sink = NullAuditSink;
        sink.record(&AuditEvent::ScoreCalculated {
            content_id: "c".to_string(),
            score: 0.5,
        });
    }
}
