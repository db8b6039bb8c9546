//! Pipeline orchestration
//!
//! The engine wires the stages together: extract candidates, mint claim
//! records, detect contradictions against the existing corpus and within
//! the new batch, then fold the results into a trust verdict. It holds no
//! storage; callers pass in the corpus snapshot and persist the outcome.

use crate::audit::{AuditEvent, AuditSink, TracingAuditSink};
use crate::error::EngineError;
use std::sync::Arc;
use tracing::info;
use verity_detector::{ContradictionDetector, CorpusIndex, DetectorConfig};
use verity_domain::{Claim, ClaimSnapshot, ContentId, Contradiction, SourceId};
use verity_extractor::{ClaimExtractor, ExtractorConfig};
use verity_scoring::{
    assess_credibility, assess_trust, CredibilityBreakdown, CredibilityConfig, LexiconSentiment,
    ScoringConfig, SourceProfile, TrustAssessment,
};

/// Configuration for every pipeline stage
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Claim extraction settings
    pub extractor: ExtractorConfig,

    /// Contradiction detection settings
    pub detector: DetectorConfig,

    /// Trust aggregation settings
    pub scoring: ScoringConfig,

    /// Source credibility settings
    pub credibility: CredibilityConfig,
}

impl EngineConfig {
    /// Preset with the stricter extraction threshold
    pub fn strict() -> Self {
        Self {
            extractor: ExtractorConfig::strict(),
            ..Default::default()
        }
    }
}

/// Everything the pipeline produced for one submission
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// Claims minted from the submitted text
    pub claims: Vec<Claim>,

    /// Contradictions found against the corpus and within the new batch
    pub contradictions: Vec<Contradiction>,

    /// Trust verdict for the content item
    pub trust: TrustAssessment,
}

/// The analysis pipeline
pub struct AnalysisEngine {
    extractor: ClaimExtractor,
    detector: ContradictionDetector,
    scoring: ScoringConfig,
    credibility: CredibilityConfig,
    sentiment: LexiconSentiment,
    audit: Arc<dyn AuditSink>,
}

impl AnalysisEngine {
    /// Create an engine that audits through tracing
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_audit(config, Arc::new(TracingAuditSink))
    }

    /// Create an engine with a custom audit sink
    pub fn with_audit(
        config: EngineConfig,
        audit: Arc<dyn AuditSink>,
    ) -> Result<Self, EngineError> {
        config.scoring.validate().map_err(EngineError::Config)?;
        config.credibility.validate().map_err(EngineError::Config)?;
        Ok(Self {
            extractor: ClaimExtractor::new(config.extractor)?,
            detector: ContradictionDetector::new(config.detector)?,
            scoring: config.scoring,
            credibility: config.credibility,
            sentiment: LexiconSentiment::default(),
            audit,
        })
    }

    /// Run the full pipeline over one submitted text
    ///
    /// `corpus` is a snapshot of existing claims to compare against,
    /// excluding any previous claims of this content item. `now` is a unix
    /// timestamp stamped onto the new records. Zero extracted claims is a
    /// valid outcome and yields the neutral trust verdict.
    pub fn analyze(
        &self,
        text: &str,
        content_id: ContentId,
        source_id: Option<SourceId>,
        corpus: &[ClaimSnapshot],
        now: u64,
    ) -> Result<AnalysisOutcome, EngineError> {
        self.audit.record(&AuditEvent::ContentSubmitted {
            content_id: content_id.to_string(),
            chars: text.chars().count(),
        });

        let candidates = self.extractor.extract(text)?;
        let claims: Vec<Claim> = candidates
            .into_iter()
            .map(|candidate| {
                let claim = Claim::new(
                    candidate.text,
                    candidate.confidence,
                    candidate.is_negated,
                    candidate.has_qualifier,
                    content_id,
                    now,
                );
                match source_id {
                    Some(source_id) => claim.with_source(source_id),
                    None => claim,
                }
            })
            .collect();

        self.audit.record(&AuditEvent::ClaimsExtracted {
            content_id: content_id.to_string(),
            count: claims.len(),
        });

        let mut contradictions = Vec::new();

        // New claims against the existing corpus
        let index = CorpusIndex::build(corpus);
        for claim in &claims {
            for (existing_id, finding) in
                self.detector
                    .scan(&claim.text, claim.is_negated, corpus, Some(&index))
            {
                contradictions.push(Contradiction::new(
                    claim.id,
                    existing_id,
                    finding.kind,
                    finding.importance,
                    finding.explanation,
                    now,
                ));
            }
        }

        // New claims against each other
        for i in 0..claims.len() {
            for j in (i + 1)..claims.len() {
                if let Some(finding) = self.detector.detect(
                    &claims[i].text,
                    claims[i].is_negated,
                    &claims[j].text,
                    claims[j].is_negated,
                ) {
                    contradictions.push(Contradiction::new(
                        claims[i].id,
                        claims[j].id,
                        finding.kind,
                        finding.importance,
                        finding.explanation,
                        now,
                    ));
                }
            }
        }

        for contradiction in &contradictions {
            self.audit.record(&AuditEvent::ContradictionDetected {
                claim_a: contradiction.claim_a.to_string(),
                claim_b: contradiction.claim_b.to_string(),
                kind: contradiction.kind.as_str().to_string(),
                importance: contradiction.importance,
            });
        }

        let confidences: Vec<f64> = claims.iter().map(|c| c.confidence).collect();
        let trust = assess_trust(&confidences, contradictions.len(), &self.scoring);

        self.audit.record(&AuditEvent::ScoreCalculated {
            content_id: content_id.to_string(),
            score: trust.score,
        });

        info!(
            content = %content_id,
            claims = claims.len(),
            contradictions = contradictions.len(),
            trust = trust.score,
            "analysis complete"
        );

        Ok(AnalysisOutcome {
            claims,
            contradictions,
            trust,
        })
    }

    /// Recompute a content trust verdict from current claim state
    ///
    /// Used after external verification shifts claim confidences, or after
    /// new contradictions involving this content were recorded elsewhere.
    pub fn rescore(
        &self,
        content_id: ContentId,
        confidences: &[f64],
        contradiction_count: usize,
    ) -> TrustAssessment {
        let trust = assess_trust(confidences, contradiction_count, &self.scoring);
        self.audit.record(&AuditEvent::ScoreCalculated {
            content_id: content_id.to_string(),
            score: trust.score,
        });
        trust
    }

    /// Recompute a source credibility score from its observed activity
    pub fn recompute_source(
        &self,
        source_id: SourceId,
        profile: &SourceProfile,
        now: u64,
    ) -> CredibilityBreakdown {
        let breakdown = assess_credibility(profile, now, &self.credibility, &self.sentiment);
        self.audit.record(&AuditEvent::SourceUpdated {
            source_id: source_id.to_string(),
            score: breakdown.score,
        });
        breakdown
    }
}
