//! End-to-end pipeline flows over the public engine API

use std::sync::Arc;
use verity_domain::{ClaimSnapshot, ContentId, ContradictionKind, FactVerifier, Source, Verification};
use verity_engine::{
    verify_claims, AnalysisEngine, EngineConfig, ProcessingWorker, WorkerConfig,
};
use verity_scoring::SourceProfile;

fn engine() -> AnalysisEngine {
    AnalysisEngine::new(EngineConfig::default()).unwrap()
}

#[test]
fn contradictory_submission_is_penalized() {
    let outcome = engine()
        .analyze(
            "The vaccine is 95% effective. The vaccine is not effective at all.",
            ContentId::new(),
            None,
            &[],
            0,
        )
        .unwrap();

    assert_eq!(outcome.claims.len(), 2);
    assert_eq!(outcome.claims[0].confidence, 0.70);
    assert!(!outcome.claims[0].is_negated);
    assert_eq!(outcome.claims[1].confidence, 0.50);
    assert!(outcome.claims[1].is_negated);

    assert_eq!(outcome.contradictions.len(), 1);
    assert_eq!(
        outcome.contradictions[0].kind,
        ContradictionKind::DirectNegation
    );
    assert!(outcome.contradictions[0].importance >= 0.8);

    // average 0.60 minus one contradiction penalty
    assert_eq!(outcome.trust.score, 0.5);
    assert!(outcome
        .trust
        .explanation
        .contains("1 contradiction(s) detected"));
}

#[test]
fn opposite_trends_conflict_across_submissions() {
    let engine = engine();

    let first = engine
        .analyze(
            "Stock prices increased 10% during the quarter.",
            ContentId::new(),
            None,
            &[],
            0,
        )
        .unwrap();
    assert_eq!(first.claims.len(), 1);
    assert!(first.contradictions.is_empty());

    let corpus: Vec<ClaimSnapshot> = first.claims.iter().map(ClaimSnapshot::from_claim).collect();
    let second = engine
        .analyze(
            "Stock prices decreased 10% during the quarter.",
            ContentId::new(),
            None,
            &corpus,
            0,
        )
        .unwrap();

    assert_eq!(second.contradictions.len(), 1);
    let conflict = &second.contradictions[0];
    assert_eq!(conflict.kind, ContradictionKind::Semantic);
    assert!(conflict.involves(first.claims[0].id));
    assert!(conflict.involves(second.claims[0].id));
}

#[test]
fn different_numbers_conflict_across_submissions() {
    let engine = engine();

    let first = engine
        .analyze(
            "50 people attended the rally downtown.",
            ContentId::new(),
            None,
            &[],
            0,
        )
        .unwrap();
    assert_eq!(first.claims.len(), 1);

    let corpus: Vec<ClaimSnapshot> = first.claims.iter().map(ClaimSnapshot::from_claim).collect();
    let second = engine
        .analyze(
            "75 people attended the rally downtown.",
            ContentId::new(),
            None,
            &corpus,
            0,
        )
        .unwrap();

    assert_eq!(second.contradictions.len(), 1);
    let conflict = &second.contradictions[0];
    assert_eq!(conflict.kind, ContradictionKind::Statistical);
    assert!(conflict.explanation.contains("50 vs 75") || conflict.explanation.contains("75 vs 50"));
}

#[test]
fn text_without_assertions_scores_neutral() {
    let outcome = engine()
        .analyze(
            "Greetings everyone gathered here. Farewell until another lovely evening together.",
            ContentId::new(),
            None,
            &[],
            0,
        )
        .unwrap();

    assert!(outcome.claims.is_empty());
    assert!(outcome.contradictions.is_empty());
    assert_eq!(outcome.trust.score, 0.5);
    assert_eq!(
        outcome.trust.explanation,
        "No claims extracted. Unable to assess."
    );
}

#[tokio::test]
async fn brand_new_source_scores_neutral() {
    let worker = ProcessingWorker::new(
        Arc::new(AnalysisEngine::new(EngineConfig::default()).unwrap()),
        WorkerConfig {
            max_retries: 3,
            retry_delay_ms: 1,
        },
    );
    let mut source = Source::new("Daily Bugle", 0);

    let breakdown = worker
        .recompute_source(&mut source, &SourceProfile::default(), 0)
        .await;

    assert_eq!(breakdown.score, 0.5);
    assert_eq!(source.reliability_score, 0.5);
    assert_eq!(source.bias_score, 0.5);
}

struct CorroboratingVerifier;

impl FactVerifier for CorroboratingVerifier {
    type Error = String;

    fn verify(&self, _claim_text: &str) -> Result<Verification, String> {
        Ok(Verification {
            corroborated: true,
            refuted: false,
        })
    }
}

#[test]
fn verification_shifts_rescored_trust() {
    let engine = engine();
    let content_id = ContentId::new();

    let mut outcome = engine
        .analyze(
            "The vaccine is 95% effective during trials.",
            content_id,
            None,
            &[],
            0,
        )
        .unwrap();
    let before = outcome.trust.score;

    let verified = verify_claims(&mut outcome.claims, &CorroboratingVerifier);
    assert_eq!(verified, outcome.claims.len());

    let confidences: Vec<f64> = outcome.claims.iter().map(|c| c.confidence).collect();
    let after = engine.rescore(content_id, &confidences, outcome.contradictions.len());
    assert!(after.score > before);
}
