//! External claim verification
//!
//! Optional cross-checking of extracted claims against an external
//! fact-verification service. A corroborated claim gains confidence, a
//! refuted one loses more than it could gain. Lookup failures are
//! recoverable: the claim keeps its extraction-time confidence and the
//! pipeline continues on internal signals alone.

use tracing::{debug, warn};
use verity_domain::{Claim, FactVerifier, Verification};

/// Confidence gained when external sources corroborate a claim
pub const CORROBORATION_BOOST: f64 = 0.15;

/// Confidence lost when external sources refute a claim
pub const REFUTATION_PENALTY: f64 = 0.25;

/// Adjust one claim's confidence from an external lookup
///
/// Returns the verification verdict on success. On lookup failure the
/// claim is left untouched and the error is passed back for the caller to
/// log; it must not abort the pipeline.
pub fn apply_verification<V: FactVerifier>(
    claim: &mut Claim,
    verifier: &V,
) -> Result<Verification, V::Error> {
    let verdict = verifier.verify(&claim.text)?;
    if verdict.refuted {
        claim.adjust_confidence(-REFUTATION_PENALTY);
    } else if verdict.corroborated {
        claim.adjust_confidence(CORROBORATION_BOOST);
    }
    debug!(
        claim = %claim.id,
        corroborated = verdict.corroborated,
        refuted = verdict.refuted,
        confidence = claim.confidence,
        "claim verified"
    );
    Ok(verdict)
}

/// Verify a batch of claims, tolerating per-claim lookup failures
///
/// Failed lookups are logged and skipped; the returned count is the number
/// of claims actually verified.
pub fn verify_claims<V>(claims: &mut [Claim], verifier: &V) -> usize
where
    V: FactVerifier,
    V::Error: std::fmt::Display,
{
    let mut verified = 0;
    for claim in claims.iter_mut() {
        match apply_verification(claim, verifier) {
            Ok(_) => verified += 1,
            Err(e) => {
                warn!(claim = %claim.id, "external lookup failed, keeping extraction confidence: {}", e);
            }
        }
    }
    verified
}
