//! Background worker for asynchronous content processing
//!
//! Submissions are analyzed off the request path. The worker retries
//! transient failures a bounded number of times with a growing delay and
//! marks the submission failed once retries are exhausted. Score writes
//! are serialized per content item and credibility recomputes per source,
//! so two concurrent runs over the same record cannot interleave.

use crate::engine::{AnalysisEngine, AnalysisOutcome};
use crate::error::EngineError;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::{sleep, Duration};
use verity_domain::{
    ClaimStore, Content, ContentId, ProcessingStatus, Source, SourceId,
};
use verity_scoring::{CredibilityBreakdown, SourceProfile};

/// Retry policy for background processing
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Attempts beyond the first before giving up
    pub max_retries: u32,

    /// Base delay before a retry; attempt N waits N times this
    pub retry_delay_ms: u64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_delay_ms: 60_000,
        }
    }
}

impl WorkerConfig {
    /// Delay before the given retry attempt (1-based)
    pub fn retry_delay(&self, attempt: u32) -> Duration {
        Duration::from_millis(self.retry_delay_ms * attempt as u64)
    }
}

/// Errors surfaced by background processing
#[derive(Error, Debug)]
pub enum WorkerError<E> {
    /// The submitted input was rejected; retrying cannot help
    #[error("submission rejected: {0}")]
    Rejected(EngineError),

    /// The corpus snapshot kept failing until retries ran out
    #[error("corpus snapshot failed after {attempts} attempt(s): {last}")]
    Exhausted {
        /// Total attempts made
        attempts: u32,
        /// The final failure
        last: E,
    },

    /// The store refused an operation
    #[error("store error: {0}")]
    Store(E),
}

/// Processes submissions and source recomputes in the background
pub struct ProcessingWorker {
    engine: Arc<AnalysisEngine>,
    config: WorkerConfig,
    content_locks: Mutex<HashMap<ContentId, Arc<Mutex<()>>>>,
    source_locks: Mutex<HashMap<SourceId, Arc<Mutex<()>>>>,
}

impl ProcessingWorker {
    /// Create a worker around a shared engine
    pub fn new(engine: Arc<AnalysisEngine>, config: WorkerConfig) -> Self {
        Self {
            engine,
            config,
            content_locks: Mutex::new(HashMap::new()),
            source_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Analyze one submission and persist the results
    ///
    /// At most one processing run per content item executes at a time; a
    /// second run for the same content waits for the first, so two
    /// extraction runs can never interleave their score writes. Input
    /// rejections fail immediately; transient corpus-snapshot failures
    /// are retried per the worker config. Once retries are exhausted the
    /// submission is marked [`ProcessingStatus::Failed`].
    pub async fn process<S>(
        &self,
        store: &mut S,
        content: &mut Content,
        source_id: Option<SourceId>,
        now: u64,
    ) -> Result<AnalysisOutcome, WorkerError<S::Error>>
    where
        S: ClaimStore,
        S::Error: std::fmt::Display,
    {
        let lock = {
            let mut locks = self.content_locks.lock().await;
            locks.entry(content.id).or_default().clone()
        };
        let result = {
            let _guard = lock.lock().await;
            self.process_locked(store, content, source_id, now).await
        };
        drop(lock);
        Self::evict_idle(&self.content_locks, content.id).await;
        result
    }

    async fn process_locked<S>(
        &self,
        store: &mut S,
        content: &mut Content,
        source_id: Option<SourceId>,
        now: u64,
    ) -> Result<AnalysisOutcome, WorkerError<S::Error>>
    where
        S: ClaimStore,
        S::Error: std::fmt::Display,
    {
        let outcome = match self.analyze_with_retries(store, content.id, &content.raw_text, source_id, now).await
        {
            Ok(outcome) => outcome,
            Err(e) => {
                content.status = ProcessingStatus::Failed;
                return Err(e);
            }
        };

        for claim in &outcome.claims {
            store
                .insert_claim(claim.clone())
                .map_err(WorkerError::Store)?;
        }
        for contradiction in &outcome.contradictions {
            store
                .insert_contradiction(contradiction.clone())
                .map_err(WorkerError::Store)?;
        }
        content.apply_trust(outcome.trust.score, outcome.trust.explanation.clone());

        Ok(outcome)
    }

    /// Recompute one source's credibility, serialized per source
    ///
    /// Holding the per-source lock across the compute-and-apply sequence
    /// makes concurrent recomputes for the same source take turns instead
    /// of clobbering each other.
    pub async fn recompute_source(
        &self,
        source: &mut Source,
        profile: &SourceProfile,
        now: u64,
    ) -> CredibilityBreakdown {
        let lock = {
            let mut locks = self.source_locks.lock().await;
            locks.entry(source.id).or_default().clone()
        };
        let breakdown = {
            let _guard = lock.lock().await;
            let breakdown = self.engine.recompute_source(source.id, profile, now);
            source.apply_credibility(breakdown.score, breakdown.bias, now);
            breakdown
        };
        drop(lock);
        Self::evict_idle(&self.source_locks, source.id).await;
        breakdown
    }

    /// Drop a lock-map entry once no task holds it any more
    ///
    /// Clones are only handed out under the outer map lock, so checking
    /// the strong count under that same lock cannot race a new acquirer.
    async fn evict_idle<K>(locks: &Mutex<HashMap<K, Arc<Mutex<()>>>>, key: K)
    where
        K: std::hash::Hash + Eq,
    {
        let mut map = locks.lock().await;
        if map.get(&key).is_some_and(|entry| Arc::strong_count(entry) == 1) {
            map.remove(&key);
        }
    }

    async fn analyze_with_retries<S>(
        &self,
        store: &S,
        content_id: ContentId,
        text: &str,
        source_id: Option<SourceId>,
        now: u64,
    ) -> Result<AnalysisOutcome, WorkerError<S::Error>>
    where
        S: ClaimStore,
        S::Error: std::fmt::Display,
    {
        let mut attempt = 0u32;
        let corpus = loop {
            attempt += 1;
            match store.snapshot_excluding(content_id) {
                Ok(corpus) => break corpus,
                Err(e) => {
                    if attempt > self.config.max_retries {
                        tracing::error!(content = %content_id, "giving up after {} attempts: {}", attempt, e);
                        return Err(WorkerError::Exhausted { attempts: attempt, last: e });
                    }
                    tracing::warn!(
                        content = %content_id,
                        "corpus snapshot attempt {} failed, retrying: {}",
                        attempt,
                        e
                    );
                    sleep(self.config.retry_delay(attempt)).await;
                }
            }
        };

        self.engine
            .analyze(text, content_id, source_id, &corpus, now)
            .map_err(WorkerError::Rejected)
    }
}
