use std::sync::Arc;
use thiserror::Error;

use crate::core::matcher::Matcher;
use crate::core::recorder::MatchRecorder;
use crate::models::{MatchDirection, MatchRecord, MatchResult};
use crate::services::{MatchStore, StoreError};

/// Number of candidates returned when the caller does not ask for more
pub const DEFAULT_TOP_N: usize = 10;

/// Errors surfaced to callers of the engine
///
/// Audit insert failures never surface here.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Job not found: {0}")]
    JobNotFound(i64),

    #[error("Worker not found: {0}")]
    WorkerNotFound(i64),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Entry point for both ranking directions
///
/// Each call reads fresh snapshots from the store, ranks them, appends the
/// audit rows and returns the ranked list. No state is kept between calls.
pub struct MatchEngine<S> {
    store: Arc<S>,
    matcher: Matcher,
}

impl<S> Clone for MatchEngine<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            matcher: self.matcher.clone(),
        }
    }
}

impl<S: MatchStore> MatchEngine<S> {
    pub fn new(store: Arc<S>, matcher: Matcher) -> Self {
        Self { store, matcher }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Rank available workers for a job and record the pairs
    pub async fn match_workers_to_job(
        &self,
        job_id: i64,
        top_n: usize,
    ) -> Result<Vec<MatchResult>, MatchError> {
        let job = self
            .store
            .fetch_job(job_id)
            .await?
            .ok_or(MatchError::JobNotFound(job_id))?;

        let pool = self.store.fetch_available_workers().await?;
        let results = self.matcher.rank_workers_for_job(&job, &pool, top_n);

        let outcome = MatchRecorder::new(self.store.as_ref())
            .record(MatchDirection::WorkersForJob, &results)
            .await;

        tracing::info!(
            job_id,
            candidates = pool.len(),
            returned = results.len(),
            recorded = outcome.recorded,
            failed = outcome.failed,
            "Ranked workers for job"
        );

        Ok(results)
    }

    /// Rank open jobs for a worker and record the pairs
    pub async fn match_jobs_to_worker(
        &self,
        worker_id: i64,
        top_n: usize,
    ) -> Result<Vec<MatchResult>, MatchError> {
        let worker = self
            .store
            .fetch_worker(worker_id)
            .await?
            .ok_or(MatchError::WorkerNotFound(worker_id))?;

        let pool = self.store.fetch_open_jobs().await?;
        let results = self.matcher.rank_jobs_for_worker(&worker, &pool, top_n);

        let outcome = MatchRecorder::new(self.store.as_ref())
            .record(MatchDirection::JobsForWorker, &results)
            .await;

        tracing::info!(
            worker_id,
            candidates = pool.len(),
            returned = results.len(),
            recorded = outcome.recorded,
            failed = outcome.failed,
            "Ranked jobs for worker"
        );

        Ok(results)
    }

    /// Most recent audit rows, newest first
    pub async fn recent_matches(&self, limit: usize) -> Result<Vec<MatchRecord>, MatchError> {
        Ok(self.store.recent_matches(limit).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JobRequest, JobStatus, ScoreWeights, WorkerProfile};
    use crate::services::InMemoryStore;

    fn create_engine() -> MatchEngine<InMemoryStore> {
        let jobs = vec![JobRequest {
            job_id: 1,
            title: "Planting Job".to_string(),
            skill_required: "Planting".to_string(),
            location: "Kigali, Rwanda".to_string(),
            status: JobStatus::Open,
            duration: None,
            pay_rate: None,
        }];
        let workers = vec![
            WorkerProfile {
                worker_id: 1,
                name: "Worker 1".to_string(),
                skills: "Planting, Harvesting".to_string(),
                location: "Kigali, Rwanda".to_string(),
                available: true,
            },
            WorkerProfile {
                worker_id: 3,
                name: "Worker 3".to_string(),
                skills: "Irrigation".to_string(),
                location: "Kigali, Rwanda".to_string(),
                available: false,
            },
        ];

        MatchEngine::new(Arc::new(InMemoryStore::new(jobs, workers)), Matcher::default())
    }

    #[tokio::test]
    async fn test_missing_anchor_is_explicit() {
        let engine = create_engine();

        assert!(matches!(
            engine.match_workers_to_job(42, DEFAULT_TOP_N).await,
            Err(MatchError::JobNotFound(42))
        ));
        assert!(matches!(
            engine.match_jobs_to_worker(42, DEFAULT_TOP_N).await,
            Err(MatchError::WorkerNotFound(42))
        ));
    }

    #[tokio::test]
    async fn test_match_saves_to_store() {
        let engine = create_engine();

        let results = engine.match_workers_to_job(1, DEFAULT_TOP_N).await.unwrap();
        assert_eq!(results.len(), 1);

        let history = engine.recent_matches(50).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].job_id, 1);
        assert_eq!(history[0].worker_id, 1);
        assert_eq!(history[0].match_score, 100);
    }

    #[test]
    fn test_engine_carries_matcher_weights() {
        let weights = ScoreWeights::new(0.5, 0.4, 0.1).unwrap();
        let engine = MatchEngine::new(Arc::new(InMemoryStore::default()), Matcher::new(weights));

        assert_eq!(engine.matcher().weights(), &weights);
        assert_eq!(create_engine().matcher().weights(), &ScoreWeights::default());
    }

    #[tokio::test]
    async fn test_unavailable_worker_can_still_browse_jobs() {
        let engine = create_engine();

        let results = engine.match_jobs_to_worker(3, DEFAULT_TOP_N).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].candidate_id, 1);
    }
}
