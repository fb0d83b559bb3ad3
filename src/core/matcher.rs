use crate::core::scoring::{score_pair, JobFeatures, ScoreBreakdown, WorkerFeatures};
use crate::models::{JobRequest, MatchDirection, MatchResult, ScoreWeights, WorkerProfile};

/// Ranks a candidate pool against one anchor entity
///
/// # Pipeline Stages
/// 1. Normalize the anchor once
/// 2. Eligibility filter (available workers / open jobs)
/// 3. Score every remaining candidate, no pruning
/// 4. Stable sort by score, truncate to top-N, assign ranks
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoreWeights,
}

impl Matcher {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoreWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Rank workers for a job
    ///
    /// Unavailable workers are dropped even if the pool was not pre-filtered.
    pub fn rank_workers_for_job(
        &self,
        job: &JobRequest,
        pool: &[WorkerProfile],
        top_n: usize,
    ) -> Vec<MatchResult> {
        let job_features = JobFeatures::from_job(job);

        let scored = pool
            .iter()
            .filter(|worker| worker.available)
            .map(|worker| {
                let worker_features = WorkerFeatures::from_worker(worker);
                let breakdown = score_pair(
                    &job_features,
                    &worker_features,
                    MatchDirection::WorkersForJob,
                    &self.weights,
                );
                (worker.worker_id, breakdown)
            })
            .collect();

        rank_scored(job.job_id, scored, top_n)
    }

    /// Rank open jobs for a worker
    pub fn rank_jobs_for_worker(
        &self,
        worker: &WorkerProfile,
        pool: &[JobRequest],
        top_n: usize,
    ) -> Vec<MatchResult> {
        let worker_features = WorkerFeatures::from_worker(worker);

        let scored = pool
            .iter()
            .filter(|job| job.status.is_open())
            .map(|job| {
                let job_features = JobFeatures::from_job(job);
                let breakdown = score_pair(
                    &job_features,
                    &worker_features,
                    MatchDirection::JobsForWorker,
                    &self.weights,
                );
                (job.job_id, breakdown)
            })
            .collect();

        rank_scored(worker.worker_id, scored, top_n)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Sort by score (descending), keep pool order among ties, truncate
fn rank_scored(
    anchor_id: i64,
    mut scored: Vec<(i64, ScoreBreakdown)>,
    top_n: usize,
) -> Vec<MatchResult> {
    // sort_by is stable, which is the tie-break
    scored.sort_by(|(_, a), (_, b)| b.final_score.total_cmp(&a.final_score));
    scored.truncate(top_n);

    scored
        .into_iter()
        .enumerate()
        .map(|(index, (candidate_id, breakdown))| MatchResult {
            anchor_id,
            candidate_id,
            score: breakdown.final_score,
            reasons: breakdown.reasons,
            rank: index + 1,
        })
        .collect()
}
