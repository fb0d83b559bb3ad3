use crate::models::{MatchDirection, MatchResult};
use crate::services::MatchStore;

/// Summary of one best-effort recording pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordOutcome {
    pub recorded: usize,
    pub failed: usize,
}

/// Appends ranked pairs to the audit trail
///
/// Recording is secondary to the ranking itself: a failed insert is logged
/// and counted, never returned.
pub struct MatchRecorder<'a, S> {
    store: &'a S,
}

impl<'a, S: MatchStore> MatchRecorder<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn record(&self, direction: MatchDirection, results: &[MatchResult]) -> RecordOutcome {
        let mut outcome = RecordOutcome::default();

        for result in results {
            let (job_id, worker_id) = direction.job_and_worker(result.anchor_id, result.candidate_id);
            let score_percent = result.score_percent();

            match self.store.insert_match(job_id, worker_id, score_percent).await {
                Ok(()) => {
                    outcome.recorded += 1;
                    tracing::debug!(job_id, worker_id, score_percent, "Recorded match");
                }
                Err(e) => {
                    outcome.failed += 1;
                    tracing::warn!(
                        job_id,
                        worker_id,
                        score_percent,
                        error = %e,
                        "Failed to record match, continuing"
                    );
                }
            }
        }

        outcome
    }
}
