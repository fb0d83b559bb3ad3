use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::models::{JobRequest, MatchRecord, WorkerProfile};
use crate::services::store::{MatchStore, StoreError};

#[derive(Debug, Default)]
struct Tables {
    jobs: Vec<JobRequest>,
    workers: Vec<WorkerProfile>,
    matches: Vec<MatchRecord>,
}

impl Tables {
    // Names are looked up at read time, like a LEFT JOIN
    fn with_names(&self, record: &MatchRecord) -> MatchRecord {
        MatchRecord {
            job_title: self
                .jobs
                .iter()
                .find(|j| j.job_id == record.job_id)
                .map(|j| j.title.clone()),
            worker_name: self
                .workers
                .iter()
                .find(|w| w.worker_id == record.worker_id)
                .map(|w| w.name.clone()),
            ..record.clone()
        }
    }
}

/// In-process record store
///
/// Keeps rows in insertion order, which is the pool order the ranker sees.
/// Inserts can be made to fail on demand to exercise best-effort recording.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
    fail_inserts: AtomicBool,
}

impl InMemoryStore {
    pub fn new(jobs: Vec<JobRequest>, workers: Vec<WorkerProfile>) -> Self {
        Self {
            tables: RwLock::new(Tables {
                jobs,
                workers,
                matches: Vec::new(),
            }),
            fail_inserts: AtomicBool::new(false),
        }
    }

    /// Make every subsequent `insert_match` fail (or succeed again)
    pub fn set_fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    pub async fn add_job(&self, job: JobRequest) {
        self.tables.write().await.jobs.push(job);
    }

    pub async fn add_worker(&self, worker: WorkerProfile) {
        self.tables.write().await.workers.push(worker);
    }

    /// Replace a worker snapshot in place, as the profile CRUD layer would
    pub async fn update_worker(&self, worker: WorkerProfile) -> bool {
        let mut tables = self.tables.write().await;
        match tables.workers.iter_mut().find(|w| w.worker_id == worker.worker_id) {
            Some(slot) => {
                *slot = worker;
                true
            }
            None => false,
        }
    }

    /// All audit rows in insertion order
    pub async fn match_records(&self) -> Vec<MatchRecord> {
        self.tables.read().await.matches.clone()
    }
}

impl MatchStore for InMemoryStore {
    async fn fetch_available_workers(&self) -> Result<Vec<WorkerProfile>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.workers.iter().filter(|w| w.available).cloned().collect())
    }

    async fn fetch_open_jobs(&self) -> Result<Vec<JobRequest>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.jobs.iter().filter(|j| j.status.is_open()).cloned().collect())
    }

    async fn fetch_job(&self, job_id: i64) -> Result<Option<JobRequest>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.jobs.iter().find(|j| j.job_id == job_id).cloned())
    }

    async fn fetch_worker(&self, worker_id: i64) -> Result<Option<WorkerProfile>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.workers.iter().find(|w| w.worker_id == worker_id).cloned())
    }

    async fn insert_match(
        &self,
        job_id: i64,
        worker_id: i64,
        score_percent: i32,
    ) -> Result<(), StoreError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("inserts disabled".to_string()));
        }

        let mut tables = self.tables.write().await;
        let match_id = tables.matches.len() as i64 + 1;
        tables.matches.push(MatchRecord {
            match_id,
            job_id,
            worker_id,
            match_score: score_percent,
            match_date: chrono::Utc::now(),
            job_title: None,
            worker_name: None,
        });
        Ok(())
    }

    async fn recent_matches(&self, limit: usize) -> Result<Vec<MatchRecord>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .matches
            .iter()
            .rev()
            .take(limit)
            .map(|record| tables.with_names(record))
            .collect())
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
