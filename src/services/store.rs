use std::future::Future;
use thiserror::Error;

use crate::models::{JobRequest, MatchRecord, WorkerProfile};

/// Errors raised by a record store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid row: {0}")]
    InvalidRow(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Read/insert primitives the matching engine needs from the record store
///
/// Passed explicitly into the engine so tests and separate deployments can
/// each run against their own dataset.
pub trait MatchStore: Send + Sync {
    /// Workers with `available = true`, in stable store order
    fn fetch_available_workers(
        &self,
    ) -> impl Future<Output = Result<Vec<WorkerProfile>, StoreError>> + Send;

    /// Jobs with status `open`, in stable store order
    fn fetch_open_jobs(&self) -> impl Future<Output = Result<Vec<JobRequest>, StoreError>> + Send;

    fn fetch_job(
        &self,
        job_id: i64,
    ) -> impl Future<Output = Result<Option<JobRequest>, StoreError>> + Send;

    fn fetch_worker(
        &self,
        worker_id: i64,
    ) -> impl Future<Output = Result<Option<WorkerProfile>, StoreError>> + Send;

    /// Append one audit row; never updates an existing one
    fn insert_match(
        &self,
        job_id: i64,
        worker_id: i64,
        score_percent: i32,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Latest audit rows, newest first
    fn recent_matches(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<MatchRecord>, StoreError>> + Send;

    fn health_check(&self) -> impl Future<Output = Result<bool, StoreError>> + Send;
}
