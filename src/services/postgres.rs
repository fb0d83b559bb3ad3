use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;

use crate::models::{JobRequest, JobStatus, MatchRecord, WorkerProfile};
use crate::services::store::{MatchStore, StoreError};

/// PostgreSQL-backed record store
///
/// Reads job and worker snapshots written by the profile/job management
/// layer and appends rows to the `matches` audit table.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self::from_pool(pool))
    }

    /// Create a new store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }

    /// Wrap an existing pool (migrations are the caller's concern)
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn job_from_row(row: &PgRow) -> Result<JobRequest, StoreError> {
    let status: String = row.try_get("status")?;
    let status = status
        .parse::<JobStatus>()
        .map_err(|e| StoreError::InvalidRow(e.to_string()))?;

    Ok(JobRequest {
        job_id: row.try_get("job_id")?,
        title: row.try_get("title")?,
        skill_required: row.try_get("skill_required")?,
        location: row.try_get("location")?,
        status,
        duration: row.try_get("duration")?,
        pay_rate: row.try_get("pay_rate")?,
    })
}

fn worker_from_row(row: &PgRow) -> Result<WorkerProfile, StoreError> {
    Ok(WorkerProfile {
        worker_id: row.try_get("worker_id")?,
        name: row.try_get("name")?,
        skills: row.try_get("skills")?,
        location: row.try_get("location")?,
        available: row.try_get("available")?,
    })
}

const JOB_COLUMNS: &str =
    "job_id, title, skill_required, location, status, duration, pay_rate";
const WORKER_COLUMNS: &str = "worker_id, name, skills, location, available";

impl MatchStore for PostgresStore {
    async fn fetch_available_workers(&self) -> Result<Vec<WorkerProfile>, StoreError> {
        let query = format!(
            "SELECT {} FROM workers WHERE available = TRUE ORDER BY worker_id",
            WORKER_COLUMNS
        );

        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        let workers = rows.iter().map(worker_from_row).collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Fetched {} available workers", workers.len());
        Ok(workers)
    }

    async fn fetch_open_jobs(&self) -> Result<Vec<JobRequest>, StoreError> {
        let query = format!(
            "SELECT {} FROM jobs WHERE status = 'open' ORDER BY job_id",
            JOB_COLUMNS
        );

        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        let jobs = rows.iter().map(job_from_row).collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Fetched {} open jobs", jobs.len());
        Ok(jobs)
    }

    async fn fetch_job(&self, job_id: i64) -> Result<Option<JobRequest>, StoreError> {
        let query = format!("SELECT {} FROM jobs WHERE job_id = $1", JOB_COLUMNS);

        let row = sqlx::query(&query)
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(job_from_row).transpose()
    }

    async fn fetch_worker(&self, worker_id: i64) -> Result<Option<WorkerProfile>, StoreError> {
        let query = format!("SELECT {} FROM workers WHERE worker_id = $1", WORKER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(worker_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(worker_from_row).transpose()
    }

    /// Plain INSERT: re-running a ranking appends new history rows
    async fn insert_match(
        &self,
        job_id: i64,
        worker_id: i64,
        score_percent: i32,
    ) -> Result<(), StoreError> {
        let query = r#"
            INSERT INTO matches (job_id, worker_id, match_score, match_date)
            VALUES ($1, $2, $3, NOW())
        "#;

        sqlx::query(query)
            .bind(job_id)
            .bind(worker_id)
            .bind(score_percent)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn recent_matches(&self, limit: usize) -> Result<Vec<MatchRecord>, StoreError> {
        let query = r#"
            SELECT m.match_id, m.job_id, m.worker_id, m.match_score, m.match_date,
                   j.title AS job_title, w.name AS worker_name
            FROM matches m
            LEFT JOIN jobs j ON j.job_id = m.job_id
            LEFT JOIN workers w ON w.worker_id = m.worker_id
            ORDER BY m.match_date DESC, m.match_id DESC
            LIMIT $1
        "#;

        let rows = sqlx::query(query)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| -> Result<MatchRecord, StoreError> {
                Ok(MatchRecord {
                    match_id: row.try_get("match_id")?,
                    job_id: row.try_get("job_id")?,
                    worker_id: row.try_get("worker_id")?,
                    match_score: row.try_get("match_score")?,
                    match_date: row.try_get("match_date")?,
                    job_title: row.try_get("job_title")?,
                    worker_name: row.try_get("worker_name")?,
                })
            })
            .collect()
    }

    /// Health check for the database connection
    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
