// Integration tests for Skill Match

use skill_match::core::{MatchEngine, MatchError, Matcher, DEFAULT_TOP_N};
use skill_match::models::{JobRequest, JobStatus, WorkerProfile};
use skill_match::services::{InMemoryStore, MatchStore};
use std::sync::Arc;

fn create_test_job(id: i64, skills: &str, location: &str) -> JobRequest {
    JobRequest {
        job_id: id,
        title: format!("Job {}", id),
        skill_required: skills.to_string(),
        location: location.to_string(),
        status: JobStatus::Open,
        duration: None,
        pay_rate: None,
    }
}

fn create_test_worker(id: i64, skills: &str, location: &str, available: bool) -> WorkerProfile {
    WorkerProfile {
        worker_id: id,
        name: format!("Worker {}", id),
        skills: skills.to_string(),
        location: location.to_string(),
        available,
    }
}

fn create_engine(jobs: Vec<JobRequest>, workers: Vec<WorkerProfile>) -> MatchEngine<InMemoryStore> {
    MatchEngine::new(Arc::new(InMemoryStore::new(jobs, workers)), Matcher::with_default_weights())
}

#[tokio::test]
async fn test_integration_end_to_end_matching() {
    let engine = create_engine(
        vec![create_test_job(1, "React,JavaScript", "-1.9441,30.0619")],
        vec![
            create_test_worker(2, "Excel", "Somewhere Else", true),
            create_test_worker(1, "React,JavaScript", "-1.95,30.06", true),
        ],
    );

    let result = engine.match_workers_to_job(1, DEFAULT_TOP_N).await.unwrap();

    assert_eq!(result.len(), 2);

    // Worker A: full skills, ~0.7 km away, available
    let a = &result[0];
    assert_eq!(a.candidate_id, 1);
    assert!((a.score - 1.0).abs() < 1e-9, "expected 1.0, got {}", a.score);

    // Worker B: no skills, text fallback between a coordinate and a place name
    let b = &result[1];
    assert_eq!(b.candidate_id, 2);
    assert!(b.score >= 0.60 * 0.0 + 0.30 * 0.3 + 0.10 - 1e-9);
    assert!(b.score <= 0.60 * 0.0 + 0.30 * 0.5 + 0.10 + 1e-9);
    assert!(a.score > b.score);
}

#[tokio::test]
async fn test_unavailable_worker_never_ranked() {
    let engine = create_engine(
        vec![create_test_job(1, "Planting", "Kigali, Rwanda")],
        vec![
            create_test_worker(1, "Planting, Harvesting", "Kigali, Rwanda", true),
            create_test_worker(2, "Planting", "Other Location", true),
            create_test_worker(3, "Planting", "Kigali, Rwanda", false), // perfect fit, not available
        ],
    );

    let result = engine.match_workers_to_job(1, DEFAULT_TOP_N).await.unwrap();
    assert!(result.iter().all(|m| m.candidate_id != 3));

    // Availability flipped by the profile layer after the fact
    engine
        .store()
        .update_worker(create_test_worker(1, "Planting", "Kigali, Rwanda", false))
        .await;
    let result = engine.match_workers_to_job(1, DEFAULT_TOP_N).await.unwrap();
    let ids: Vec<i64> = result.iter().map(|m| m.candidate_id).collect();
    assert_eq!(ids, vec![2]);
}

#[tokio::test]
async fn test_ties_follow_pool_order() {
    // 0.9 / 0.9 / 0.3 pattern: same skills at same place, then a weak fit
    let engine = create_engine(
        vec![create_test_job(1, "planting", "Musanze")],
        vec![
            create_test_worker(5, "planting", "Huye", true),
            create_test_worker(3, "planting", "Huye", true),
            create_test_worker(9, "excel", "Huye", true),
        ],
    );

    let result = engine.match_workers_to_job(1, DEFAULT_TOP_N).await.unwrap();
    let ids: Vec<i64> = result.iter().map(|m| m.candidate_id).collect();

    assert_eq!(ids, vec![5, 3, 9]);
    assert_eq!(result[0].score, result[1].score);
    assert!(result[2].score < result[1].score);
}

#[tokio::test]
async fn test_ranking_is_idempotent_and_history_accumulates() {
    let engine = create_engine(
        vec![create_test_job(1, "planting,harvesting", "-1.95,30.06")],
        vec![
            create_test_worker(1, "planting", "-1.96,30.07", true),
            create_test_worker(2, "planting,harvesting", "-2.40,30.50", true),
            create_test_worker(3, "harvesting", "Kigali", true),
        ],
    );

    let first = engine.match_workers_to_job(1, DEFAULT_TOP_N).await.unwrap();
    let second = engine.match_workers_to_job(1, DEFAULT_TOP_N).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(engine.store().match_records().await.len(), first.len() * 2);
}

#[tokio::test]
async fn test_persistence_failure_does_not_lose_ranking() {
    let engine = create_engine(
        vec![create_test_job(1, "planting", "Kigali")],
        vec![
            create_test_worker(1, "planting", "Kigali", true),
            create_test_worker(2, "weeding", "Kigali", true),
        ],
    );
    engine.store().set_fail_inserts(true);

    let result = engine.match_workers_to_job(1, DEFAULT_TOP_N).await.unwrap();

    assert_eq!(result.len(), 2);
    assert!(engine.store().recent_matches(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_jobs_for_worker_direction() {
    let mut closed = create_test_job(3, "planting", "Kigali");
    closed.status = JobStatus::Closed;

    // Records arrive one at a time, as the job board would write them
    let engine = create_engine(vec![], vec![]);
    engine.store().add_job(create_test_job(1, "harvesting", "Kigali")).await;
    engine.store().add_job(create_test_job(2, "planting", "Kigali")).await;
    engine.store().add_job(closed).await;
    engine
        .store()
        .add_worker(create_test_worker(7, "Planting", "Kigali", true))
        .await;

    let result = engine.match_jobs_to_worker(7, DEFAULT_TOP_N).await.unwrap();
    let ids: Vec<i64> = result.iter().map(|m| m.candidate_id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert!(result.iter().all(|m| m.anchor_id == 7));

    // History rows are always (job, worker)
    let history = engine.recent_matches(10).await.unwrap();
    assert!(history.iter().all(|r| r.worker_id == 7));
    assert_eq!(history.len(), 2);
}

#[tokio::test]
async fn test_not_found_signals() {
    let engine = create_engine(vec![], vec![]);

    assert!(matches!(
        engine.match_workers_to_job(1, DEFAULT_TOP_N).await,
        Err(MatchError::JobNotFound(1))
    ));
    assert!(matches!(
        engine.match_jobs_to_worker(1, DEFAULT_TOP_N).await,
        Err(MatchError::WorkerNotFound(1))
    ));
}

#[test]
fn test_empty_pool_returns_empty_list() {
    let engine = create_engine(vec![create_test_job(1, "planting", "Kigali")], vec![]);

    let result = tokio_test::block_on(engine.match_workers_to_job(1, DEFAULT_TOP_N)).unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn test_max_limit_enforcement() {
    let workers: Vec<WorkerProfile> = (0..50)
        .map(|i| create_test_worker(i, "planting", &format!("-1.95,{}", 30.0 + i as f64 * 0.01), true))
        .collect();
    let engine = create_engine(vec![create_test_job(1, "planting", "-1.95,30.0")], workers);

    let result = engine.match_workers_to_job(1, 10).await.unwrap();

    assert_eq!(result.len(), 10);
    for (index, m) in result.iter().enumerate() {
        assert_eq!(m.rank, index + 1);
        assert!(m.score >= 0.0 && m.score <= 1.0);
    }
    for pair in result.windows(2) {
        assert!(pair[0].score >= pair[1].score, "Matches not sorted by score");
    }
}
