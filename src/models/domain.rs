use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle state of a job posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Open,
    Filled,
    Closed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Open => "open",
            JobStatus::Filled => "filled",
            JobStatus::Closed => "closed",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, JobStatus::Open)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown job status: {0}")]
pub struct UnknownJobStatus(pub String);

impl FromStr for JobStatus {
    type Err = UnknownJobStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(JobStatus::Open),
            "filled" => Ok(JobStatus::Filled),
            "closed" => Ok(JobStatus::Closed),
            other => Err(UnknownJobStatus(other.to_string())),
        }
    }
}

/// A job posted by an employer
///
/// `skill_required` and `location` are free text exactly as entered;
/// normalization happens at scoring time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequest {
    #[serde(rename = "jobId")]
    pub job_id: i64,
    pub title: String,
    #[serde(rename = "skillRequired")]
    pub skill_required: String,
    pub location: String,
    pub status: JobStatus,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(rename = "payRate", default)]
    pub pay_rate: Option<String>,
}

/// A job seeker's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerProfile {
    #[serde(rename = "workerId")]
    pub worker_id: i64,
    pub name: String,
    pub skills: String,
    pub location: String,
    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool { true }

/// Which side of the board a ranking is produced for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchDirection {
    /// Anchor is a job, candidates are workers
    WorkersForJob,
    /// Anchor is a worker, candidates are jobs
    JobsForWorker,
}

impl MatchDirection {
    /// Map an (anchor, candidate) pair onto (job id, worker id)
    pub fn job_and_worker(&self, anchor_id: i64, candidate_id: i64) -> (i64, i64) {
        match self {
            MatchDirection::WorkersForJob => (anchor_id, candidate_id),
            MatchDirection::JobsForWorker => (candidate_id, anchor_id),
        }
    }
}

/// One ranked candidate for an anchor entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "anchorId")]
    pub anchor_id: i64,
    #[serde(rename = "candidateId")]
    pub candidate_id: i64,
    pub score: f64,
    pub reasons: Vec<String>,
    /// 1-based position within the returned list
    pub rank: usize,
}

impl MatchResult {
    /// Score as an integer percentage, the unit the audit table stores
    pub fn score_percent(&self) -> i32 {
        score_to_percent(self.score)
    }
}

pub fn score_to_percent(score: f64) -> i32 {
    if score.is_nan() {
        return 0;
    }
    (score.clamp(0.0, 1.0) * 100.0).round() as i32
}

/// Audit row persisted for every produced pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "matchId")]
    pub match_id: i64,
    #[serde(rename = "jobId")]
    pub job_id: i64,
    #[serde(rename = "workerId")]
    pub worker_id: i64,
    #[serde(rename = "matchScore")]
    pub match_score: i32,
    #[serde(rename = "matchDate")]
    pub match_date: chrono::DateTime<chrono::Utc>,
    /// Current title of the job, `None` once the job row is gone
    #[serde(rename = "jobTitle", default)]
    pub job_title: Option<String>,
    #[serde(rename = "workerName", default)]
    pub worker_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightsError {
    #[error("weight `{0}` must be a finite, non-negative number")]
    InvalidWeight(&'static str),

    #[error("weights must sum to 1.0, got {0}")]
    BadSum(f64),
}

/// Scoring weights
///
/// Only constructible through [`ScoreWeights::new`], which rejects any
/// combination that does not sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    skill: f64,
    proximity: f64,
    availability: f64,
}

impl ScoreWeights {
    pub const SKILL: f64 = 0.60;
    pub const PROXIMITY: f64 = 0.30;
    pub const AVAILABILITY: f64 = 0.10;

    const SUM_TOLERANCE: f64 = 1e-9;

    pub fn new(skill: f64, proximity: f64, availability: f64) -> Result<Self, WeightsError> {
        for (name, value) in [
            ("skill", skill),
            ("proximity", proximity),
            ("availability", availability),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(WeightsError::InvalidWeight(name));
            }
        }

        let sum = skill + proximity + availability;
        if (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(WeightsError::BadSum(sum));
        }

        Ok(Self { skill, proximity, availability })
    }

    pub fn skill(&self) -> f64 { self.skill }
    pub fn proximity(&self) -> f64 { self.proximity }
    pub fn availability(&self) -> f64 { self.availability }

    pub fn sum(&self) -> f64 {
        self.skill + self.proximity + self.availability
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            skill: Self::SKILL,
            proximity: Self::PROXIMITY,
            availability: Self::AVAILABILITY,
        }
    }
}
