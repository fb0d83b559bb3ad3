use crate::core::location::{resolve_location, Location};
use crate::core::proximity::score_proximity;
use crate::core::skills::{normalize_skills, score_skills};
use crate::models::{JobRequest, MatchDirection, ScoreWeights, WorkerProfile};

/// A sub-score with the human-readable reason it was derived from
#[derive(Debug, Clone, PartialEq)]
pub struct SubScore {
    pub value: f64,
    pub reason: String,
}

impl SubScore {
    pub fn new(value: f64, reason: impl Into<String>) -> Self {
        Self { value, reason: reason.into() }
    }
}

/// Scoring inputs of a job, normalized once per ranking call
#[derive(Debug, Clone)]
pub struct JobFeatures {
    pub job_id: i64,
    pub required_skills: Vec<String>,
    pub location: Location,
}

impl JobFeatures {
    pub fn from_job(job: &JobRequest) -> Self {
        Self {
            job_id: job.job_id,
            required_skills: normalize_skills(&job.skill_required),
            location: resolve_location(&job.location),
        }
    }
}

/// Scoring inputs of a worker, normalized once per ranking call
#[derive(Debug, Clone)]
pub struct WorkerFeatures {
    pub worker_id: i64,
    pub skills: Vec<String>,
    pub location: Location,
    pub available: bool,
}

impl WorkerFeatures {
    pub fn from_worker(worker: &WorkerProfile) -> Self {
        Self {
            worker_id: worker.worker_id,
            skills: normalize_skills(&worker.skills),
            location: resolve_location(&worker.location),
            available: worker.available,
        }
    }
}

/// Every sub-score of one (job, worker) pair plus the composed result
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub skill: SubScore,
    pub proximity: SubScore,
    pub availability: SubScore,
    pub final_score: f64,
    pub reasons: Vec<String>,
}

/// Calculate the match score (0-1) of a worker for a job
///
/// Scoring formula:
/// score = (
///     skill_score * 0.60 +         # share of required skills covered
///     proximity_score * 0.30 +     # geodesic or textual closeness
///     availability_bonus * 0.10    # worker can take the job
/// )
///
/// The job's required skills are always the target set, whichever side
/// the ranking is anchored on.
pub fn score_pair(
    job: &JobFeatures,
    worker: &WorkerFeatures,
    direction: MatchDirection,
    weights: &ScoreWeights,
) -> ScoreBreakdown {
    let skill = score_skills(&job.required_skills, &worker.skills);
    let proximity = score_proximity(&job.location, &worker.location);
    let availability = availability_bonus(direction, worker.available);

    let final_score = compose(skill.value, proximity.value, availability.value, weights);

    let reasons = vec![
        skill.reason.clone(),
        proximity.reason.clone(),
        availability.reason.clone(),
        format!("final_score {:.3}", final_score),
    ];

    ScoreBreakdown {
        skill,
        proximity,
        availability,
        final_score,
        reasons,
    }
}

/// Weighted sum of the three sub-scores, always within [0, 1]
///
/// NaN sub-scores contribute nothing; the sum is clamped afterwards so a
/// misbehaving sub-scorer cannot push the result out of range.
pub fn compose(skill: f64, proximity: f64, availability: f64, weights: &ScoreWeights) -> f64 {
    let total = finite_or_zero(skill) * weights.skill()
        + finite_or_zero(proximity) * weights.proximity()
        + finite_or_zero(availability) * weights.availability();

    if total.is_nan() {
        return 0.0;
    }
    total.clamp(0.0, 1.0)
}

#[inline]
fn finite_or_zero(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}

/// Availability bonus (0 or 1)
///
/// Jobs-for-worker rankings always earn it; the worker pool on the other
/// side is pre-filtered, so the zero branch only guards bad input.
#[inline]
pub fn availability_bonus(direction: MatchDirection, available: bool) -> SubScore {
    match direction {
        MatchDirection::JobsForWorker => SubScore::new(1.0, "worker seeking jobs (availability bonus)"),
        MatchDirection::WorkersForJob if available => SubScore::new(1.0, "worker available"),
        MatchDirection::WorkersForJob => SubScore::new(0.0, "worker unavailable"),
    }
}
