// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    score_to_percent, JobRequest, JobStatus, MatchDirection, MatchRecord, MatchResult,
    ScoreWeights, UnknownJobStatus, WeightsError, WorkerProfile,
};
pub use requests::{HistoryQuery, MatchQuery};
pub use responses::{ErrorResponse, HealthResponse, MatchHistoryResponse, MatchListResponse};
