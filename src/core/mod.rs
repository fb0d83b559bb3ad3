// Core algorithm exports
pub mod distance;
pub mod engine;
pub mod location;
pub mod matcher;
pub mod proximity;
pub mod recorder;
pub mod scoring;
pub mod skills;

pub use distance::{distance_to_proximity, haversine_distance};
pub use engine::{MatchEngine, MatchError, DEFAULT_TOP_N};
pub use location::{parse_coordinate, resolve_location, Coordinate, Location};
pub use matcher::Matcher;
pub use proximity::{compare_location_text, match_location_text, score_proximity, TextMatch};
pub use recorder::{MatchRecorder, RecordOutcome};
pub use scoring::{compose, score_pair, JobFeatures, ScoreBreakdown, SubScore, WorkerFeatures};
pub use skills::{normalize_skills, score_skills};
