//! Skill Match - ranking engine for the agricultural job board
//!
//! Scores job seekers against job postings (and the reverse) on skill
//! overlap, location proximity and availability, ranks the candidates and
//! appends every produced pair to a match history table.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{
    match_location_text, resolve_location, Location, MatchEngine, MatchError, Matcher,
    DEFAULT_TOP_N,
};
pub use models::{JobRequest, JobStatus, MatchDirection, MatchRecord, MatchResult, ScoreWeights, WorkerProfile};
pub use services::{InMemoryStore, MatchStore, PostgresStore, StoreError};
