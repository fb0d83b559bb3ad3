use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string for the ranking endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MatchQuery {
    #[validate(range(min = 1, max = 100))]
    #[serde(alias = "top_n", rename = "topN", default)]
    pub top_n: Option<u16>,
}

/// Query string for the match history endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct HistoryQuery {
    #[validate(range(min = 1, max = 500))]
    #[serde(default)]
    pub limit: Option<u32>,
}
