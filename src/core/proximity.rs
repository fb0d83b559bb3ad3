use std::collections::HashSet;

use crate::core::distance::{distance_to_proximity, haversine_distance};
use crate::core::location::Location;
use crate::core::scoring::SubScore;

/// Proximity when either side carries no location at all
pub const NEUTRAL_PROXIMITY: f64 = 0.5;

const EXACT_TEXT: f64 = 1.0;
const CONTAINED_TEXT: f64 = 0.8;
const SHARED_TOKEN_CAP: f64 = 0.7;
const DISJOINT_TEXT: f64 = 0.3;

/// Outcome of comparing two location strings lexically
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextMatch {
    Missing,
    Exact,
    Contained,
    SharedTokens { common: usize, ratio: f64 },
    Disjoint,
}

impl TextMatch {
    pub fn score(&self) -> f64 {
        match self {
            TextMatch::Missing => NEUTRAL_PROXIMITY,
            TextMatch::Exact => EXACT_TEXT,
            TextMatch::Contained => CONTAINED_TEXT,
            TextMatch::SharedTokens { ratio, .. } => ratio.min(SHARED_TOKEN_CAP),
            TextMatch::Disjoint => DISJOINT_TEXT,
        }
    }

    fn label(&self) -> String {
        match self {
            TextMatch::Missing => "missing".to_string(),
            TextMatch::Exact => "exact".to_string(),
            TextMatch::Contained => "contained".to_string(),
            TextMatch::SharedTokens { common, .. } => format!("{} shared token(s)", common),
            TextMatch::Disjoint => "no overlap".to_string(),
        }
    }
}

/// Proximity score (0-1) between two resolved locations
///
/// Geodesic when both sides are coordinates, lexical when both at least
/// carry text, neutral otherwise. The reason names the branch taken.
pub fn score_proximity(a: &Location, b: &Location) -> SubScore {
    if let (Some(pa), Some(pb)) = (a.coordinate(), b.coordinate()) {
        let distance_km = haversine_distance(pa, pb);
        let score = distance_to_proximity(distance_km);
        return SubScore::new(
            score,
            format!("distance {:.1}km (proximity {:.2})", distance_km, score),
        );
    }

    match (a.raw(), b.raw()) {
        (Some(ta), Some(tb)) => {
            let outcome = compare_location_text(ta, tb);
            let score = outcome.score();
            SubScore::new(
                score,
                format!("location text {} (proximity {:.2})", outcome.label(), score),
            )
        }
        _ => SubScore::new(NEUTRAL_PROXIMITY, "no location information (proximity neutral)"),
    }
}

/// Lexical location similarity (0-1)
pub fn match_location_text(a: &str, b: &str) -> f64 {
    compare_location_text(a, b).score()
}

/// Classify how two location strings relate, case-insensitively
pub fn compare_location_text(a: &str, b: &str) -> TextMatch {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a.is_empty() || b.is_empty() {
        return TextMatch::Missing;
    }
    if a == b {
        return TextMatch::Exact;
    }
    if a.contains(&b) || b.contains(&a) {
        return TextMatch::Contained;
    }

    let tokens_a = location_tokens(&a);
    let tokens_b = location_tokens(&b);
    let common = tokens_a.intersection(&tokens_b).count();
    let largest = tokens_a.len().max(tokens_b.len());

    if common == 0 || largest == 0 {
        return TextMatch::Disjoint;
    }

    TextMatch::SharedTokens {
        common,
        ratio: common as f64 / largest as f64,
    }
}

// Whitespace tokens with surrounding punctuation removed ("kigali," -> "kigali")
fn location_tokens(text: &str) -> HashSet<&str> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty())
        .collect()
}
