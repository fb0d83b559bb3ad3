use std::collections::HashSet;

use crate::core::scoring::SubScore;

/// Neutral skill score when the anchor lists no requirements
pub const NEUTRAL_SKILL_SCORE: f64 = 0.5;

/// Split a comma-delimited skill field into lowercase, trimmed tokens
///
/// Empty segments are dropped; order is kept for display only.
pub fn normalize_skills(text: &str) -> Vec<String> {
    text.split(',')
        .map(|skill| skill.trim().to_lowercase())
        .filter(|skill| !skill.is_empty())
        .collect()
}

/// Fraction of the required skills the candidate covers
///
/// Set semantics on both sides: extra candidate skills do not inflate the
/// ratio and a duplicated requirement counts once.
pub fn score_skills(required: &[String], candidate: &[String]) -> SubScore {
    let mut seen = HashSet::new();
    let required: Vec<&str> = required
        .iter()
        .map(String::as_str)
        .filter(|skill| seen.insert(*skill))
        .collect();

    if required.is_empty() {
        return SubScore::new(NEUTRAL_SKILL_SCORE, "no required skills (neutral)");
    }

    let candidate: HashSet<&str> = candidate.iter().map(String::as_str).collect();
    let matched: Vec<&str> = required
        .iter()
        .copied()
        .filter(|skill| candidate.contains(skill))
        .collect();

    let ratio = matched.len() as f64 / required.len() as f64;
    let reason = if matched.is_empty() {
        format!("skills matched 0/{}", required.len())
    } else {
        format!(
            "skills matched {}/{} ({})",
            matched.len(),
            required.len(),
            matched.join(", ")
        )
    };

    SubScore::new(ratio, reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_skills() {
        assert_eq!(
            normalize_skills(" Planting, HARVESTING ,,  , irrigation"),
            skills(&["planting", "harvesting", "irrigation"])
        );
        assert!(normalize_skills("").is_empty());
        assert!(normalize_skills(" , ,").is_empty());
    }

    #[test]
    fn test_partial_overlap() {
        let score = score_skills(&skills(&["planting", "harvesting"]), &skills(&["planting"]));
        assert_eq!(score.value, 0.5);
        assert_eq!(score.reason, "skills matched 1/2 (planting)");
    }

    #[test]
    fn test_extra_candidate_skills_do_not_inflate() {
        let score = score_skills(
            &skills(&["planting"]),
            &skills(&["planting", "harvesting", "irrigation"]),
        );
        assert_eq!(score.value, 1.0);
    }

    #[test]
    fn test_duplicate_requirements_count_once() {
        let score = score_skills(
            &skills(&["planting", "planting", "harvesting"]),
            &skills(&["planting"]),
        );
        assert_eq!(score.value, 0.5);
    }

    #[test]
    fn test_no_requirements_is_neutral() {
        let score = score_skills(&[], &skills(&["excel"]));
        assert_eq!(score.value, NEUTRAL_SKILL_SCORE);
        assert!(score.reason.contains("no required skills"));
    }

    #[test]
    fn test_no_overlap() {
        let score = score_skills(&skills(&["react", "javascript"]), &skills(&["excel"]));
        assert_eq!(score.value, 0.0);
        assert_eq!(score.reason, "skills matched 0/2");
    }
}
