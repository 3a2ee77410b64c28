use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{MatchResult, Profile};
use super::scoring::{format_thousands, round_one_decimal};

/// Aggregate view over one ranked result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub total_matches: usize,
    pub average_score: f64,
    pub category_distribution: BTreeMap<String, usize>,
    pub profile_summary: String,
    pub message: String,
}

impl MatchSummary {
    pub fn from_results(profile: &Profile, results: &[MatchResult]) -> Self {
        let profile_summary = describe_profile(profile);

        if results.is_empty() {
            return Self {
                total_matches: 0,
                average_score: 0.0,
                category_distribution: BTreeMap::new(),
                profile_summary,
                message: "no matching programs".to_string(),
            };
        }

        let average = results.iter().map(|result| result.score).sum::<f64>() / results.len() as f64;

        let mut category_distribution = BTreeMap::new();
        for result in results {
            *category_distribution
                .entry(result.category.clone())
                .or_insert(0) += 1;
        }

        Self {
            total_matches: results.len(),
            average_score: round_one_decimal(average),
            category_distribution,
            profile_summary,
            message: format!("found {} matching programs", results.len()),
        }
    }
}

/// One-line applicant description for prompts and logs.
pub fn describe_profile(profile: &Profile) -> String {
    let region = match profile.region.trim() {
        "" => "unknown region",
        region => region,
    };

    let mut summary = format!(
        "age {}, lives in {}, annual income {} 만원, {}",
        profile.age,
        region,
        format_thousands(profile.income),
        profile.employment.label()
    );

    if let Some(interest) = profile.interest() {
        summary.push_str(&format!(", interested in {interest}"));
    }

    summary
}
