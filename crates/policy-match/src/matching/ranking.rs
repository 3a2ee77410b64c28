use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{MatchResult, Profile, ProgramRecord};
use super::scoring::{MatchingConfig, MatchingEngine, DEFAULT_MAX_RESULTS, DEFAULT_MIN_SCORE};

/// Cut-offs applied after every program has been scored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankOptions {
    /// Programs scoring strictly below this are dropped.
    pub min_score: f64,
    pub max_results: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl From<&MatchingConfig> for RankOptions {
    fn from(config: &MatchingConfig) -> Self {
        Self {
            min_score: config.min_score,
            max_results: config.max_results,
        }
    }
}

impl MatchingEngine {
    /// Score the whole catalog against one reference date, then filter, sort and truncate.
    pub fn rank(
        &self,
        profile: &Profile,
        programs: &[ProgramRecord],
        options: &RankOptions,
        today: NaiveDate,
    ) -> Vec<MatchResult> {
        let results: Vec<MatchResult> = programs
            .iter()
            .filter_map(|program| {
                let outcome = self.evaluate(profile, program, today);
                if outcome.is_excluded() {
                    return None;
                }
                let (score, reasons) = outcome.into_parts();
                (score >= options.min_score)
                    .then(|| MatchResult::from_program(program, score, reasons))
            })
            .collect();

        let ranked = select(results, options.max_results);

        info!(
            catalog_size = programs.len(),
            kept = ranked.len(),
            %today,
            "ranking pass complete"
        );

        ranked
    }
}

/// Sort by descending score and keep the first `max_results` entries.
pub fn select(mut results: Vec<MatchResult>, max_results: usize) -> Vec<MatchResult> {
    results.sort_by(compare_results);
    results.truncate(max_results);
    results
}

/// Higher score first; ties go to the earlier deadline string, undated last.
pub fn compare_results(left: &MatchResult, right: &MatchResult) -> Ordering {
    right
        .score
        .total_cmp(&left.score)
        .then_with(|| match (&left.deadline, &right.deadline) {
            (Some(left), Some(right)) => left.cmp(right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}
