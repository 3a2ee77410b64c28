use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_SCORE: f64 = 40.0;
pub const DEFAULT_MAX_RESULTS: usize = 10;
/// Share of a condition budget granted when a matcher cannot read the record.
pub const DEFAULT_FAIL_OPEN_RATIO: f64 = 0.5;

/// Tunable policy knobs for a matching deployment.
///
/// Point budgets are fixed by the scoring rubric and deliberately absent here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub min_score: f64,
    pub max_results: usize,
    pub fail_open_ratio: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            max_results: DEFAULT_MAX_RESULTS,
            fail_open_ratio: DEFAULT_FAIL_OPEN_RATIO,
        }
    }
}

impl MatchingConfig {
    /// Ratio clamped into (0, 1]; anything unusable falls back to the default.
    pub(crate) fn sanitized_fail_open_ratio(&self) -> f64 {
        if self.fail_open_ratio.is_finite() && self.fail_open_ratio > 0.0 {
            self.fail_open_ratio.min(1.0)
        } else {
            DEFAULT_FAIL_OPEN_RATIO
        }
    }
}
