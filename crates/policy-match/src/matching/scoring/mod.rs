mod config;
mod policy;
mod rules;

pub use config::{
    MatchingConfig, DEFAULT_FAIL_OPEN_RATIO, DEFAULT_MAX_RESULTS, DEFAULT_MIN_SCORE,
};
pub use policy::ExclusionReason;
pub use rules::{benefit_score, ease_score, BENEFIT_WEIGHT, EASE_WEIGHT};

pub(crate) use rules::{format_thousands, round_one_decimal};

use super::domain::{Profile, ProgramRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless scorer for a single (profile, program) pair.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: MatchingConfig,
}

impl MatchingEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Hard gates first; only admitted programs accumulate points.
    pub fn evaluate(
        &self,
        profile: &Profile,
        program: &ProgramRecord,
        today: NaiveDate,
    ) -> ScoreOutcome {
        match policy::admit(
            profile,
            program,
            today,
            self.config.sanitized_fail_open_ratio(),
        ) {
            Err(reason) => {
                debug!(
                    program_id = %program.id.0,
                    reason = reason.summary(),
                    "program excluded"
                );
                ScoreOutcome::Excluded { reason }
            }
            Ok(admission) => {
                debug!(
                    program_id = %program.id.0,
                    deadline = %admission.deadline.status,
                    "program admitted"
                );
                ScoreOutcome::Scored(rules::score_admitted(profile, program, &admission))
            }
        }
    }

    /// Total score and ordered reasons; exclusion yields `(0.0, [reason])`.
    pub fn score_one(
        &self,
        profile: &Profile,
        program: &ProgramRecord,
        today: NaiveDate,
    ) -> (f64, Vec<String>) {
        self.evaluate(profile, program, today).into_parts()
    }
}

/// Sub-totals behind an admitted program's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub condition_score: f64,
    pub benefit_score: f64,
    pub ease_score: f64,
    pub total: f64,
    pub reasons: Vec<String>,
}

/// Terminal state of one scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ScoreOutcome {
    Excluded { reason: ExclusionReason },
    Scored(ScoreCard),
}

impl ScoreOutcome {
    pub fn total(&self) -> f64 {
        match self {
            ScoreOutcome::Excluded { .. } => 0.0,
            ScoreOutcome::Scored(card) => card.total,
        }
    }

    pub fn is_excluded(&self) -> bool {
        matches!(self, ScoreOutcome::Excluded { .. })
    }

    pub fn into_parts(self) -> (f64, Vec<String>) {
        match self {
            ScoreOutcome::Excluded { reason } => (0.0, vec![reason.summary().to_string()]),
            ScoreOutcome::Scored(card) => (card.total, card.reasons),
        }
    }
}
