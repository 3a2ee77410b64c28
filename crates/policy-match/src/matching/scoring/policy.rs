use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::super::conditions::{match_age, match_region, ConditionCheck, MatcherFault};
use super::super::domain::{Profile, ProgramRecord};
use super::super::extraction::{analyze_deadline, DeadlineAssessment};

/// Terminal outcomes that zero a program's score and stop evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    DeadlinePassed,
    AgeMismatch,
    RegionMismatch,
}

impl ExclusionReason {
    pub const fn summary(self) -> &'static str {
        match self {
            ExclusionReason::DeadlinePassed => "deadline passed",
            ExclusionReason::AgeMismatch => "age condition not met",
            ExclusionReason::RegionMismatch => "region condition not met",
        }
    }
}

/// Hard-gate results carried into the accumulation stage.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Admission {
    pub deadline: DeadlineAssessment,
    pub age: ConditionCheck,
    pub region: ConditionCheck,
}

/// Run the deadline, age and region gates in that order.
pub(crate) fn admit(
    profile: &Profile,
    program: &ProgramRecord,
    today: NaiveDate,
    fail_open_ratio: f64,
) -> Result<Admission, ExclusionReason> {
    let deadline = analyze_deadline(&program.deadline_text, today);
    if deadline.expired {
        return Err(ExclusionReason::DeadlinePassed);
    }

    let age = fail_open(
        match_age(profile.age, program.target_age_min, program.target_age_max),
        program,
        fail_open_ratio,
    );
    if !age.eligible {
        return Err(ExclusionReason::AgeMismatch);
    }

    let region = fail_open(
        match_region(&profile.region, &program.target_regions),
        program,
        fail_open_ratio,
    );
    if !region.eligible {
        return Err(ExclusionReason::RegionMismatch);
    }

    Ok(Admission {
        deadline,
        age,
        region,
    })
}

fn fail_open(
    result: Result<ConditionCheck, MatcherFault>,
    program: &ProgramRecord,
    ratio: f64,
) -> ConditionCheck {
    result.unwrap_or_else(|fault| {
        warn!(program_id = %program.id.0, %fault, "malformed targeting, failing open");
        ConditionCheck::fail_open(ratio)
    })
}
