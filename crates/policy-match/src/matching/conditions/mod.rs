//! Per-attribute eligibility matchers.
//!
//! Each matcher is a pure function of the applicant attribute and the program's
//! declared targeting. Matchers that can trip over malformed catalog data return
//! [`MatcherFault`]; the scoring engine turns those into lenient fail-open checks.

mod region;

pub use region::{is_nationwide, normalize_region};

use super::domain::EmploymentStatus;

/// Points available to each of the four condition matchers.
pub const CONDITION_WEIGHT: f64 = 10.0;

/// Share of the budget granted when the applicant's region is unknown.
const UNKNOWN_REGION_RATIO: f64 = 0.5;

/// Upper bound used when a program only declares a minimum age.
const OPEN_AGE_CEILING: u32 = 100;

/// Eligibility flag plus the partial score earned toward the condition budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionCheck {
    pub eligible: bool,
    pub score: f64,
}

impl ConditionCheck {
    pub(crate) fn full() -> Self {
        Self::scaled(1.0)
    }

    pub(crate) fn scaled(ratio: f64) -> Self {
        Self {
            eligible: true,
            score: CONDITION_WEIGHT * ratio,
        }
    }

    pub(crate) fn unmet() -> Self {
        Self {
            eligible: false,
            score: 0.0,
        }
    }

    /// Lenient outcome used when a matcher could not evaluate the record.
    pub fn fail_open(ratio: f64) -> Self {
        Self::scaled(ratio)
    }
}

/// Malformed targeting data detected while matching.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatcherFault {
    #[error("target age range is inverted ({min} > {max})")]
    InvertedAgeRange { min: u32, max: u32 },
    #[error("target region list only contains blank entries")]
    BlankRegionTargets,
}

pub fn match_age(
    age: u32,
    target_min: Option<u32>,
    target_max: Option<u32>,
) -> Result<ConditionCheck, MatcherFault> {
    let min = target_min.filter(|value| *value > 0);
    let max = target_max.filter(|value| *value > 0);

    let (min, max) = match (min, max) {
        (None, None) => return Ok(ConditionCheck::full()),
        (min, max) => (min.unwrap_or(0), max.unwrap_or(OPEN_AGE_CEILING)),
    };

    if min > max {
        return Err(MatcherFault::InvertedAgeRange { min, max });
    }

    if !(min..=max).contains(&age) {
        return Ok(ConditionCheck::unmet());
    }

    if min == max {
        return Ok(ConditionCheck::full());
    }

    let center = f64::from(min + max) / 2.0;
    let half_span = f64::from(max - min) / 2.0;
    let closeness = 1.0 - (f64::from(age) - center).abs() / half_span;

    Ok(ConditionCheck::scaled(closeness.max(0.5)))
}

pub fn match_region(
    applicant_region: &str,
    target_regions: &[String],
) -> Result<ConditionCheck, MatcherFault> {
    if target_regions.is_empty() {
        return Ok(ConditionCheck::full());
    }

    if target_regions.iter().any(|region| is_nationwide(region)) {
        return Ok(ConditionCheck::full());
    }

    if applicant_region.trim().is_empty() {
        return Ok(ConditionCheck::scaled(UNKNOWN_REGION_RATIO));
    }

    let targets: Vec<&str> = target_regions
        .iter()
        .map(|region| region.trim())
        .filter(|region| !region.is_empty())
        .collect();
    if targets.is_empty() {
        return Err(MatcherFault::BlankRegionTargets);
    }

    let applicant = normalize_region(applicant_region);
    if !targets
        .iter()
        .any(|target| normalize_region(target) == applicant)
    {
        return Ok(ConditionCheck::unmet());
    }

    let ratio = match targets.len() {
        1 => 1.0,
        2..=3 => 0.9,
        _ => 0.8,
    };
    Ok(ConditionCheck::scaled(ratio))
}

/// Income is a soft filter: an unmet check withholds points but never excludes.
pub fn match_income(income: u64, target_income_max: Option<u64>) -> ConditionCheck {
    let ceiling = match target_income_max {
        Some(ceiling) if ceiling > 0 => ceiling,
        _ => return ConditionCheck::full(),
    };

    if income > ceiling {
        return ConditionCheck::unmet();
    }

    let share = income as f64 / ceiling as f64;
    let ratio = if share <= 0.5 {
        1.0
    } else if share <= 0.9 {
        0.9
    } else {
        0.8
    };
    ConditionCheck::scaled(ratio)
}

/// Employment is a soft filter, symmetric with [`match_income`].
pub fn match_employment(status: EmploymentStatus, target_employment: &[String]) -> ConditionCheck {
    let targets: Vec<&str> = target_employment
        .iter()
        .map(|target| target.trim())
        .filter(|target| !target.is_empty())
        .collect();

    if targets.is_empty() {
        return ConditionCheck::full();
    }

    let listed = targets
        .iter()
        .any(|target| EmploymentStatus::parse(target) == Some(status));
    if !listed {
        return ConditionCheck::unmet();
    }

    if targets.len() == 1 {
        ConditionCheck::full()
    } else {
        ConditionCheck::scaled(0.9)
    }
}
