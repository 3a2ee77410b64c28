use super::super::conditions::{match_employment, match_income, CONDITION_WEIGHT};
use super::super::domain::{Profile, ProgramRecord};
use super::super::extraction::{extract_amount, DeadlineAssessment};
use super::policy::Admission;
use super::ScoreCard;

pub const BENEFIT_WEIGHT: f64 = 30.0;
pub const EASE_WEIGHT: f64 = 30.0;

const EASE_COMPONENT_WEIGHT: f64 = EASE_WEIGHT / 3.0;

/// Amount thresholds in 만원, highest first.
const BENEFIT_TIERS: &[(u64, f64)] = &[
    (3000, 1.0),
    (2000, 0.9),
    (1000, 0.8),
    (500, 0.7),
    (200, 0.6),
    (100, 0.5),
    (50, 0.4),
];

/// Floor for small amounts and for programs with no recoverable amount.
const BENEFIT_FLOOR_RATIO: f64 = 0.3;

const HIGH_BENEFIT_THRESHOLD: f64 = 20.0;
const MODERATE_BENEFIT_THRESHOLD: f64 = 10.0;
const SIMPLE_APPLICATION_THRESHOLD: f64 = 20.0;
const MODERATE_APPLICATION_THRESHOLD: f64 = 15.0;

pub fn benefit_score(program: &ProgramRecord) -> f64 {
    let amount = program
        .budget_max
        .filter(|amount| *amount > 0)
        .or_else(|| extract_amount(&program.benefit_text));

    let ratio = match amount {
        Some(amount) if amount > 0 => BENEFIT_TIERS
            .iter()
            .find(|(threshold, _)| amount >= *threshold)
            .map(|(_, ratio)| *ratio)
            .unwrap_or(BENEFIT_FLOOR_RATIO),
        _ => BENEFIT_FLOOR_RATIO,
    };

    BENEFIT_WEIGHT * ratio
}

pub fn ease_score(program: &ProgramRecord, deadline: &DeadlineAssessment) -> f64 {
    let url = if program.has_application_url() {
        EASE_COMPONENT_WEIGHT
    } else {
        0.0
    };
    let urgency = EASE_COMPONENT_WEIGHT * deadline.urgency.ratio();
    let requirements = EASE_COMPONENT_WEIGHT * requirement_ratio(program.requirements.len());

    (url + urgency + requirements).min(EASE_WEIGHT)
}

fn requirement_ratio(count: usize) -> f64 {
    match count {
        0..=2 => 1.0,
        3..=4 => 0.8,
        5..=6 => 0.6,
        _ => 0.4,
    }
}

/// Soft accumulation over an admitted program.
pub(crate) fn score_admitted(
    profile: &Profile,
    program: &ProgramRecord,
    admission: &Admission,
) -> ScoreCard {
    let mut reasons = Vec::new();
    let mut condition_score = admission.age.score + admission.region.score;

    reasons.push(format!(
        "age condition met ({}-{})",
        bound_label(program.target_age_min),
        bound_label(program.target_age_max)
    ));

    let regions = if program.target_regions.is_empty() {
        "nationwide".to_string()
    } else {
        program.target_regions.join(", ")
    };
    reasons.push(format!("region condition met ({regions})"));

    let income = match_income(profile.income, program.target_income_max);
    if income.eligible {
        condition_score += income.score;
        match program.target_income_max.filter(|ceiling| *ceiling > 0) {
            Some(ceiling) => reasons.push(format!(
                "income condition met (up to {} 만원)",
                format_thousands(ceiling)
            )),
            None => reasons.push("no income limit".to_string()),
        }
    }

    let employment = match_employment(profile.employment, &program.target_employment);
    if employment.eligible {
        condition_score += employment.score;
        if program.target_employment.is_empty() {
            reasons.push("no employment restriction".to_string());
        } else {
            reasons.push(format!(
                "employment status fits ({})",
                program.target_employment.join(", ")
            ));
        }
    }

    let condition_score = condition_score.min(CONDITION_WEIGHT * 4.0);

    let benefit_score = benefit_score(program);
    if benefit_score > HIGH_BENEFIT_THRESHOLD {
        reasons.push("high benefit".to_string());
    } else if benefit_score > MODERATE_BENEFIT_THRESHOLD {
        reasons.push("moderate benefit".to_string());
    }

    let ease_score = ease_score(program, &admission.deadline);
    if ease_score > SIMPLE_APPLICATION_THRESHOLD {
        reasons.push("simple application process".to_string());
    } else if ease_score > MODERATE_APPLICATION_THRESHOLD {
        reasons.push("moderate application process".to_string());
    }

    let total = round_one_decimal(condition_score + benefit_score + ease_score).clamp(0.0, 100.0);

    ScoreCard {
        condition_score,
        benefit_score,
        ease_score,
        total,
        reasons,
    }
}

fn bound_label(bound: Option<u32>) -> String {
    match bound.filter(|value| *value > 0) {
        Some(value) => value.to_string(),
        None => "any".to_string(),
    }
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Render `12000` as `12,000`.
pub(crate) fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut rendered = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            rendered.push(',');
        }
        rendered.push(digit);
    }
    rendered
}
