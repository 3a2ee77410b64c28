use chrono::{Months, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const ONGOING_KEYWORDS: &[&str] = &[
    "상시",
    "수시",
    "연중",
    "계속",
    "예산 소진시",
    "예산소진시",
    "ongoing",
    "rolling",
    "continuous",
    "year-round",
    "until budget",
];

const FULL_DATE_PATTERNS: &[&str] = &[
    r"(\d{4})[-./](\d{1,2})[-./](\d{1,2})",
    r"(\d{4})년\s*(\d{1,2})월\s*(\d{1,2})일",
];

const YEAR_MONTH_PATTERNS: &[&str] = &[
    r"(\d{4})년?\s*(\d{1,2})월",
    r"(\d{4})[-./](\d{1,2})(?:\D|$)",
];

const YEAR_PATTERN: &str = r"(\d{4})년";

/// Days remaining at or below which a deadline counts as near.
const NEAR_WINDOW_DAYS: i64 = 31;
/// Months remaining at or beyond which a deadline counts as far.
const FAR_WINDOW_MONTHS: u32 = 6;

/// Interpretation of a program's free-text deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "date")]
pub enum DeadlineStatus {
    Missing,
    OpenEnded,
    /// Last day on which applications are still accepted.
    Dated(NaiveDate),
    Unparsable,
}

/// How comfortably an applicant can still make the deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineUrgency {
    OpenEnded,
    Far,
    Normal,
    Near,
    Unspecified,
}

impl DeadlineUrgency {
    /// Share of the urgency sub-score earned by this tier.
    pub const fn ratio(self) -> f64 {
        match self {
            DeadlineUrgency::OpenEnded => 1.0,
            DeadlineUrgency::Far => 0.8,
            DeadlineUrgency::Normal => 0.6,
            DeadlineUrgency::Near => 0.4,
            DeadlineUrgency::Unspecified => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineAssessment {
    pub status: DeadlineStatus,
    pub expired: bool,
    pub urgency: DeadlineUrgency,
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|pattern| Regex::new(pattern).ok())
        .collect()
}

fn full_date_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| compile(FULL_DATE_PATTERNS))
}

fn year_month_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| compile(YEAR_MONTH_PATTERNS))
}

fn year_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| compile(&[YEAR_PATTERN]))
}

fn capture_numbers<const N: usize>(patterns: &[Regex], text: &str) -> Option<[u32; N]> {
    patterns.iter().find_map(|pattern| {
        let captures = pattern.captures(text)?;
        let mut values = [0u32; N];
        for (index, value) in values.iter_mut().enumerate() {
            *value = captures.get(index + 1)?.as_str().parse().ok()?;
        }
        Some(values)
    })
}

/// Classify deadline text without reference to the current date.
///
/// A matched pattern that does not form a real calendar date stops the search
/// and yields [`DeadlineStatus::Unparsable`].
pub fn parse_deadline(text: &str) -> DeadlineStatus {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return DeadlineStatus::Missing;
    }

    let lowered = trimmed.to_lowercase();
    if ONGOING_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
    {
        return DeadlineStatus::OpenEnded;
    }

    // Partial dates stay open through the end of the named month or year.
    let full_date = capture_numbers::<3>(full_date_patterns(), trimmed);
    let last_open_day = if let Some([year, month, day]) = full_date {
        i32::try_from(year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, month, day))
    } else if let Some([year, month]) = capture_numbers::<2>(year_month_patterns(), trimmed) {
        i32::try_from(year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, month, 1))
            .and_then(|first| first.checked_add_months(Months::new(1)))
            .and_then(|next_month| next_month.pred_opt())
    } else if let Some([year]) = capture_numbers::<1>(year_patterns(), trimmed) {
        i32::try_from(year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 12, 31))
    } else {
        None
    };

    last_open_day
        .map(DeadlineStatus::Dated)
        .unwrap_or(DeadlineStatus::Unparsable)
}

/// Evaluate deadline text against the reference date of the ranking pass.
pub fn analyze_deadline(text: &str, today: NaiveDate) -> DeadlineAssessment {
    let status = parse_deadline(text);

    let (expired, urgency) = match status {
        DeadlineStatus::Missing => (false, DeadlineUrgency::Unspecified),
        DeadlineStatus::OpenEnded => (false, DeadlineUrgency::OpenEnded),
        DeadlineStatus::Unparsable => (false, DeadlineUrgency::Normal),
        DeadlineStatus::Dated(last_open_day) => (
            last_open_day < today,
            urgency_for(last_open_day, today),
        ),
    };

    DeadlineAssessment {
        status,
        expired,
        urgency,
    }
}

fn urgency_for(last_open_day: NaiveDate, today: NaiveDate) -> DeadlineUrgency {
    let far_threshold = today
        .checked_add_months(Months::new(FAR_WINDOW_MONTHS))
        .unwrap_or(NaiveDate::MAX);

    if last_open_day >= far_threshold {
        DeadlineUrgency::Far
    } else if (last_open_day - today).num_days() <= NEAR_WINDOW_DAYS {
        DeadlineUrgency::Near
    } else {
        DeadlineUrgency::Normal
    }
}

impl std::fmt::Display for DeadlineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeadlineStatus::Missing => write!(f, "missing"),
            DeadlineStatus::OpenEnded => write!(f, "open-ended"),
            DeadlineStatus::Dated(date) => write!(f, "open until {date}"),
            DeadlineStatus::Unparsable => write!(f, "unparsable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_deadline_pattern_compiles() {
        assert_eq!(full_date_patterns().len(), FULL_DATE_PATTERNS.len());
        assert_eq!(year_month_patterns().len(), YEAR_MONTH_PATTERNS.len());
        assert_eq!(year_patterns().len(), 1);
    }
}
