use regex::Regex;
use std::sync::OnceLock;

/// Attempted in order; the first pattern with a parsable capture wins.
const AMOUNT_PATTERNS: &[&str] = &[
    r"(\d[\d,]*)\s*만\s*원",
    r"(\d[\d,]*)\s*억",
    r"(?:최대|(?i:up\s+to))\s*(\d[\d,]*)",
    r"(?:월\s*(\d[\d,]*)\s*만\s*원|(?i:monthly)\s+(\d[\d,]*))",
    r"(\d[\d,]*)\s*천\s*만\s*원",
];

const HUNDRED_MILLION_MULTIPLIER: u64 = 10_000;
const TEN_MILLION_MULTIPLIER: u64 = 1_000;
const MONTHS_PER_YEAR: u64 = 12;

fn amount_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        AMOUNT_PATTERNS
            .iter()
            .filter_map(|pattern| Regex::new(pattern).ok())
            .collect()
    })
}

/// Pull a benefit amount in 만원 out of free text.
///
/// Units are detected on the whole text rather than on the matched span, so
/// `"월 50만원"` reads as 50 and is then annualized to 600.
pub fn extract_amount(text: &str) -> Option<u64> {
    for pattern in amount_patterns() {
        let Some(captures) = pattern.captures(text) else {
            continue;
        };
        let Some(raw) = captures.iter().skip(1).flatten().next() else {
            continue;
        };
        let digits: String = raw.as_str().chars().filter(|c| *c != ',').collect();
        let amount = digits.parse::<u64>().ok()?;
        return apply_unit(text, amount);
    }

    None
}

fn apply_unit(text: &str, amount: u64) -> Option<u64> {
    if text.contains('억') {
        amount.checked_mul(HUNDRED_MILLION_MULTIPLIER)
    } else if text.contains("천만") {
        amount.checked_mul(TEN_MILLION_MULTIPLIER)
    } else if text.contains('월') || text.to_lowercase().contains("monthly") {
        amount.checked_mul(MONTHS_PER_YEAR)
    } else {
        Some(amount)
    }
}
