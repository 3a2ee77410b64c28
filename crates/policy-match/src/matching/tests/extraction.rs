use chrono::NaiveDate;

use super::common::reference_date;
use crate::matching::extraction::{
    analyze_deadline, extract_amount, parse_deadline, DeadlineStatus, DeadlineUrgency,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn amounts_are_read_in_ten_thousand_won_units() {
    assert_eq!(extract_amount("최대 3000만원 지급"), Some(3000));
    assert_eq!(extract_amount("1,500만원 지원"), Some(1500));
    assert_eq!(extract_amount("up to 1200"), Some(1200));
}

#[test]
fn larger_units_and_monthly_amounts_are_scaled() {
    assert_eq!(extract_amount("1억 지원"), Some(10000));
    assert_eq!(extract_amount("월 50만원"), Some(600));
    assert_eq!(extract_amount("monthly 30"), Some(360));
}

#[test]
fn text_without_amount_yields_none() {
    assert_eq!(extract_amount("교육 프로그램 무료 제공"), None);
    assert_eq!(extract_amount(""), None);
}

#[test]
fn ongoing_keywords_are_open_ended() {
    assert_eq!(parse_deadline("연중 상시 모집"), DeadlineStatus::OpenEnded);
    assert_eq!(parse_deadline("예산 소진시 마감"), DeadlineStatus::OpenEnded);
    assert_eq!(parse_deadline("Rolling admissions"), DeadlineStatus::OpenEnded);
}

#[test]
fn full_dates_parse_with_any_separator() {
    assert_eq!(parse_deadline("2025-06-14"), DeadlineStatus::Dated(date(2025, 6, 14)));
    assert_eq!(parse_deadline("2025.7.1 마감"), DeadlineStatus::Dated(date(2025, 7, 1)));
    assert_eq!(
        parse_deadline("2025년 12월 31일까지"),
        DeadlineStatus::Dated(date(2025, 12, 31))
    );
}

#[test]
fn partial_dates_stay_open_through_the_named_period() {
    assert_eq!(parse_deadline("2025년 6월"), DeadlineStatus::Dated(date(2025, 6, 30)));
    assert_eq!(parse_deadline("2024년 2월"), DeadlineStatus::Dated(date(2024, 2, 29)));
    assert_eq!(parse_deadline("2025년 12월"), DeadlineStatus::Dated(date(2025, 12, 31)));
    assert_eq!(parse_deadline("2024년"), DeadlineStatus::Dated(date(2024, 12, 31)));
}

#[test]
fn year_month_deadline_expires_when_the_next_month_starts() {
    assert!(!analyze_deadline("2025년 5월", date(2025, 5, 31)).expired);
    assert!(analyze_deadline("2025년 5월", date(2025, 6, 1)).expired);
    assert!(!analyze_deadline("2025.05", date(2025, 5, 31)).expired);
    assert!(analyze_deadline("2025.05", date(2025, 6, 1)).expired);
}

#[test]
fn year_deadline_expires_when_the_next_year_starts() {
    assert!(!analyze_deadline("2024년", date(2024, 12, 31)).expired);
    assert!(analyze_deadline("2024년", date(2025, 1, 1)).expired);
}

#[test]
fn full_date_deadline_expires_the_day_after() {
    assert!(!analyze_deadline("2025-06-14", date(2025, 6, 14)).expired);
    assert!(analyze_deadline("2025-06-14", date(2025, 6, 15)).expired);
}

#[test]
fn unrecognized_or_impossible_dates_are_unparsable() {
    assert_eq!(parse_deadline("선착순 마감"), DeadlineStatus::Unparsable);
    assert_eq!(parse_deadline("2025-02-30"), DeadlineStatus::Unparsable);
    assert_eq!(parse_deadline("   "), DeadlineStatus::Missing);
}

#[test]
fn deadline_before_reference_date_is_expired() {
    let today = reference_date();

    assert!(analyze_deadline("2025-06-14", today).expired);
    assert!(analyze_deadline("2025년 5월", today).expired);
    assert!(analyze_deadline("2024년", today).expired);
}

#[test]
fn deadline_on_reference_date_is_still_open() {
    let assessment = analyze_deadline("2025.06.15", reference_date());
    assert!(!assessment.expired);
    assert_eq!(assessment.urgency, DeadlineUrgency::Near);
}

#[test]
fn unknown_deadlines_never_expire() {
    let today = reference_date();

    let unparsable = analyze_deadline("선착순 마감", today);
    assert!(!unparsable.expired);
    assert_eq!(unparsable.urgency, DeadlineUrgency::Normal);

    let missing = analyze_deadline("", today);
    assert!(!missing.expired);
    assert_eq!(missing.urgency, DeadlineUrgency::Unspecified);
}

#[test]
fn urgency_tiers_follow_time_remaining() {
    let today = reference_date();

    assert_eq!(analyze_deadline("상시", today).urgency, DeadlineUrgency::OpenEnded);
    assert_eq!(analyze_deadline("2025-12-31", today).urgency, DeadlineUrgency::Far);
    assert_eq!(analyze_deadline("2025-09-01", today).urgency, DeadlineUrgency::Normal);
    assert_eq!(analyze_deadline("2025년 6월", today).urgency, DeadlineUrgency::Near);
}

#[test]
fn urgency_ratios_rank_open_ended_highest() {
    assert_eq!(DeadlineUrgency::OpenEnded.ratio(), 1.0);
    assert!(DeadlineUrgency::Far.ratio() > DeadlineUrgency::Normal.ratio());
    assert!(DeadlineUrgency::Normal.ratio() > DeadlineUrgency::Near.ratio());
    assert_eq!(DeadlineUrgency::Unspecified.ratio(), 0.0);
}
