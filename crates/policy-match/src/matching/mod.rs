//! Profile-to-program matching: eligibility gates, scoring, and ranked selection.
//!
//! Every scoring pass takes the reference date as an argument so that one
//! ranking request evaluates all deadlines against the same day.

pub mod catalog;
pub mod conditions;
pub mod domain;
pub mod extraction;
pub mod ranking;
pub mod router;
pub(crate) mod scoring;
pub mod service;
pub mod summary;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, CatalogImportError, CatalogImporter, ProgramCatalog};
pub use conditions::{ConditionCheck, MatcherFault, CONDITION_WEIGHT};
pub use domain::{
    EmploymentStatus, MatchResult, Profile, ProfileError, ProgramId, ProgramRecord,
    MAX_APPLICANT_AGE, MIN_APPLICANT_AGE,
};
pub use extraction::{
    analyze_deadline, extract_amount, parse_deadline, DeadlineAssessment, DeadlineStatus,
    DeadlineUrgency,
};
pub use ranking::RankOptions;
pub use router::{matching_router, ExplainRequest, MatchRequest};
pub use scoring::{
    benefit_score, ease_score, ExclusionReason, MatchingConfig, MatchingEngine, ScoreCard,
    ScoreOutcome, BENEFIT_WEIGHT, DEFAULT_FAIL_OPEN_RATIO, DEFAULT_MAX_RESULTS,
    DEFAULT_MIN_SCORE, EASE_WEIGHT,
};
pub use service::{MatchingService, MatchingServiceError, Recommendation, ScoreExplanation};
pub use summary::{describe_profile, MatchSummary};
