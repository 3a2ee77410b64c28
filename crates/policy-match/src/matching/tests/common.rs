use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::matching::catalog::{CatalogError, ProgramCatalog};
use crate::matching::domain::{
    EmploymentStatus, MatchResult, Profile, ProgramId, ProgramRecord,
};
use crate::matching::scoring::{MatchingConfig, MatchingEngine};
use crate::matching::{matching_router, MatchingService};

pub(super) fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date")
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn job_seeker() -> Profile {
    Profile {
        age: 25,
        region: "Seoul".to_string(),
        income: 3000,
        employment: EmploymentStatus::JobSeeker,
        interest: Some("일자리".to_string()),
    }
}

/// Nationwide job-seeker program scoring 83.5 for [`job_seeker`].
pub(super) fn nationwide_program() -> ProgramRecord {
    ProgramRecord {
        id: ProgramId("JOB_001".to_string()),
        title: "Youth Tomorrow Savings".to_string(),
        category: "jobs".to_string(),
        target_age_min: Some(15),
        target_age_max: Some(34),
        target_regions: vec!["nationwide".to_string()],
        target_employment: vec!["job_seeker".to_string()],
        target_income_max: Some(6000),
        benefit_text: "up to 1200".to_string(),
        budget_max: None,
        deadline_text: "ongoing".to_string(),
        application_url: None,
        requirements: Vec::new(),
    }
}

pub(super) fn program(id: &str) -> ProgramRecord {
    ProgramRecord {
        id: ProgramId(id.to_string()),
        title: format!("Program {id}"),
        ..nationwide_program()
    }
}

pub(super) fn result(id: &str, score: f64, deadline: Option<&str>) -> MatchResult {
    MatchResult {
        program_id: ProgramId(id.to_string()),
        title: format!("Program {id}"),
        category: "jobs".to_string(),
        score,
        reasons: Vec::new(),
        benefit_summary: String::new(),
        deadline: deadline.map(str::to_string),
    }
}

pub(super) fn engine() -> MatchingEngine {
    MatchingEngine::new(MatchingConfig::default())
}

#[derive(Default)]
pub(super) struct MemoryCatalog {
    programs: Vec<ProgramRecord>,
}

impl MemoryCatalog {
    pub(super) fn with(programs: Vec<ProgramRecord>) -> Self {
        Self { programs }
    }
}

impl ProgramCatalog for MemoryCatalog {
    fn programs(&self) -> Result<Vec<ProgramRecord>, CatalogError> {
        Ok(self.programs.clone())
    }

    fn fetch(&self, id: &ProgramId) -> Result<Option<ProgramRecord>, CatalogError> {
        Ok(self.programs.iter().find(|program| &program.id == id).cloned())
    }
}

pub(super) struct UnavailableCatalog;

impl ProgramCatalog for UnavailableCatalog {
    fn programs(&self) -> Result<Vec<ProgramRecord>, CatalogError> {
        Err(CatalogError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ProgramId) -> Result<Option<ProgramRecord>, CatalogError> {
        Err(CatalogError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn service_with(programs: Vec<ProgramRecord>) -> MatchingService<MemoryCatalog> {
    MatchingService::new(
        Arc::new(MemoryCatalog::with(programs)),
        MatchingConfig::default(),
    )
}

pub(super) fn router_with(programs: Vec<ProgramRecord>) -> axum::Router {
    matching_router(Arc::new(service_with(programs)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
