use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use policy_match::error::AppError;
use policy_match::matching::{
    CatalogError, CatalogImporter, ProgramCatalog, ProgramId, ProgramRecord,
};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog snapshot loaded once at startup.
#[derive(Default, Clone)]
pub(crate) struct InMemoryCatalog {
    programs: Arc<Vec<ProgramRecord>>,
}

impl InMemoryCatalog {
    pub(crate) fn new(programs: Vec<ProgramRecord>) -> Self {
        Self {
            programs: Arc::new(programs),
        }
    }

    /// Load an export from disk, or fall back to the built-in sample catalog.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => Ok(Self::new(CatalogImporter::from_path(path)?)),
            None => Ok(Self::new(sample_programs())),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.programs.len()
    }
}

impl ProgramCatalog for InMemoryCatalog {
    fn programs(&self) -> Result<Vec<ProgramRecord>, CatalogError> {
        Ok(self.programs.as_ref().clone())
    }

    fn fetch(&self, id: &ProgramId) -> Result<Option<ProgramRecord>, CatalogError> {
        Ok(self.programs.iter().find(|program| &program.id == id).cloned())
    }
}

fn sample_program(id: &str, title: &str, category: &str) -> ProgramRecord {
    ProgramRecord {
        id: ProgramId(id.to_string()),
        title: title.to_string(),
        category: category.to_string(),
        target_age_min: Some(19),
        target_age_max: Some(34),
        target_regions: vec!["전국".to_string()],
        target_employment: Vec::new(),
        target_income_max: None,
        benefit_text: String::new(),
        budget_max: None,
        deadline_text: String::new(),
        application_url: None,
        requirements: Vec::new(),
    }
}

/// Representative youth programs used by `demo` and by `serve` without `--catalog`.
pub(crate) fn sample_programs() -> Vec<ProgramRecord> {
    vec![
        ProgramRecord {
            target_age_min: Some(15),
            target_employment: vec!["구직자".to_string(), "재직자".to_string()],
            target_income_max: Some(3600),
            benefit_text: "2년 만기시 300만원~1200만원 지급".to_string(),
            budget_max: Some(1200),
            deadline_text: "상시".to_string(),
            application_url: Some("https://www.work.go.kr".to_string()),
            requirements: vec!["고용보험 가입".to_string()],
            ..sample_program("JOB_001", "청년내일채움공제", "일자리")
        },
        ProgramRecord {
            target_employment: vec!["재직자".to_string(), "구직자".to_string()],
            target_income_max: Some(3600),
            benefit_text: "월 10만원 적립시 정부지원금 10만원 추가 적립".to_string(),
            budget_max: Some(240),
            deadline_text: "2026-12-31".to_string(),
            application_url: Some("https://www.finlife.or.kr".to_string()),
            ..sample_program("FIN_001", "청년희망적금", "금융")
        },
        ProgramRecord {
            target_age_max: Some(39),
            target_employment: vec!["재직자".to_string(), "구직자".to_string()],
            target_income_max: Some(6000),
            benefit_text: "전세자금 최대 2억원 대출".to_string(),
            deadline_text: "예산 소진시 마감".to_string(),
            application_url: Some("https://nhuf.molit.go.kr".to_string()),
            requirements: vec![
                "무주택 세대주".to_string(),
                "전세계약서".to_string(),
                "소득증빙".to_string(),
            ],
            ..sample_program("HOU_001", "청년 전세자금대출", "주거")
        },
        ProgramRecord {
            target_regions: vec!["서울".to_string()],
            target_income_max: Some(5000),
            benefit_text: "월 20만원 최대 12개월".to_string(),
            deadline_text: "2026-11-30".to_string(),
            application_url: Some("https://housing.seoul.go.kr".to_string()),
            requirements: vec!["임대차계약서".to_string(), "주민등록등본".to_string()],
            ..sample_program("HOU_002", "서울시 청년월세지원", "주거")
        },
        ProgramRecord {
            target_regions: vec!["부산광역시".to_string()],
            target_age_max: Some(39),
            benefit_text: "월 10만원 매칭 적립".to_string(),
            deadline_text: "2026년 9월".to_string(),
            ..sample_program("FIN_002", "부산 청년 기쁨두배통장", "금융")
        },
    ]
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
