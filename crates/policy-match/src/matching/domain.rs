use serde::{Deserialize, Serialize};

/// Youngest applicant age the engine accepts.
pub const MIN_APPLICANT_AGE: u32 = 15;
/// Oldest applicant age the engine accepts.
pub const MAX_APPLICANT_AGE: u32 = 39;

/// Identifier wrapper for catalog programs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProgramId(pub String);

impl std::fmt::Display for ProgramId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Employment category declared by the applicant.
///
/// Catalog records are free text, so the Korean labels used by the upstream
/// feed are accepted alongside the canonical names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    #[serde(alias = "재직자")]
    Employed,
    #[serde(alias = "구직자")]
    JobSeeker,
    #[serde(alias = "자영업")]
    SelfEmployed,
    #[serde(alias = "학생")]
    Student,
    #[serde(alias = "무직")]
    Unemployed,
}

impl EmploymentStatus {
    pub const ALL: [EmploymentStatus; 5] = [
        EmploymentStatus::Employed,
        EmploymentStatus::JobSeeker,
        EmploymentStatus::SelfEmployed,
        EmploymentStatus::Student,
        EmploymentStatus::Unemployed,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            EmploymentStatus::Employed => "employed",
            EmploymentStatus::JobSeeker => "job_seeker",
            EmploymentStatus::SelfEmployed => "self_employed",
            EmploymentStatus::Student => "student",
            EmploymentStatus::Unemployed => "unemployed",
        }
    }

    pub const fn local_label(self) -> &'static str {
        match self {
            EmploymentStatus::Employed => "재직자",
            EmploymentStatus::JobSeeker => "구직자",
            EmploymentStatus::SelfEmployed => "자영업",
            EmploymentStatus::Student => "학생",
            EmploymentStatus::Unemployed => "무직",
        }
    }

    /// Resolve a catalog entry such as `"job_seeker"`, `"Job Seeker"` or `"구직자"`.
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        let canonical = trimmed.to_ascii_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|status| status.label() == canonical || status.local_label() == trimmed)
    }
}

/// Validated applicant profile handed over by the intake collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub age: u32,
    /// Province-level region, e.g. `"서울"` or `"Seoul"`.
    #[serde(default)]
    pub region: String,
    /// Annual income in 만원.
    pub income: u64,
    pub employment: EmploymentStatus,
    #[serde(default)]
    pub interest: Option<String>,
}

impl Profile {
    pub fn validate(&self) -> Result<(), ProfileError> {
        if !(MIN_APPLICANT_AGE..=MAX_APPLICANT_AGE).contains(&self.age) {
            return Err(ProfileError::AgeOutOfRange { age: self.age });
        }
        Ok(())
    }

    /// Interest with blank values treated as absent.
    pub fn interest(&self) -> Option<&str> {
        self.interest
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

/// Intake validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("age {age} is outside the supported range 15-39")]
    AgeOutOfRange { age: u32 },
}

/// Catalog entry as fetched by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramRecord {
    pub id: ProgramId,
    pub title: String,
    #[serde(default)]
    pub category: String,
    /// `None` or `0` means no lower bound.
    #[serde(default)]
    pub target_age_min: Option<u32>,
    /// `None` or `0` means no upper bound.
    #[serde(default)]
    pub target_age_max: Option<u32>,
    #[serde(default)]
    pub target_regions: Vec<String>,
    #[serde(default)]
    pub target_employment: Vec<String>,
    #[serde(default)]
    pub target_income_max: Option<u64>,
    #[serde(default, alias = "benefit")]
    pub benefit_text: String,
    /// Authoritative benefit amount in 만원; wins over text extraction.
    #[serde(default)]
    pub budget_max: Option<u64>,
    #[serde(default, alias = "deadline")]
    pub deadline_text: String,
    #[serde(default)]
    pub application_url: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
}

impl ProgramRecord {
    pub fn deadline(&self) -> Option<&str> {
        let trimmed = self.deadline_text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn has_application_url(&self) -> bool {
        self.application_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}

/// Ranked entry handed to the explanation and presentation collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub program_id: ProgramId,
    pub title: String,
    pub category: String,
    pub score: f64,
    pub reasons: Vec<String>,
    pub benefit_summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

impl MatchResult {
    pub fn from_program(program: &ProgramRecord, score: f64, reasons: Vec<String>) -> Self {
        Self {
            program_id: program.id.clone(),
            title: program.title.clone(),
            category: program.category.clone(),
            score,
            reasons,
            benefit_summary: program.benefit_text.clone(),
            deadline: program.deadline().map(str::to_string),
        }
    }
}
