use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{ProgramId, ProgramRecord};

/// Read access to the program catalog owned by the persistence collaborator.
pub trait ProgramCatalog: Send + Sync {
    fn programs(&self) -> Result<Vec<ProgramRecord>, CatalogError>;
    fn fetch(&self, id: &ProgramId) -> Result<Option<ProgramRecord>, CatalogError>;
}

/// Error enumeration for catalog failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Failures while loading a catalog export from disk.
#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read catalog export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid catalog JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("row {row}: column `{column}` has non-numeric value '{value}'")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Separator for list-valued CSV columns.
const LIST_SEPARATOR: char = '|';

/// Loads catalog exports in JSON (array of records) or CSV form.
pub struct CatalogImporter;

impl CatalogImporter {
    /// `.csv` files are read as CSV; anything else as JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ProgramRecord>, CatalogImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        if is_csv {
            Self::from_csv_reader(file)
        } else {
            Self::from_json_reader(file)
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<ProgramRecord>, CatalogImportError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<ProgramRecord>, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut programs = Vec::new();

        for (index, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
            let row = record?;
            programs.push(row.into_program(index + 1)?);
        }

        Ok(programs)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    title: String,
    #[serde(default)]
    category: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    target_age_min: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    target_age_max: Option<String>,
    #[serde(default)]
    target_regions: String,
    #[serde(default)]
    target_employment: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    target_income_max: Option<String>,
    #[serde(default, alias = "benefit")]
    benefit_text: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    budget_max: Option<String>,
    #[serde(default, alias = "deadline")]
    deadline_text: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    application_url: Option<String>,
    #[serde(default)]
    requirements: String,
}

impl CatalogRow {
    fn into_program(self, row: usize) -> Result<ProgramRecord, CatalogImportError> {
        Ok(ProgramRecord {
            id: ProgramId(self.id),
            title: self.title,
            category: self.category,
            target_age_min: parse_number(row, "target_age_min", self.target_age_min)?,
            target_age_max: parse_number(row, "target_age_max", self.target_age_max)?,
            target_regions: split_list(&self.target_regions),
            target_employment: split_list(&self.target_employment),
            target_income_max: parse_number(row, "target_income_max", self.target_income_max)?,
            benefit_text: self.benefit_text,
            budget_max: parse_number(row, "budget_max", self.budget_max)?,
            deadline_text: self.deadline_text,
            application_url: self.application_url,
            requirements: split_list(&self.requirements),
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    row: usize,
    column: &'static str,
    value: Option<String>,
) -> Result<Option<T>, CatalogImportError> {
    value
        .map(|raw| {
            raw.replace(',', "")
                .parse::<T>()
                .map_err(|_| CatalogImportError::InvalidNumber {
                    row,
                    column,
                    value: raw.clone(),
                })
        })
        .transpose()
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
