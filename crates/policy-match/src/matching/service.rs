use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::catalog::{CatalogError, ProgramCatalog};
use super::domain::{MatchResult, Profile, ProfileError, ProgramId};
use super::ranking::RankOptions;
use super::scoring::{MatchingConfig, MatchingEngine, ScoreOutcome};
use super::summary::MatchSummary;

/// Service composing the program catalog with the matching engine.
pub struct MatchingService<C> {
    catalog: Arc<C>,
    engine: Arc<MatchingEngine>,
}

/// Ranked shortlist plus the reference date it was computed against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub reference_date: NaiveDate,
    pub results: Vec<MatchResult>,
    pub summary: MatchSummary,
}

/// Single-program breakdown used for debugging a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreExplanation {
    pub program_id: ProgramId,
    pub reference_date: NaiveDate,
    pub score: f64,
    pub outcome: ScoreOutcome,
}

impl<C> MatchingService<C>
where
    C: ProgramCatalog + 'static,
{
    pub fn new(catalog: Arc<C>, config: MatchingConfig) -> Self {
        Self {
            catalog,
            engine: Arc::new(MatchingEngine::new(config)),
        }
    }

    pub fn engine(&self) -> &MatchingEngine {
        &self.engine
    }

    /// Options from the service configuration, used when a caller supplies none.
    pub fn default_options(&self) -> RankOptions {
        RankOptions::from(self.engine.config())
    }

    /// Rank the full catalog for a profile against a single reference date.
    pub fn recommend(
        &self,
        profile: &Profile,
        options: &RankOptions,
        today: NaiveDate,
    ) -> Result<Recommendation, MatchingServiceError> {
        profile.validate()?;
        let programs = self.catalog.programs()?;
        let results = self.engine.rank(profile, &programs, options, today);
        let summary = MatchSummary::from_results(profile, &results);

        Ok(Recommendation {
            reference_date: today,
            results,
            summary,
        })
    }

    /// Score one catalog program and expose the full outcome.
    pub fn explain(
        &self,
        profile: &Profile,
        program_id: &ProgramId,
        today: NaiveDate,
    ) -> Result<ScoreExplanation, MatchingServiceError> {
        profile.validate()?;
        let program = self
            .catalog
            .fetch(program_id)?
            .ok_or_else(|| MatchingServiceError::UnknownProgram(program_id.clone()))?;

        let outcome = self.engine.evaluate(profile, &program, today);

        Ok(ScoreExplanation {
            program_id: program.id,
            reference_date: today,
            score: outcome.total(),
            outcome,
        })
    }
}

/// Error raised by the matching service.
#[derive(Debug, thiserror::Error)]
pub enum MatchingServiceError {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("program {0} not found in catalog")]
    UnknownProgram(ProgramId),
}
