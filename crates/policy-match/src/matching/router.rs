use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::catalog::ProgramCatalog;
use super::domain::{Profile, ProgramId};
use super::ranking::RankOptions;
use super::service::{MatchingService, MatchingServiceError};

/// Ranking request; omitted options fall back to the service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub profile: Profile,
    #[serde(default)]
    pub min_score: Option<f64>,
    #[serde(default)]
    pub max_results: Option<usize>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainRequest {
    pub profile: Profile,
    pub program_id: ProgramId,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Router builder exposing the ranking and explanation endpoints.
pub fn matching_router<C>(service: Arc<MatchingService<C>>) -> Router
where
    C: ProgramCatalog + 'static,
{
    Router::new()
        .route("/api/v1/matches", post(match_handler::<C>))
        .route("/api/v1/matches/explain", post(explain_handler::<C>))
        .with_state(service)
}

pub(crate) async fn match_handler<C>(
    State(service): State<Arc<MatchingService<C>>>,
    axum::Json(request): axum::Json<MatchRequest>,
) -> Response
where
    C: ProgramCatalog + 'static,
{
    let defaults = service.default_options();
    let options = RankOptions {
        min_score: request.min_score.unwrap_or(defaults.min_score),
        max_results: request.max_results.unwrap_or(defaults.max_results),
    };
    let today = request.today.unwrap_or_else(|| Local::now().date_naive());

    match service.recommend(&request.profile, &options, today) {
        Ok(recommendation) => (StatusCode::OK, axum::Json(recommendation)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn explain_handler<C>(
    State(service): State<Arc<MatchingService<C>>>,
    axum::Json(request): axum::Json<ExplainRequest>,
) -> Response
where
    C: ProgramCatalog + 'static,
{
    let today = request.today.unwrap_or_else(|| Local::now().date_naive());

    match service.explain(&request.profile, &request.program_id, today) {
        Ok(explanation) => (StatusCode::OK, axum::Json(explanation)).into_response(),
        Err(error) => error_response(error),
    }
}

impl MatchingServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            MatchingServiceError::Profile(_) => StatusCode::UNPROCESSABLE_ENTITY,
            MatchingServiceError::UnknownProgram(_) => StatusCode::NOT_FOUND,
            MatchingServiceError::Catalog(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

fn error_response(error: MatchingServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (error.status_code(), axum::Json(payload)).into_response()
}
