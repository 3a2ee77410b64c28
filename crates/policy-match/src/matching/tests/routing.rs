use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::{nationwide_program, read_json_body, router_with, UnavailableCatalog};
use crate::matching::scoring::MatchingConfig;
use crate::matching::{matching_router, MatchingService};

fn json_request(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request")
}

fn profile_json(age: u32) -> Value {
    json!({
        "age": age,
        "region": "Seoul",
        "income": 3000,
        "employment": "job_seeker"
    })
}

#[tokio::test]
async fn match_endpoint_returns_ranked_results() {
    let app = router_with(vec![nationwide_program()]);

    let response = app
        .oneshot(json_request(
            "/api/v1/matches",
            json!({ "profile": profile_json(25), "today": "2025-06-15" }),
        ))
        .await
        .expect("match response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["reference_date"], "2025-06-15");
    assert_eq!(body["results"][0]["program_id"], "JOB_001");
    assert_eq!(body["results"][0]["score"], 83.5);
    assert_eq!(body["summary"]["total_matches"], 1);
}

#[tokio::test]
async fn match_endpoint_honours_request_options() {
    let app = router_with(vec![nationwide_program()]);

    let response = app
        .oneshot(json_request(
            "/api/v1/matches",
            json!({ "profile": profile_json(25), "today": "2025-06-15", "min_score": 90.0 }),
        ))
        .await
        .expect("match response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["results"], json!([]));
    assert_eq!(body["summary"]["message"], "no matching programs");
}

#[tokio::test]
async fn match_endpoint_rejects_invalid_profile() {
    let app = router_with(vec![nationwide_program()]);

    let response = app
        .oneshot(json_request(
            "/api/v1/matches",
            json!({ "profile": profile_json(52) }),
        ))
        .await
        .expect("match response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "age 52 is outside the supported range 15-39");
}

#[tokio::test]
async fn explain_endpoint_returns_outcome() {
    let app = router_with(vec![nationwide_program()]);

    let response = app
        .oneshot(json_request(
            "/api/v1/matches/explain",
            json!({
                "profile": profile_json(25),
                "program_id": "JOB_001",
                "today": "2025-06-15"
            }),
        ))
        .await
        .expect("explain response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["outcome"]["state"], "scored");
    assert_eq!(body["score"], 83.5);
}

#[tokio::test]
async fn explain_endpoint_reports_unknown_program() {
    let app = router_with(vec![nationwide_program()]);

    let response = app
        .oneshot(json_request(
            "/api/v1/matches/explain",
            json!({ "profile": profile_json(25), "program_id": "NOPE" }),
        ))
        .await
        .expect("explain response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn catalog_outage_maps_to_service_unavailable() {
    let service = MatchingService::new(Arc::new(UnavailableCatalog), MatchingConfig::default());
    let app = matching_router(Arc::new(service));

    let response = app
        .oneshot(json_request(
            "/api/v1/matches",
            json!({ "profile": profile_json(25) }),
        ))
        .await
        .expect("match response");

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
