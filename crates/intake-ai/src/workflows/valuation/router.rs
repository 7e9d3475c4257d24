use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::intake::CaseSubmission;
use super::service::{ValuationService, ValuationServiceError};

/// Router builder exposing the valuation endpoints.
pub fn valuation_router(service: Arc<ValuationService>) -> Router {
    Router::new()
        .route("/api/v1/valuation/domains", get(domains_handler))
        .route(
            "/api/v1/valuation/:domain/estimates",
            post(estimate_handler),
        )
        .with_state(service)
}

pub(crate) async fn domains_handler(State(service): State<Arc<ValuationService>>) -> Response {
    let catalog = service.domains();
    (StatusCode::OK, axum::Json(catalog)).into_response()
}

pub(crate) async fn estimate_handler(
    State(service): State<Arc<ValuationService>>,
    Path(domain): Path<String>,
    axum::Json(submission): axum::Json<CaseSubmission>,
) -> Response {
    match service.estimate(&domain, submission) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error @ ValuationServiceError::UnknownDomain(_)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}
