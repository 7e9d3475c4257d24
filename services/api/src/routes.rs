use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use intake_ai::error::AppError;
use intake_ai::workflows::leadsheet::{LeadsheetImporter, ScoredLead, SkippedLead};
use intake_ai::workflows::valuation::{valuation_router, ValuationService};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct LeadsheetScoreRequest {
    pub(crate) domain: String,
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct LeadsheetScoreResponse {
    pub(crate) domain: &'static str,
    pub(crate) scored: Vec<ScoredLead>,
    pub(crate) skipped: Vec<SkippedLead>,
}

pub(crate) fn with_valuation_routes(service: Arc<ValuationService>) -> axum::Router {
    valuation_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/leadsheets/score",
            axum::routing::post(leadsheet_score_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn leadsheet_score_endpoint(
    Extension(service): Extension<Arc<ValuationService>>,
    Json(payload): Json<LeadsheetScoreRequest>,
) -> Result<Json<LeadsheetScoreResponse>, AppError> {
    let domain = service.domain(&payload.domain)?;
    let reader = Cursor::new(payload.csv.into_bytes());
    let report = LeadsheetImporter::from_reader(reader, domain)?;

    Ok(Json(LeadsheetScoreResponse {
        domain: report.domain,
        scored: report.scored,
        skipped: report.skipped,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_ai::config::ValuationConfig;

    fn service() -> Arc<ValuationService> {
        let service =
            crate::infra::build_service(&ValuationConfig::default()).expect("catalog builds");
        Arc::new(service)
    }

    #[tokio::test]
    async fn leadsheet_score_endpoint_scores_rows() {
        let request = LeadsheetScoreRequest {
            domain: "rideshare".to_string(),
            csv: "lead_ref,injury_severity,medical_costs\nL-100,serious,10000\nL-101,minor,\n"
                .to_string(),
        };

        let Json(body) = leadsheet_score_endpoint(Extension(service()), Json(request))
            .await
            .expect("lead sheet scores");

        assert_eq!(body.domain, "rideshare");
        assert_eq!(body.scored.len(), 2);
        assert!(body.skipped.is_empty());
        assert_eq!(body.scored[0].lead_ref, "L-100");
        assert_eq!(body.scored[0].estimate.low, 135_000.0);
        assert_eq!(body.scored[0].estimate.high, 395_000.0);
        assert_eq!(body.scored[1].estimate.low, 50_000.0);
    }

    #[tokio::test]
    async fn leadsheet_score_endpoint_reports_skipped_rows() {
        let request = LeadsheetScoreRequest {
            domain: "rideshare".to_string(),
            csv: "lead_ref,injury_severity\nL-200,serious\n,minor\n".to_string(),
        };

        let Json(body) = leadsheet_score_endpoint(Extension(service()), Json(request))
            .await
            .expect("lead sheet scores");

        assert_eq!(body.scored.len(), 1);
        assert_eq!(body.skipped.len(), 1);
        assert_eq!(body.skipped[0].line, 3);
    }

    #[tokio::test]
    async fn leadsheet_score_endpoint_rejects_unknown_domain() {
        let request = LeadsheetScoreRequest {
            domain: "maritime".to_string(),
            csv: "lead_ref\nL-1\n".to_string(),
        };

        let error = leadsheet_score_endpoint(Extension(service()), Json(request))
            .await
            .expect_err("unknown domain rejected");

        match error {
            AppError::Valuation(_) => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
