use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::analysis::Analysis;
use super::intake::ApplicantSubmission;
use super::remote::RemotePredictorError;
use super::report::AnalysisView;
use super::service::{CreditProfileService, ProfileServiceError};

/// Canonical analysis plus its display-ready view.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub analysis: Analysis,
    pub view: AnalysisView,
}

impl From<Analysis> for AnalysisResponse {
    fn from(analysis: Analysis) -> Self {
        let view = AnalysisView::from_analysis(&analysis);
        Self { analysis, view }
    }
}

/// Router builder exposing the scoring endpoints.
pub fn analysis_router(service: Arc<CreditProfileService>) -> Router {
    Router::new()
        .route("/api/v1/analysis", post(analyze_handler))
        .route("/api/v1/analysis/remote", post(remote_analyze_handler))
        .route("/predict", post(predict_handler))
        .with_state(service)
}

pub(crate) async fn analyze_handler(
    State(service): State<Arc<CreditProfileService>>,
    axum::Json(submission): axum::Json<ApplicantSubmission>,
) -> Response {
    match service.analyze(&submission) {
        Ok(analysis) => {
            (StatusCode::OK, axum::Json(AnalysisResponse::from(analysis))).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn remote_analyze_handler(
    State(service): State<Arc<CreditProfileService>>,
    axum::Json(submission): axum::Json<ApplicantSubmission>,
) -> Response {
    match service.analyze_remote(&submission).await {
        Ok(analysis) => {
            (StatusCode::OK, axum::Json(AnalysisResponse::from(analysis))).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Compatibility endpoint for front-ends built against the remote predictor.
pub(crate) async fn predict_handler(
    State(service): State<Arc<CreditProfileService>>,
    axum::Json(submission): axum::Json<ApplicantSubmission>,
) -> Response {
    match service.predict(&submission) {
        Ok(prediction) => (StatusCode::OK, axum::Json(prediction)).into_response(),
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}

fn error_response(err: ProfileServiceError) -> Response {
    match err {
        ProfileServiceError::Intake(error) => {
            let payload = json!({
                "error": error.to_string(),
                "violations": error.violations,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        ProfileServiceError::Remote(RemotePredictorError::NotConfigured) => {
            let payload = json!({ "error": RemotePredictorError::NotConfigured.to_string() });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
        ProfileServiceError::Remote(error) => {
            tracing::error!(error = %error, "remote predictor failure");
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
    }
}
