use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::pipeline::PipelineError;
use super::service::{LeadScoringService, ScoreRequest};

/// Router exposing inline lead scoring.
pub fn leads_router(service: Arc<LeadScoringService>) -> Router {
    Router::new()
        .route("/api/v1/leads/score", post(score_handler))
        .with_state(service)
}

pub(crate) async fn score_handler(
    State(service): State<Arc<LeadScoringService>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response {
    match service.score(&request) {
        Ok(document) => (StatusCode::OK, axum::Json(document)).into_response(),
        Err(error @ PipelineError::MalformedInput { .. }) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}
