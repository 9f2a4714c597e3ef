//! Axum route handlers for the lexical scoring endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub resume: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    /// Percentage formatted to two decimal places, e.g. "33.33".
    pub match_score_percent: String,
}

/// GET /
pub async fn handle_root() -> Json<Value> {
    Json(json!({ "message": "AI Recruiter API is running." }))
}

/// POST /score
///
/// Word-overlap score of a raw resume against a raw job description.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Json<ScoreResponse> {
    let score = state
        .text_scorer
        .score(&request.resume, &request.job_description);
    debug!("{} score: {score:.2}", state.text_scorer.backend());

    Json(ScoreResponse {
        match_score_percent: format!("{score:.2}"),
    })
}
