//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::pipeline::{analyze_texts, analyze_uploads, TextDocument};
use crate::analysis::session::AnalysisSession;
use crate::documents::UploadedDocument;
use crate::errors::AppError;
use crate::screening::ranking::RankedCandidate;
use crate::screening::skills::SkillSet;
use crate::state::AppState;

const JOB_DESCRIPTION_FIELD: &str = "job_description";
const RESUMES_FIELD: &str = "resumes";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub job_description: String,
    pub resumes: Vec<TextDocument>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub job_skills: SkillSet,
    pub candidates: Vec<RankedCandidate>,
    pub warnings: Vec<String>,
}

impl From<AnalysisSession> for AnalyzeResponse {
    fn from(session: AnalysisSession) -> Self {
        Self {
            session_id: session.id,
            created_at: session.created_at,
            job_skills: session.report.job_skills,
            candidates: session.report.candidates,
            warnings: session.report.warnings,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart upload: one `job_description` file and one or more `resumes` files
/// (DOCX or PDF). Starts a new session, discarding the previous one.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut job_description: Option<UploadedDocument> = None;
    let mut resumes: Vec<UploadedDocument> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        if field_name != JOB_DESCRIPTION_FIELD && field_name != RESUMES_FIELD {
            continue;
        }

        let file_name = field.file_name().unwrap_or(field_name.as_str()).to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read '{file_name}': {e}")))?;
        let document = UploadedDocument::new(file_name, content_type.as_deref(), data);

        if field_name == JOB_DESCRIPTION_FIELD {
            job_description = Some(document);
        } else {
            resumes.push(document);
        }
    }

    let job_description = job_description
        .ok_or_else(|| AppError::Validation("job_description file is required".to_string()))?;
    if resumes.is_empty() {
        return Err(AppError::Validation(
            "at least one resumes file is required".to_string(),
        ));
    }

    info!("Analyzing {} resumes against '{}'", resumes.len(), job_description.name);

    let extractor = state.extractor.clone();
    let report = tokio::task::spawn_blocking(move || {
        analyze_uploads(&extractor, &job_description, &resumes)
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))?;

    let session = state.sessions.start(report).await;
    Ok(Json(session.into()))
}

/// POST /api/v1/analyze/text
///
/// Same as `/api/v1/analyze` for documents whose text is already extracted.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    if request.resumes.is_empty() {
        return Err(AppError::Validation(
            "at least one resume is required".to_string(),
        ));
    }

    let extractor = state.extractor.clone();
    let report = tokio::task::spawn_blocking(move || {
        analyze_texts(&extractor, &request.job_description, &request.resumes)
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))?;

    let session = state.sessions.start(report).await;
    Ok(Json(session.into()))
}

/// GET /api/v1/analysis
///
/// Ranking of the current session.
pub async fn handle_get_analysis(
    State(state): State<AppState>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let session = state
        .sessions
        .current()
        .await
        .ok_or_else(|| AppError::NotFound("No analysis has been run yet".to_string()))?;
    Ok(Json(session.into()))
}
