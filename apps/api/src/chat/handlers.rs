use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::{answer_question, ChatMessage, ChatRole};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Defaults to the current session.
    pub session_id: Option<Uuid>,
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub session_id: Uuid,
    pub answer: String,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let responder = state.chat.clone().ok_or_else(|| {
        AppError::ChatUnavailable("Gemini API key is not configured".to_string())
    })?;

    let question = request.question.trim();
    if question.is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }

    let session = state
        .sessions
        .current()
        .await
        .filter(|s| request.session_id.map_or(true, |id| id == s.id))
        .ok_or_else(|| AppError::NotFound("No matching analysis session".to_string()))?;

    let answer = answer_question(responder.as_ref(), question, &session.report.qa_context).await;

    let recorded = state
        .sessions
        .record_chat(
            session.id,
            vec![
                ChatMessage::new(ChatRole::User, question),
                ChatMessage::new(ChatRole::Assistant, answer.clone()),
            ],
        )
        .await;
    if !recorded {
        tracing::warn!("Session {} replaced during chat; exchange not recorded", session.id);
    }

    Ok(Json(ChatResponse {
        session_id: session.id,
        answer,
    }))
}

/// GET /api/v1/chat/history
pub async fn handle_chat_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChatMessage>>, AppError> {
    let session = state
        .sessions
        .current()
        .await
        .ok_or_else(|| AppError::NotFound("No analysis has been run yet".to_string()))?;
    Ok(Json(session.chat_history))
}
