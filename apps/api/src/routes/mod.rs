pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::chat::handlers as chat;
use crate::screening::handlers as screening;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(screening::handle_root))
        .route("/health", get(health::health_handler))
        // Lexical scoring
        .route("/score", post(screening::handle_score))
        // Analysis API
        .route(
            "/api/v1/analyze",
            post(analysis::handle_analyze).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/analyze/text", post(analysis::handle_analyze_text))
        .route("/api/v1/analysis", get(analysis::handle_get_analysis))
        // Chat API
        .route("/api/v1/chat", post(chat::handle_chat))
        .route("/api/v1/chat/history", get(chat::handle_chat_history))
        .with_state(state)
}
