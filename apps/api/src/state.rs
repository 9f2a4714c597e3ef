use std::sync::Arc;

use crate::analysis::session::SessionStore;
use crate::chat::ChatResponder;
use crate::config::Config;
use crate::screening::lexical::TextScorer;
use crate::screening::profile::ProfileExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Skill matcher + entity recognizer, built once at startup.
    pub extractor: Arc<ProfileExtractor>,
    /// Pluggable raw-text scorer behind `/score`. Default: LexicalOverlapScorer.
    pub text_scorer: Arc<dyn TextScorer>,
    /// `None` when no Gemini API key is configured; ranking works regardless.
    pub chat: Option<Arc<dyn ChatResponder>>,
    pub sessions: SessionStore,
}
