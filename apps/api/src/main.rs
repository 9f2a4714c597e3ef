mod analysis;
mod chat;
mod config;
mod documents;
mod errors;
mod llm_client;
mod nlp;
mod routes;
mod screening;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::analysis::session::SessionStore;
use crate::chat::ChatResponder;
use crate::config::Config;
use crate::llm_client::LlmClient;
#[cfg(feature = "bert-ner")]
use crate::nlp::BertRecognizer;
use crate::nlp::EntityRecognizer;
#[cfg(not(feature = "bert-ner"))]
use crate::nlp::RuleBasedRecognizer;
use crate::routes::build_router;
use crate::screening::lexical::LexicalOverlapScorer;
use crate::screening::profile::ProfileExtractor;
use crate::screening::skills::SkillMatcher;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Recruiter API v{}", env!("CARGO_PKG_VERSION"));

    // Skill vocabulary is fixed for the life of the process
    let matcher = Arc::new(SkillMatcher::new(&config.skill_vocabulary));
    info!("Skill vocabulary loaded ({} phrases)", config.skill_vocabulary.len());

    // Model download and load block, so keep them off the async workers
    #[cfg(feature = "bert-ner")]
    let recognizer: Arc<dyn EntityRecognizer> =
        Arc::new(tokio::task::spawn_blocking(BertRecognizer::new).await??);
    #[cfg(not(feature = "bert-ner"))]
    let recognizer: Arc<dyn EntityRecognizer> = Arc::new(RuleBasedRecognizer::new()?);
    info!("Entity recognizer ready");
    let extractor = Arc::new(ProfileExtractor::new(matcher, recognizer));

    // Chat is optional; ranking works without an API key
    let chat: Option<Arc<dyn ChatResponder>> = match &config.gemini_api_key {
        Some(key) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(LlmClient::new(key.clone())))
        }
        None => {
            warn!("GEMINI_API_KEY is not configured; chat is disabled");
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        extractor,
        text_scorer: Arc::new(LexicalOverlapScorer),
        chat,
        sessions: SessionStore::new(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
