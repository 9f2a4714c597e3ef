use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::analysis::pipeline::AnalysisReport;
use crate::chat::ChatMessage;

/// Results of one analysis run plus the chat held about it.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub report: AnalysisReport,
    pub chat_history: Vec<ChatMessage>,
}

/// Holds the current analysis session. Starting a new analysis discards the
/// previous one, chat history included. Nothing is persisted.
#[derive(Clone, Default)]
pub struct SessionStore {
    current: Arc<RwLock<Option<AnalysisSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current session and returns a copy of the new one.
    pub async fn start(&self, report: AnalysisReport) -> AnalysisSession {
        let session = AnalysisSession {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            report,
            chat_history: Vec::new(),
        };
        *self.current.write().await = Some(session.clone());
        session
    }

    pub async fn current(&self) -> Option<AnalysisSession> {
        self.current.read().await.clone()
    }

    /// Appends messages to the session with `id`. Returns false when that session
    /// has since been replaced.
    pub async fn record_chat(&self, id: Uuid, messages: Vec<ChatMessage>) -> bool {
        let mut guard = self.current.write().await;
        match guard.as_mut() {
            Some(session) if session.id == id => {
                session.chat_history.extend(messages);
                true
            }
            _ => false,
        }
    }
}
