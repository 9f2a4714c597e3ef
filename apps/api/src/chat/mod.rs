//! Conversational answering over the documents of the current analysis session.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::llm_client::LlmError;

pub mod handlers;
pub mod prompts;

/// Returned to the user whenever the chat backend fails.
pub const APOLOGY: &str = "Sorry, I encountered an error while trying to generate a response.";

/// Question + document context in, answer text out.
#[async_trait]
pub trait ChatResponder: Send + Sync {
    async fn respond(&self, question: &str, context: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// Asks the responder and never fails: backend errors become `APOLOGY`.
pub async fn answer_question(responder: &dyn ChatResponder, question: &str, context: &str) -> String {
    match responder.respond(question, context).await {
        Ok(answer) => {
            info!("Chat answered ({} chars)", answer.len());
            answer
        }
        Err(e) => {
            error!("Chat backend error: {e}");
            APOLOGY.to_string()
        }
    }
}
