use anyhow::{Context, Result};

use crate::screening::skills::SkillVocabulary;

/// Value shipped in example secret files; treated as "not configured".
const API_KEY_PLACEHOLDER: &str = "YOUR_TOKEN_HERE";

/// Application configuration loaded from environment variables.
/// Fails at startup only on malformed values; a missing chat key disables chat.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub skill_vocabulary: SkillVocabulary,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: parse_api_key(std::env::var("GEMINI_API_KEY").ok()),
            skill_vocabulary: std::env::var("SKILL_VOCABULARY")
                .ok()
                .map(|raw| parse_vocabulary(&raw))
                .unwrap_or_default(),
            max_upload_bytes: parse_upload_limit(
                &std::env::var("MAX_UPLOAD_MB").unwrap_or_else(|_| "20".to_string()),
            )?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Megabytes to bytes, rejecting values that do not fit in `usize`.
fn parse_upload_limit(raw: &str) -> Result<usize> {
    raw.trim()
        .parse::<usize>()
        .context("MAX_UPLOAD_MB must be a whole number of megabytes")?
        .checked_mul(1024 * 1024)
        .context("MAX_UPLOAD_MB is too large")
}

fn parse_api_key(raw: Option<String>) -> Option<String> {
    raw.map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty() && k != API_KEY_PLACEHOLDER)
}

/// Comma-separated skill phrases. Falls back to the built-in list when nothing usable is given.
fn parse_vocabulary(raw: &str) -> SkillVocabulary {
    let vocabulary = SkillVocabulary::new(raw.split(','));
    if vocabulary.is_empty() {
        SkillVocabulary::default()
    } else {
        vocabulary
    }
}
