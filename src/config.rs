//! Configuration types, read once from the environment at startup.
//!
//! The LLM client is constructed from this config and passed in explicitly;
//! no lazily built module-level client keyed by credentials, so the engine
//! stays testable in isolation.

use secrecy::SecretString;

use crate::error::ConfigError;

/// Which completion backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmBackend {
    /// Real OpenAI chat-completions client with mock fallback.
    OpenAi,
    /// Deterministic mock engine only.
    Mock,
}

/// Configuration for creating an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub backend: LlmBackend,
    pub api_key: Option<SecretString>,
    pub model: String,
}

impl LlmConfig {
    /// Read LLM settings from the environment.
    ///
    /// Mock mode is selected when `USE_MOCK_LLM=true` or when no
    /// `OPENAI_API_KEY` is set, so a fresh checkout works with no credentials.
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY").ok().map(SecretString::from);
        let use_mock = std::env::var("USE_MOCK_LLM")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let backend = if use_mock || api_key.is_none() {
            LlmBackend::Mock
        } else {
            LlmBackend::OpenAi
        };
        let model =
            std::env::var("MAILPILOT_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());
        Self {
            backend,
            api_key,
            model,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port for the REST API.
    pub port: u16,
    /// Path of the libSQL database file.
    pub db_path: String,
    /// LLM provider settings.
    pub llm: LlmConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("MAILPILOT_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "MAILPILOT_PORT".into(),
                message: format!("not a valid port number: {raw}"),
            })?,
            Err(_) => 3001,
        };
        let db_path = std::env::var("MAILPILOT_DB_PATH")
            .unwrap_or_else(|_| "./data/mailpilot.db".to_string());
        Ok(Self {
            port,
            db_path,
            llm: LlmConfig::from_env(),
        })
    }
}
