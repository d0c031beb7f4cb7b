//! LLM integration.
//!
//! A single async [`LlmProvider`] trait covers both the real OpenAI client
//! and the deterministic mock engine. [`create_provider`] wires them up from
//! configuration: in mock mode (or with no API key) the mock engine is used
//! directly; otherwise the real client is wrapped in a [`FallbackProvider`]
//! so any network failure, auth failure, or empty payload degrades to the
//! mock engine instead of surfacing to the caller.

pub mod fallback;
pub mod openai;

use std::sync::Arc;

use async_trait::async_trait;

pub use fallback::FallbackProvider;
pub use openai::OpenAiProvider;

use crate::config::{LlmBackend, LlmConfig};
use crate::engine::{EngineInput, MockEngine};
use crate::error::LlmError;

/// A completion backend: prompt string in, response text out.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Produce a completion for the prompt.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl LlmProvider for MockEngine {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        Ok(self.produce_response(&EngineInput::Prompt(prompt.to_string())))
    }
}

/// Create an LLM provider from configuration.
pub fn create_provider(config: &LlmConfig) -> Arc<dyn LlmProvider> {
    match (config.backend, config.api_key.as_ref()) {
        (LlmBackend::OpenAi, Some(api_key)) => {
            tracing::info!(model = %config.model, "Using OpenAI with mock fallback");
            let openai = OpenAiProvider::new(api_key.clone(), config.model.clone());
            Arc::new(FallbackProvider::new(Arc::new(openai)))
        }
        _ => {
            tracing::info!("Using mock LLM engine");
            Arc::new(MockEngine::new())
        }
    }
}
