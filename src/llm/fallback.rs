//! Fallback wrapper: real provider first, mock engine on any failure.
//!
//! The caller must never see a raw error from the intelligence layer; the
//! worst case is the mock engine's generic fallback sentence.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::engine::MockEngine;
use crate::error::LlmError;
use crate::llm::LlmProvider;

/// Tries the primary provider and degrades to the mock engine on error or
/// empty payload.
pub struct FallbackProvider {
    primary: Arc<dyn LlmProvider>,
    mock: MockEngine,
}

impl FallbackProvider {
    pub fn new(primary: Arc<dyn LlmProvider>) -> Self {
        Self {
            primary,
            mock: MockEngine::new(),
        }
    }
}

#[async_trait]
impl LlmProvider for FallbackProvider {
    fn name(&self) -> &str {
        "openai+fallback"
    }

    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        match self.primary.complete(prompt).await {
            Ok(text) if !text.trim().is_empty() => Ok(text),
            Ok(_) => {
                warn!(provider = self.primary.name(), "Empty completion; using mock engine");
                self.mock.complete(prompt).await
            }
            Err(e) => {
                warn!(provider = self.primary.name(), error = %e, "Provider failed; using mock engine");
                self.mock.complete(prompt).await
            }
        }
    }
}
