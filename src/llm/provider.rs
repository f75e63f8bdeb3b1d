use async_trait::async_trait;
use serde_json::Value;

use crate::core::errors::ApiError;

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// return the provider name (e.g. "gemini")
    fn name(&self) -> &str;

    /// single-shot text generation for a composed prompt
    ///
    /// Returns the raw response payload; shape differs per provider and is
    /// normalized by `response::extract_text` at the call site.
    async fn generate(&self, prompt: &str) -> Result<Value, ApiError>;
}
