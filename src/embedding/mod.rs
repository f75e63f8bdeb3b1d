//! Embedding service abstraction.
//!
//! The query embedding is computed by a hosted service; `EmbeddingProvider`
//! is the seam the answer engine depends on so tests can substitute mocks.

mod hf;

pub use hf::HfEmbeddingProvider;

use async_trait::async_trait;

use crate::core::errors::ApiError;

#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Provider name (e.g. "huggingface").
    fn name(&self) -> &str;

    /// Output vector dimension. Must match the store's configured dimension.
    fn dimension(&self) -> usize;

    /// Embed a single text into a fixed-dimension vector.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ApiError>;
}
