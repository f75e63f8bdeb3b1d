//! DocStore trait, the abstract interface for the vector-indexed document store.
//!
//! The primary implementation is `SqliteDocStore` in the `sqlite` module.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::errors::ApiError;

/// A retrievable document chunk.
///
/// Created by the offline seeding process; immutable once stored. The answer
/// pipeline only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredDocument {
    /// Opaque identifier.
    pub doc_id: String,
    /// The raw text content.
    pub text: String,
    /// Provenance label (e.g. "wiki").
    pub source: String,
}

/// A (document, similarity) pair produced per query.
///
/// Similarity is cosine-derived, so the score is in [-1, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalHit {
    pub document: StoredDocument,
    pub similarity: f32,
}

#[async_trait]
pub trait DocStore: Send + Sync {
    /// Insert a document with its embedding vector.
    async fn insert(&self, document: StoredDocument, embedding: Vec<f32>) -> Result<(), ApiError>;

    /// Candidates ordered by descending cosine similarity, capped at `limit`.
    ///
    /// Threshold filtering happens in the engine, not here.
    async fn search(
        &self,
        query_embedding: &[f32],
        limit: usize,
    ) -> Result<Vec<RetrievalHit>, ApiError>;

    /// Total stored document count.
    async fn count(&self) -> Result<usize, ApiError>;
}
