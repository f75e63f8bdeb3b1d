//! SQLite-backed document store.
//!
//! In-process vector store using SQLite for document rows and brute-force
//! cosine similarity for search. Embeddings are stored as little-endian f32
//! blobs; the configured dimension is enforced at insert time so a query
//! vector and the stored vectors can never silently disagree.

use std::path::PathBuf;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Row, SqlitePool};

use super::store::{DocStore, RetrievalHit, StoredDocument};
use crate::core::errors::ApiError;

pub struct SqliteDocStore {
    pool: SqlitePool,
    dimension: usize,
}

impl SqliteDocStore {
    pub async fn with_path(db_path: PathBuf, dimension: usize) -> Result<Self, ApiError> {
        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(4)
            .connect_with(options)
            .await
            .map_err(ApiError::retrieval)?;

        let store = Self { pool, dimension };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), ApiError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS documents (
                doc_id TEXT PRIMARY KEY,
                text TEXT NOT NULL,
                source TEXT NOT NULL DEFAULT '',
                embedding BLOB NOT NULL,
                created_at TEXT NOT NULL DEFAULT (STRFTIME('%Y-%m-%dT%H:%M:%fZ', 'now'))
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(ApiError::retrieval)?;

        Ok(())
    }

    fn serialize_embedding(embedding: &[f32]) -> Vec<u8> {
        embedding.iter().flat_map(|f| f.to_le_bytes()).collect()
    }

    fn deserialize_embedding(bytes: &[u8]) -> Vec<f32> {
        bytes
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect()
    }

    fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
        if a.len() != b.len() || a.is_empty() {
            return 0.0;
        }

        let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
        let denom = norm_a * norm_b;

        if denom <= f32::EPSILON {
            0.0
        } else {
            dot / denom
        }
    }

    fn row_to_document(row: &sqlx::sqlite::SqliteRow) -> StoredDocument {
        StoredDocument {
            doc_id: row.get("doc_id"),
            text: row.get("text"),
            source: row.get("source"),
        }
    }
}

#[async_trait]
impl DocStore for SqliteDocStore {
    async fn insert(&self, document: StoredDocument, embedding: Vec<f32>) -> Result<(), ApiError> {
        if embedding.len() != self.dimension {
            return Err(ApiError::Retrieval(format!(
                "embedding dimension mismatch: got {}, expected {}",
                embedding.len(),
                self.dimension
            )));
        }

        let blob = Self::serialize_embedding(&embedding);

        sqlx::query(
            "INSERT OR REPLACE INTO documents (doc_id, text, source, embedding)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&document.doc_id)
        .bind(&document.text)
        .bind(&document.source)
        .bind(&blob)
        .execute(&self.pool)
        .await
        .map_err(ApiError::retrieval)?;

        Ok(())
    }

    async fn search(
        &self,
        query_embedding: &[f32],
        limit: usize,
    ) -> Result<Vec<RetrievalHit>, ApiError> {
        let rows = sqlx::query("SELECT doc_id, text, source, embedding FROM documents")
            .fetch_all(&self.pool)
            .await
            .map_err(ApiError::retrieval)?;

        let mut scored: Vec<RetrievalHit> = rows
            .iter()
            .filter_map(|row| {
                let embedding_bytes: Vec<u8> = row.get("embedding");
                if embedding_bytes.is_empty() {
                    return None;
                }
                let stored = Self::deserialize_embedding(&embedding_bytes);
                let similarity = Self::cosine_similarity(query_embedding, &stored);

                Some(RetrievalHit {
                    document: Self::row_to_document(row),
                    similarity,
                })
            })
            .collect();

        scored.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(limit);

        Ok(scored)
    }

    async fn count(&self) -> Result<usize, ApiError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents")
            .fetch_one(&self.pool)
            .await
            .map_err(ApiError::retrieval)?;

        Ok(count as usize)
    }
}
