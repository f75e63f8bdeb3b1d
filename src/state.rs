use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::AppConfig;
use crate::embedding::{EmbeddingProvider, HfEmbeddingProvider};
use crate::llm::{GeminiProvider, LlmProvider};
use crate::rag::{AnswerEngine, DocStore, SqliteDocStore};

/// Shared application state.
///
/// Providers are constructed once here and injected into the engine; no
/// module holds a hidden global client handle.
pub struct AppState {
    pub config: AppConfig,
    pub engine: AnswerEngine,
    pub store: Arc<dyn DocStore>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub async fn initialize(config: AppConfig) -> anyhow::Result<Arc<Self>> {
        let store: Arc<dyn DocStore> = Arc::new(
            SqliteDocStore::with_path(config.db_path.clone(), config.embedding_dimension).await?,
        );
        let embedder: Arc<dyn EmbeddingProvider> = Arc::new(HfEmbeddingProvider::new(
            config.hf_token.clone(),
            config.embedding_model.clone(),
            config.embedding_dimension,
        ));
        let llm: Arc<dyn LlmProvider> = Arc::new(GeminiProvider::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
        ));

        let engine = AnswerEngine::new(embedder, store.clone(), llm, config.rag());

        Ok(Arc::new(AppState {
            config,
            engine,
            store,
            started_at: Utc::now(),
        }))
    }
}
