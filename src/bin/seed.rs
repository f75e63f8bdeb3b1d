//! Sample-document loader.
//!
//! Embeds a small fixed document set via the hosted embedding service and
//! inserts it into the store. Run once before starting the server:
//! `cargo run --bin seed`

use std::sync::Arc;

use ragserve::config::AppConfig;
use ragserve::embedding::{EmbeddingProvider, HfEmbeddingProvider};
use ragserve::logging;
use ragserve::rag::{DocStore, SqliteDocStore, StoredDocument};

const SAMPLE_DOCUMENTS: [(&str, &str); 3] = [
    ("Python เป็นภาษาโปรแกรมที่ได้รับความนิยม", "wiki"),
    ("Django เป็น web framework ที่เขียนด้วย Python", "wiki"),
    ("Flutter ใช้พัฒนา mobile app แบบ cross-platform", "wiki"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    logging::init(None);

    let store: Arc<dyn DocStore> = Arc::new(
        SqliteDocStore::with_path(config.db_path.clone(), config.embedding_dimension).await?,
    );
    let embedder = HfEmbeddingProvider::new(
        config.hf_token.clone(),
        config.embedding_model.clone(),
        config.embedding_dimension,
    );

    for (text, source) in SAMPLE_DOCUMENTS {
        let embedding = embedder.embed(text).await?;
        let document = StoredDocument {
            doc_id: uuid::Uuid::new_v4().to_string(),
            text: text.to_string(),
            source: source.to_string(),
        };
        store.insert(document, embedding).await?;
        tracing::info!(source, "seeded: {}", text);
    }

    let total = store.count().await?;
    tracing::info!("seeding complete, {} documents stored", total);

    Ok(())
}
