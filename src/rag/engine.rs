//! Answer engine: mode selection and request orchestration.
//!
//! One request is one linear pass: normalize → greeting shortcut → mode
//! selection → optional retrieval → prompt composition → generation →
//! response normalization. Up to three external calls run in sequence
//! (embedding, store search, generation), never concurrently, with no retry.
//! The engine holds no per-request state.

use std::sync::Arc;

use crate::core::errors::ApiError;
use crate::embedding::EmbeddingProvider;
use crate::llm::{extract_text, LlmProvider};
use crate::query;
use crate::rag::prompt;
use crate::rag::store::{DocStore, RetrievalHit};

/// Fallback answer when the model output is empty or unparseable.
pub const UNAVAILABLE_REPLY: &str = "ขออภัย ตอนนี้ยังไม่สามารถให้คำตอบได้";

/// Tuning knobs for retrieval and mode selection.
#[derive(Debug, Clone)]
pub struct RagConfig {
    /// Minimum cosine similarity for a hit to enter the prompt context.
    pub similarity_threshold: f32,
    /// Maximum number of hits retained.
    pub top_k: usize,
    /// Queries at or below this many characters skip retrieval entirely.
    pub open_mode_max_chars: usize,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.28,
            top_k: 5,
            open_mode_max_chars: 2,
        }
    }
}

/// How an answer was produced. Internal and log-only; the HTTP response
/// carries just the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerMode {
    Greeting,
    Open,
    Grounded,
}

#[derive(Debug, Clone)]
pub struct QueryAnswer {
    pub text: String,
    pub mode: AnswerMode,
}

/// The retrieval-and-answer pipeline.
///
/// All collaborators are injected at construction so tests can substitute
/// mocks; there is no process-wide client handle.
pub struct AnswerEngine {
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn DocStore>,
    llm: Arc<dyn LlmProvider>,
    config: RagConfig,
}

impl AnswerEngine {
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn DocStore>,
        llm: Arc<dyn LlmProvider>,
        config: RagConfig,
    ) -> Self {
        Self {
            embedder,
            store,
            llm,
            config,
        }
    }

    /// Answers a raw question.
    ///
    /// Errors only on an empty question or an external-service failure;
    /// unrecognized model output degrades to the apology text instead.
    pub async fn answer(&self, raw: &str) -> Result<QueryAnswer, ApiError> {
        let question = query::normalize(raw);
        if question.is_empty() {
            return Err(ApiError::EmptyQuery);
        }

        if let Some(reply) = query::greeting_reply(&question) {
            tracing::info!(mode = "greeting", "answered without external calls");
            return Ok(QueryAnswer {
                text: reply.to_string(),
                mode: AnswerMode::Greeting,
            });
        }

        let hits = if question.chars().count() <= self.config.open_mode_max_chars {
            tracing::info!(
                chars = question.chars().count(),
                "query too short to embed, forcing open mode"
            );
            Vec::new()
        } else {
            self.retrieve(&question).await?
        };

        let (prompt, mode) = if hits.is_empty() {
            tracing::info!(mode = "open", "no usable context");
            (prompt::open_prompt(&question), AnswerMode::Open)
        } else {
            tracing::info!(
                mode = "grounded",
                hits = hits.len(),
                best = hits[0].similarity,
                "context selected"
            );
            let context = prompt::join_context(&hits);
            (
                prompt::grounded_prompt(&context, &question),
                AnswerMode::Grounded,
            )
        };

        let payload = self.llm.generate(&prompt).await?;
        let mut text = extract_text(&payload).trim().to_string();
        if text.is_empty() {
            tracing::warn!(provider = self.llm.name(), "empty model output");
            text = UNAVAILABLE_REPLY.to_string();
        }

        Ok(QueryAnswer { text, mode })
    }

    /// Embeds the question and fetches hits at or above the threshold.
    ///
    /// Embedding failure propagates; it is never silently treated as
    /// "no hits".
    async fn retrieve(&self, question: &str) -> Result<Vec<RetrievalHit>, ApiError> {
        let query_embedding = self.embedder.embed(question).await?;
        let mut hits = self
            .store
            .search(&query_embedding, self.config.top_k)
            .await?;
        hits.retain(|hit| hit.similarity >= self.config.similarity_threshold);
        Ok(hits)
    }
}
