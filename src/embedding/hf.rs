//! Hugging Face Inference API embedding client.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::EmbeddingProvider;
use crate::core::errors::ApiError;

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

#[derive(Clone)]
pub struct HfEmbeddingProvider {
    base_url: String,
    model: String,
    token: String,
    dimension: usize,
    client: Client,
}

impl HfEmbeddingProvider {
    pub fn new(token: String, model: String, dimension: usize) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), token, model, dimension)
    }

    pub fn with_base_url(base_url: String, token: String, model: String, dimension: usize) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            token,
            dimension,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for HfEmbeddingProvider {
    fn name(&self) -> &str {
        "huggingface"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, ApiError> {
        let url = format!(
            "{}/pipeline/feature-extraction/{}",
            self.base_url, self.model
        );

        let body = json!({
            "inputs": [text],
            "options": { "wait_for_model": true },
        });

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::embedding)?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(ApiError::Embedding(format!(
                "embedding request failed ({status}): {text}"
            )));
        }

        let payload: Value = res.json().await.map_err(ApiError::embedding)?;
        let vector = parse_embedding(&payload).ok_or_else(|| {
            ApiError::Embedding("unexpected embedding response shape".to_string())
        })?;

        if vector.len() != self.dimension {
            return Err(ApiError::Embedding(format!(
                "embedding dimension mismatch: got {}, expected {}",
                vector.len(),
                self.dimension
            )));
        }

        Ok(vector)
    }
}

/// Extracts the sentence vector from the API payload.
///
/// The feature-extraction pipeline returns either a flat vector or one vector
/// per input; for a single input we take the first.
fn parse_embedding(value: &Value) -> Option<Vec<f32>> {
    let items = value.as_array()?;
    if !items.is_empty() && items.iter().all(Value::is_number) {
        return Some(
            items
                .iter()
                .filter_map(|v| v.as_f64().map(|f| f as f32))
                .collect(),
        );
    }
    parse_embedding(items.first()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_vector() {
        let payload = json!([0.1, 0.2, 0.3]);
        assert_eq!(parse_embedding(&payload), Some(vec![0.1, 0.2, 0.3]));
    }

    #[test]
    fn parses_batched_vector() {
        let payload = json!([[0.5, -0.5]]);
        assert_eq!(parse_embedding(&payload), Some(vec![0.5, -0.5]));
    }

    #[test]
    fn rejects_non_numeric_payloads() {
        assert_eq!(parse_embedding(&json!({"error": "loading"})), None);
        assert_eq!(parse_embedding(&json!("oops")), None);
        assert_eq!(parse_embedding(&json!([])), None);
    }
}
