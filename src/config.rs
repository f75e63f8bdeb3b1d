//! Environment-driven configuration.
//!
//! All knobs the answer pipeline depends on are explicit fields here; nothing
//! reads the environment after startup. A `.env` file is honored when present.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::rag::RagConfig;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_EMBEDDING_MODEL: &str = "sentence-transformers/all-MiniLM-L6-v2";
pub const DEFAULT_EMBEDDING_DIMENSION: usize = 384;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub hf_token: String,
    pub embedding_model: String,
    pub embedding_dimension: usize,
    pub db_path: PathBuf,
    pub log_dir: Option<PathBuf>,
    pub similarity_threshold: f32,
    pub top_k: usize,
    /// Surface raw failure detail in 500 bodies. Off by default; intended
    /// for development only.
    pub verbose_errors: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let gemini_api_key = require_env("GEMINI_API_KEY")?;
        let hf_token = require_env("HUGGING_FACE_HUB_API_TOKEN")?;

        let port: u16 = env_or("PORT", 8000);
        let bind_addr = format!("127.0.0.1:{port}");

        Ok(Self {
            bind_addr,
            gemini_api_key,
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            hf_token,
            embedding_model: env::var("EMBEDDING_MODEL")
                .unwrap_or_else(|_| DEFAULT_EMBEDDING_MODEL.to_string()),
            embedding_dimension: env_or("EMBEDDING_DIMENSION", DEFAULT_EMBEDDING_DIMENSION),
            db_path: env::var("RAG_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("rag.db")),
            log_dir: env::var("RAG_LOG_DIR").ok().map(PathBuf::from),
            similarity_threshold: env_or("RAG_SIMILARITY_THRESHOLD", 0.28),
            top_k: env_or("RAG_TOP_K", 5),
            verbose_errors: env_or("RAG_VERBOSE_ERRORS", false),
        })
    }

    pub fn rag(&self) -> RagConfig {
        RagConfig {
            similarity_threshold: self.similarity_threshold,
            top_k: self.top_k,
            ..RagConfig::default()
        }
    }
}

fn require_env(key: &str) -> anyhow::Result<String> {
    let value = env::var(key).unwrap_or_default();
    if value.trim().is_empty() {
        anyhow::bail!("{key} ไม่ถูกตั้งค่าใน .env");
    }
    Ok(value)
}

fn env_or<T: FromStr + Copy>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            bind_addr: "127.0.0.1:8000".to_string(),
            gemini_api_key: "key".to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            hf_token: "token".to_string(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            embedding_dimension: DEFAULT_EMBEDDING_DIMENSION,
            db_path: PathBuf::from("rag.db"),
            log_dir: None,
            similarity_threshold: 0.4,
            top_k: 3,
            verbose_errors: false,
        }
    }

    #[test]
    fn rag_config_carries_threshold_and_top_k() {
        let rag = test_config().rag();
        assert_eq!(rag.similarity_threshold, 0.4);
        assert_eq!(rag.top_k, 3);
        assert_eq!(rag.open_mode_max_chars, 2);
    }
}
