//! Hosted LLM integration.
//!
//! `LlmProvider` is the generation seam; `response` normalizes the
//! heterogeneous payload shapes hosted clients return into plain text.

pub mod provider;
pub mod response;

mod gemini;

pub use gemini::GeminiProvider;
pub use provider::LlmProvider;
pub use response::extract_text;
