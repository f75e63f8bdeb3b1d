//! Minimal RAG (Retrieval-Augmented Generation) query service.
//!
//! Accepts a natural-language question over HTTP, optionally retrieves
//! semantically similar document chunks from a vector store, and forwards a
//! composed prompt to a hosted LLM, returning the answer as JSON.

pub mod config;
pub mod core;
pub mod embedding;
pub mod llm;
pub mod logging;
pub mod query;
pub mod rag;
pub mod server;
pub mod state;
