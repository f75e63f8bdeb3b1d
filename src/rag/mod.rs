//! Retrieval-augmented answering.
//!
//! - `store`: document store abstraction + SQLite implementation
//! - `prompt`: grounded / open prompt templates
//! - `engine`: mode selection and request orchestration

pub mod engine;
pub mod prompt;
pub mod store;

mod sqlite;

pub use engine::{AnswerEngine, AnswerMode, QueryAnswer, RagConfig};
pub use sqlite::SqliteDocStore;
pub use store::{DocStore, RetrievalHit, StoredDocument};
