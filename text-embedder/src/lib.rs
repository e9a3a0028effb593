//! # text-embedder
//!
//! Sends text strings to a remote embedding API and persists the returned
//! vectors as a JSON array of `{id, text, vector}` records.
//!
//! - [`embedder::EmbedderClient`]: the `embed` / `save` capability pair
//! - [`embedder::openai::OpenAiEmbedder`]: OpenAI Embeddings API adapter
//! - [`store`]: JSON read/write of [`EmbeddingRecord`] lists

pub mod config;
pub mod embedder;
pub mod errors;
pub mod record;
pub mod store;

pub use config::Config;
pub use embedder::{Embedding, EmbedderClient};
pub use errors::{EmbedError, Result};
pub use record::EmbeddingRecord;
