//! Embedder client abstraction.
//!
//! Provides a trait for generating vector embeddings from text and saving
//! them as [`EmbeddingRecord`]s.
//!
//! # Implementations
//! - [`openai::OpenAiEmbedder`] — OpenAI Embeddings API via `async-openai`.

pub mod openai;

use std::path::Path;

use tracing::info;

use crate::errors::Result;
use crate::record::{build_records, EmbeddingRecord};
use crate::store;

/// A vector embedding (f32 components).
pub type Embedding = Vec<f32>;

/// Trait for text-to-vector embedding clients.
#[allow(async_fn_in_trait)]
pub trait EmbedderClient: Send + Sync {
    /// Embed every text in one service call.
    ///
    /// Returns one vector per input, in input order.
    async fn embed(&self, texts: &[&str]) -> Result<Vec<Embedding>>;

    /// Embed `texts` and write them to `destination` as a JSON array of
    /// [`EmbeddingRecord`]s, overwriting any existing file.
    ///
    /// Nothing is written if [`embed`](Self::embed) fails. Returns the number
    /// of records written.
    async fn save(&self, texts: &[&str], destination: &Path) -> Result<usize> {
        let vectors = self.embed(texts).await?;
        let records: Vec<EmbeddingRecord> = build_records(texts, vectors)?;
        store::write_records(destination, &records).await?;
        info!(path = %destination.display(), records = records.len(), "embeddings saved");
        Ok(records.len())
    }

    /// Name of the model embeddings are requested from.
    fn model(&self) -> &str;

    /// Returns the dimensionality of embeddings produced by this client.
    fn dim(&self) -> usize;
}
