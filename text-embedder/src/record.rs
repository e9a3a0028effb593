//! EmbeddingRecord — one input text paired with its position and vector.

use serde::{Deserialize, Serialize};

use crate::embedder::Embedding;
use crate::errors::{EmbedError, Result};

/// The persisted tuple of identifier, source text, and embedding vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingRecord {
    /// Zero-based position of `text` in the input sequence.
    pub id: usize,
    pub text: String,
    pub vector: Embedding,
}

/// Zip `texts` with `vectors` into records, assigning sequential ids.
///
/// Both sequences must have the same length; the output keeps input order.
pub fn build_records<S: AsRef<str>>(
    texts: &[S],
    vectors: Vec<Embedding>,
) -> Result<Vec<EmbeddingRecord>> {
    if texts.len() != vectors.len() {
        return Err(EmbedError::Service(format!(
            "expected {} vectors, got {}",
            texts.len(),
            vectors.len()
        )));
    }

    Ok(texts
        .iter()
        .zip(vectors)
        .enumerate()
        .map(|(id, (text, vector))| EmbeddingRecord {
            id,
            text: text.as_ref().to_owned(),
            vector,
        })
        .collect())
}
