//! Error types for text-embedder.

/// Alias for Results returning [`EmbedError`].
pub type Result<T> = std::result::Result<T, EmbedError>;

/// Top-level error type for text-embedder.
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    /// Missing credential or invalid setting. Raised before any network call.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The embedding API call failed or returned an unusable response.
    #[error("Embedding service error: {0}")]
    Service(String),

    #[error("No texts to embed")]
    EmptyInput,

    #[error("IO error on '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EmbedError {
    /// Create an IO error with a path context.
    pub(crate) fn io(path: impl std::fmt::Display, source: std::io::Error) -> Self {
        EmbedError::Io {
            path: path.to_string(),
            source,
        }
    }
}
