//! OpenAI embedding client implementation.
//!
//! Wraps [`async_openai`] to provide [`EmbedderClient`] for the OpenAI
//! Embeddings API. All texts go out in a single request and failures are
//! returned to the caller as-is; the client's built-in retry is switched off.

use std::time::Duration;

use async_openai::{config::OpenAIConfig, types::CreateEmbeddingRequestArgs, Client};
use backoff::ExponentialBackoffBuilder;
use tracing::debug;

use crate::config::Config;
use crate::embedder::{Embedding, EmbedderClient};
use crate::errors::{EmbedError, Result};

/// Default embedding model name.
pub const DEFAULT_MODEL: &str = "text-embedding-3-small";

/// Return the embedding dimension for a given model name.
///
/// Falls back to 1536 (the `text-embedding-3-small` dimension) for
/// unrecognised models.
fn model_dim(model: &str) -> usize {
    match model {
        "text-embedding-3-large" => 3072,
        _ => 1536,
    }
}

/// OpenAI embedding client that implements [`EmbedderClient`].
pub struct OpenAiEmbedder {
    client: Client<OpenAIConfig>,
    model: String,
    dim: usize,
}

impl OpenAiEmbedder {
    /// Create a new embedder.
    ///
    /// # Arguments
    /// * `api_key` – OpenAI API key (`sk-…`).
    /// * `model`   – Embedding model name (e.g. [`DEFAULT_MODEL`]).
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_config(OpenAIConfig::new().with_api_key(api_key.into()), model)
    }

    /// Create a new embedder pointing at a custom API base URL.
    pub fn with_api_base(
        api_key: impl Into<String>,
        model: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.into())
            .with_api_base(api_base.into());
        Self::with_config(config, model)
    }

    /// Build an embedder from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Self {
        match &config.api_base {
            Some(base) => Self::with_api_base(&config.api_key, &config.model, base),
            None => Self::new(&config.api_key, &config.model),
        }
    }

    fn with_config(config: OpenAIConfig, model: impl Into<String>) -> Self {
        // Zero elapsed-time budget: the first failure is final.
        let no_retry = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();
        let model = model.into();
        let dim = model_dim(&model);
        Self {
            client: Client::with_config(config).with_backoff(no_retry),
            model,
            dim,
        }
    }
}

impl EmbedderClient for OpenAiEmbedder {
    async fn embed(&self, texts: &[&str]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Err(EmbedError::EmptyInput);
        }

        let input: Vec<String> = texts.iter().map(|s| (*s).to_owned()).collect();
        let request = CreateEmbeddingRequestArgs::default()
            .model(self.model.as_str())
            .input(input)
            .build()
            .map_err(|e| EmbedError::Service(e.to_string()))?;

        debug!(model = %self.model, count = texts.len(), "requesting embeddings");

        let response = self
            .client
            .embeddings()
            .create(request)
            .await
            .map_err(|e| EmbedError::Service(e.to_string()))?;

        let mut data = response.data;
        if data.len() != texts.len() {
            return Err(EmbedError::Service(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                data.len()
            )));
        }
        data.sort_by_key(|item| item.index);
        if let Some((pos, item)) = data
            .iter()
            .enumerate()
            .find(|(pos, item)| item.index as usize != *pos)
        {
            return Err(EmbedError::Service(format!(
                "embedding index {} at position {}; expected indices 0..{}",
                item.index,
                pos,
                texts.len()
            )));
        }

        let embeddings: Vec<Embedding> = data.into_iter().map(|item| item.embedding).collect();

        let width = embeddings[0].len();
        if embeddings.iter().any(|e| e.len() != width) {
            return Err(EmbedError::Service(
                "embedding API returned vectors of differing dimensions".to_string(),
            ));
        }

        debug!(count = embeddings.len(), dim = width, "embeddings received");
        Ok(embeddings)
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn dim(&self) -> usize {
        self.dim
    }
}
