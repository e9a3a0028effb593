use crate::embedder::openai::DEFAULT_MODEL;
use crate::errors::{EmbedError, Result};

/// Embedding client configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// OpenAI secret key. Env: `OPENAI_API_KEY`, required.
    pub api_key: String,
    /// Embedding model name. Env: `EMBEDDING_MODEL`, default `text-embedding-3-small`.
    pub model: String,
    /// Alternate OpenAI-compatible endpoint. Env: `OPENAI_API_BASE`, optional.
    pub api_base: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`EmbedError::Configuration`] if `OPENAI_API_KEY` is unset or blank.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = non_blank(lookup("OPENAI_API_KEY"))
            .ok_or_else(|| EmbedError::Configuration("OPENAI_API_KEY is not set".into()))?;

        let model = non_blank(lookup("EMBEDDING_MODEL")).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_base = non_blank(lookup("OPENAI_API_BASE"));

        Ok(Config {
            api_key,
            model,
            api_base,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
