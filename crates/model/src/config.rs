//! Model configuration.
//!
//! `ModelConfig` is the record the resolver consumes; `ModelList` is the
//! TOML document holding several of them as `[[model]]` tables.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

/// Configuration for a single model entry.
///
/// Empty strings in the optional fields are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Alias used to look the entry up in a [`ModelList`]. Defaults to `model`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    /// Compound model string, `"<protocol>/<model-id>"` or `"<model-id>"`.
    pub model: String,
    /// API key for the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Endpoint override; the protocol default is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    /// Proxy URL for outgoing requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    /// Request field carrying the max-token limit (e.g. `max_completion_tokens`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens_field: Option<String>,
    /// Request timeout in seconds; `0` keeps the transport default.
    #[serde(default)]
    pub request_timeout: u64,
}

impl ModelConfig {
    /// Create a config with only the model string set.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the endpoint override.
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// The key this entry is registered under.
    pub fn name(&self) -> &str {
        self.model_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.model)
    }

    /// The request timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        (self.request_timeout > 0).then(|| Duration::from_secs(self.request_timeout))
    }

    pub(crate) fn key(&self) -> &str {
        non_empty(&self.api_key).unwrap_or_default()
    }

    pub(crate) fn base(&self) -> Option<&str> {
        non_empty(&self.api_base)
    }

    pub(crate) fn proxy(&self) -> Option<&str> {
        non_empty(&self.proxy)
    }

    pub(crate) fn max_tokens_field(&self) -> &str {
        non_empty(&self.max_tokens_field).unwrap_or_default()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// A list of model configurations, deserialized from `[[model]]` tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModelList {
    /// The configured models, in file order.
    #[serde(default, rename = "model")]
    pub models: Vec<ModelConfig>,
}

impl ModelList {
    /// Parse a model list from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(Into::into)
    }

    /// Read and parse a model list from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&text)
    }

    /// Find a model entry by name.
    pub fn get(&self, name: &str) -> Option<&ModelConfig> {
        self.models.iter().find(|m| m.name() == name)
    }
}
