//! Provider resolution.
//!
//! Unified `Provider` enum with enum dispatch over the concrete backend
//! families. `resolve()` parses the model string, validates the config for
//! the selected `Protocol`, applies its default endpoint, and constructs
//! the matching variant.

use crate::{
    Claude, Error, ModelConfig, Result,
    protocol::{Family, Protocol, UnknownProtocol, extract_protocol},
};
use llm::{HttpProvider, LLM, Request, Response};

/// Unified LLM provider enum.
#[derive(Clone, Debug)]
pub enum Provider {
    /// OpenAI-compatible chat completions (OpenAI, Gemini, Ollama, vLLM, ...).
    Http(HttpProvider),
    /// Anthropic Messages API.
    Claude(Claude),
}

impl Provider {
    /// The API base the provider sends to.
    pub fn api_base(&self) -> &str {
        match self {
            Self::Http(p) => p.api_base(),
            Self::Claude(p) => p.api_base(),
        }
    }
}

impl LLM for Provider {
    async fn send(&self, request: &Request) -> anyhow::Result<Response> {
        match self {
            Self::Http(p) => p.send(request).await,
            Self::Claude(p) => p.send(request).await,
        }
    }
}

/// Resolve an optional config into a provider and the bare model id.
///
/// The model id is what callers put in [`Request::model`]. Fails with
/// [`Error::ConfigMissing`] when `config` is `None`.
pub fn resolve(config: Option<&ModelConfig>) -> Result<(Provider, String)> {
    let config = config.ok_or(Error::ConfigMissing)?;
    if config.model.trim().is_empty() {
        return Err(Error::ModelRequired);
    }

    let (tag, model_id) = extract_protocol(&config.model);
    let protocol: Protocol = tag.parse().map_err(|UnknownProtocol(protocol)| {
        Error::UnknownProtocol {
            protocol,
            model: config.model.clone(),
        }
    })?;
    if model_id.is_empty() {
        return Err(Error::EmptyModelId {
            model: config.model.clone(),
        });
    }

    let key = config.key();
    if protocol.requires_credential() && key.is_empty() && config.base().is_none() {
        return Err(Error::MissingCredentialOrEndpoint {
            protocol: protocol.to_string(),
        });
    }
    let api_base = config
        .base()
        .unwrap_or_else(|| protocol.default_api_base());

    let provider = construct(protocol, config, key, api_base).map_err(|source| Error::Client {
        protocol: protocol.to_string(),
        source,
    })?;

    tracing::debug!(%protocol, model_id, api_base, "resolved provider");
    Ok((provider, model_id.to_owned()))
}

/// Construct a `Provider` from a config that is known to be present.
pub fn build_provider(config: &ModelConfig) -> Result<(Provider, String)> {
    resolve(Some(config))
}

fn construct(
    protocol: Protocol,
    config: &ModelConfig,
    key: &str,
    api_base: &str,
) -> anyhow::Result<Provider> {
    let client = llm::client(config.proxy(), config.timeout())?;
    let provider = match protocol.family() {
        Family::Http => {
            let http = if key.is_empty() {
                HttpProvider::no_auth(client, api_base)
            } else {
                HttpProvider::bearer(client, key, api_base)?
            };
            Provider::Http(http.with_max_tokens_field(config.max_tokens_field()))
        }
        Family::Anthropic => Provider::Claude(Claude::custom(client, key, api_base)?),
    };
    Ok(provider)
}
