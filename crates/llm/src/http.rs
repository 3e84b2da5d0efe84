//! Shared HTTP transport for OpenAI-compatible LLM providers.
//!
//! `HttpProvider` wraps a `reqwest::Client` with pre-configured headers, the
//! API base URL, and the name of the request field that carries the
//! max-token limit. Used for every protocol that speaks the chat completions
//! dialect (OpenAI, Gemini, Ollama, vLLM, Mistral, ...).

use crate::{LLM, Request, Response};
use anyhow::{Result, bail};
use compact_str::CompactString;
use reqwest::{
    Client, Method, Proxy,
    header::{self, HeaderMap, HeaderValue},
};
use serde_json::{Value, json};
use std::time::Duration;

/// Request field used for the max-token limit when none is configured.
pub const DEFAULT_MAX_TOKENS_FIELD: &str = "max_tokens";

/// Build an HTTP client with an optional proxy and request timeout.
///
/// Building the client does not touch the network.
pub fn client(proxy: Option<&str>, timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(proxy) = proxy.filter(|p| !p.is_empty()) {
        builder = builder.proxy(Proxy::all(proxy)?);
    }
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Shared HTTP transport for OpenAI-compatible providers.
#[derive(Clone)]
pub struct HttpProvider {
    client: Client,
    headers: HeaderMap,
    api_base: String,
    max_tokens_field: CompactString,
}

impl HttpProvider {
    /// Create a provider with Bearer token authentication.
    pub fn bearer(client: Client, key: &str, api_base: &str) -> Result<Self> {
        let mut provider = Self::no_auth(client, api_base);
        provider
            .headers
            .insert(header::AUTHORIZATION, format!("Bearer {key}").parse()?);
        Ok(provider)
    }

    /// Create a provider without authentication (e.g. Ollama).
    pub fn no_auth(client: Client, api_base: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        Self {
            client,
            headers,
            api_base: api_base.to_owned(),
            max_tokens_field: CompactString::const_new(DEFAULT_MAX_TOKENS_FIELD),
        }
    }

    /// Carry the max-token limit under `field` instead of `max_tokens`.
    ///
    /// An empty field name keeps the default.
    pub fn with_max_tokens_field(mut self, field: &str) -> Self {
        if !field.is_empty() {
            self.max_tokens_field = field.into();
        }
        self
    }

    /// Build the JSON body for a request.
    pub fn body(&self, request: &Request) -> Value {
        let mut body = json!({
            "model": request.model,
            "messages": request.messages,
        });
        if let Some(tokens) = request.max_tokens {
            body[self.max_tokens_field.as_str()] = json!(tokens);
        }
        if let Some(temperature) = request.temperature {
            body["temperature"] = json!(temperature);
        }
        body
    }

    /// The chat completions URL under the API base.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }

    /// Get the API base URL.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Get the name of the max-token request field.
    pub fn max_tokens_field(&self) -> &str {
        &self.max_tokens_field
    }

    /// Get a reference to the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

impl std::fmt::Debug for HttpProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpProvider")
            .field("api_base", &self.api_base)
            .field("max_tokens_field", &self.max_tokens_field)
            .finish_non_exhaustive()
    }
}

impl LLM for HttpProvider {
    async fn send(&self, request: &Request) -> Result<Response> {
        let body = self.body(request);
        let endpoint = self.endpoint();
        tracing::trace!("request: {body}");
        let response = self
            .client
            .request(Method::POST, &endpoint)
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            bail!("{endpoint} returned {status}: {text}");
        }

        serde_json::from_str(&text).map_err(Into::into)
    }
}
