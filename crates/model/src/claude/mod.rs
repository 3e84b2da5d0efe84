//! Claude (Anthropic) LLM provider.
//!
//! Implements the Anthropic Messages API, which differs from the OpenAI
//! chat completions format in message structure and auth headers.

use reqwest::{Client, header::HeaderMap};
pub use request::Request;

mod provider;
mod request;

/// The Anthropic API version header value.
const API_VERSION: &str = "2023-06-01";

/// The Claude LLM provider.
#[derive(Clone)]
pub struct Claude {
    /// The HTTP client.
    client: Client,
    /// Request headers (x-api-key, anthropic-version, content-type).
    headers: HeaderMap,
    /// API base URL; requests go to `{api_base}/messages`.
    api_base: String,
}

impl Claude {
    /// Create a provider targeting the Anthropic API.
    pub fn anthropic(client: Client, key: &str) -> anyhow::Result<Self> {
        Self::custom(client, key, crate::Protocol::Anthropic.default_api_base())
    }

    /// Create a provider targeting a custom Anthropic-compatible API base.
    pub fn custom(client: Client, key: &str, api_base: &str) -> anyhow::Result<Self> {
        use reqwest::header;
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/json".parse()?);
        if !key.is_empty() {
            headers.insert("x-api-key", key.parse()?);
        }
        headers.insert("anthropic-version", API_VERSION.parse()?);
        Ok(Self {
            client,
            headers,
            api_base: api_base.to_owned(),
        })
    }

    /// The Messages API URL under the API base.
    pub fn endpoint(&self) -> String {
        format!("{}/messages", self.api_base.trim_end_matches('/'))
    }

    /// Get the API base URL.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Get a reference to the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

impl std::fmt::Debug for Claude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Claude")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}
