//! Model-string parsing and the protocol table.
//!
//! A model string is `"<protocol>/<model-id>"` or a bare `"<model-id>"`,
//! which implies [`DEFAULT_PROTOCOL`]. Both the separator and the default
//! are part of the persisted config surface.

use std::{fmt, str::FromStr};

/// Protocol assumed when the model string has no `/`.
pub const DEFAULT_PROTOCOL: &str = "openai";

/// Split a model string into `(protocol, model_id)`.
///
/// The input is trimmed, then split on the first `/` only. Never fails: an
/// empty input yields `("openai", "")`, and `"openai/"` yields an empty
/// model id which the resolver rejects.
pub fn extract_protocol(model: &str) -> (&str, &str) {
    let model = model.trim();
    model.split_once('/').unwrap_or((DEFAULT_PROTOCOL, model))
}

/// Default API base for a protocol tag, or `""` when the tag is unknown.
pub fn default_api_base(protocol: &str) -> &'static str {
    protocol
        .parse::<Protocol>()
        .map(|p| p.default_api_base())
        .unwrap_or_default()
}

/// How a protocol's provider is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// OpenAI-compatible chat completions over [`llm::HttpProvider`].
    Http,
    /// Anthropic Messages API over [`crate::Claude`].
    Anthropic,
}

/// Protocols the resolver can construct a provider for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    OpenAI,
    Anthropic,
    Gemini,
    Ollama,
    Vllm,
    Mistral,
    DeepSeek,
    Groq,
    OpenRouter,
}

// `position` is an exhaustive match, so a new variant needs an index; this
// check then fails to compile until `ALL` lists every index in order. A
// variant given an index past the end of `ALL` still slips through.
const _: () = {
    let mut i = 0;
    while i < Protocol::ALL.len() {
        assert!(Protocol::ALL[i].position() == i, "Protocol::ALL is out of order");
        i += 1;
    }
};

impl Protocol {
    /// Every supported protocol, in declaration order.
    pub const ALL: [Protocol; 9] = [
        Protocol::OpenAI,
        Protocol::Anthropic,
        Protocol::Gemini,
        Protocol::Ollama,
        Protocol::Vllm,
        Protocol::Mistral,
        Protocol::DeepSeek,
        Protocol::Groq,
        Protocol::OpenRouter,
    ];

    const fn position(self) -> usize {
        match self {
            Self::OpenAI => 0,
            Self::Anthropic => 1,
            Self::Gemini => 2,
            Self::Ollama => 3,
            Self::Vllm => 4,
            Self::Mistral => 5,
            Self::DeepSeek => 6,
            Self::Groq => 7,
            Self::OpenRouter => 8,
        }
    }

    /// The tag used as the model-string prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAI => "openai",
            Self::Anthropic => "anthropic",
            Self::Gemini => "gemini",
            Self::Ollama => "ollama",
            Self::Vllm => "vllm",
            Self::Mistral => "mistral",
            Self::DeepSeek => "deepseek",
            Self::Groq => "groq",
            Self::OpenRouter => "openrouter",
        }
    }

    /// API base used when the config has no `api_base`.
    pub fn default_api_base(&self) -> &'static str {
        match self {
            Self::OpenAI => "https://api.openai.com/v1",
            Self::Anthropic => "https://api.anthropic.com/v1",
            Self::Gemini => "https://generativelanguage.googleapis.com/v1beta",
            Self::Ollama => "http://localhost:11434/v1",
            Self::Vllm => "http://localhost:8000/v1",
            Self::Mistral => "https://api.mistral.ai/v1",
            Self::DeepSeek => "https://api.deepseek.com/v1",
            Self::Groq => "https://api.groq.com/openai/v1",
            Self::OpenRouter => "https://openrouter.ai/api/v1",
        }
    }

    /// Whether a config must carry an `api_key` or an `api_base`.
    ///
    /// Ollama serves unauthenticated on localhost, so its default endpoint
    /// alone is enough.
    pub fn requires_credential(&self) -> bool {
        !matches!(self, Self::Ollama)
    }

    /// The constructor family for this protocol.
    pub fn family(&self) -> Family {
        match self {
            Self::Anthropic => Family::Anthropic,
            Self::OpenAI
            | Self::Gemini
            | Self::Ollama
            | Self::Vllm
            | Self::Mistral
            | Self::DeepSeek
            | Self::Groq
            | Self::OpenRouter => Family::Http,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = UnknownProtocol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownProtocol(s.to_owned()))
    }
}

/// A protocol tag outside [`Protocol::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown protocol {0:?}")]
pub struct UnknownProtocol(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for protocol in Protocol::ALL {
            assert_eq!(protocol.as_str().parse::<Protocol>(), Ok(protocol));
        }
    }

    #[test]
    fn every_protocol_has_a_default_api_base() {
        for protocol in Protocol::ALL {
            assert!(
                !protocol.default_api_base().is_empty(),
                "{protocol} has no default api base"
            );
            assert!(protocol.default_api_base().starts_with("http"));
        }
    }

    #[test]
    fn all_lists_every_position_once() {
        for (i, protocol) in Protocol::ALL.into_iter().enumerate() {
            assert_eq!(protocol.position(), i);
        }
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert!("Gemini".parse::<Protocol>().is_err());
    }
}
