//! Provider-independent chat request.

use crate::Message;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// A chat completion request.
///
/// Each transport turns this into its own wire body; the model id is the
/// bare identifier returned by the resolver, without the protocol prefix.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Request {
    /// The model identifier.
    pub model: CompactString,

    /// The conversation so far.
    pub messages: Vec<Message>,

    /// The number of max tokens to generate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>,

    /// Sampling temperature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl Request {
    /// Create a new request for the given model.
    pub fn new(model: impl Into<CompactString>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Append a message.
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Replace the messages.
    pub fn messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = messages;
        self
    }

    /// Set the max token limit.
    pub fn max_tokens(mut self, tokens: usize) -> Self {
        self.max_tokens = Some(tokens);
        self
    }

    /// Set the sampling temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}
