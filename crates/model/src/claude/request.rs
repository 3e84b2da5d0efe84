//! Request body for the Anthropic Messages API.

use llm::{Message, Role};
use serde::Serialize;
use serde_json::{Value, json};

/// Used when the request carries no max-token limit; the API requires one.
const DEFAULT_MAX_TOKENS: usize = 4096;

/// The request body for the Anthropic Messages API.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The model identifier.
    pub model: String,
    /// Maximum tokens to generate.
    pub max_tokens: usize,
    /// System prompt (top-level, not in messages array).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// The messages array.
    pub messages: Vec<Value>,
    /// Temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl From<&llm::Request> for Request {
    fn from(req: &llm::Request) -> Self {
        let mut system: Option<String> = None;
        let mut messages = Vec::new();

        for msg in &req.messages {
            match msg.role {
                Role::System => match system.as_mut() {
                    Some(prompt) => {
                        prompt.push('\n');
                        prompt.push_str(&msg.content);
                    }
                    None => system = Some(msg.content.clone()),
                },
                Role::User | Role::Assistant => messages.push(content(msg)),
            }
        }

        Self {
            model: req.model.to_string(),
            max_tokens: req.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            system,
            messages,
            temperature: req.temperature,
        }
    }
}

fn content(msg: &Message) -> Value {
    let role = match msg.role {
        Role::Assistant => "assistant",
        _ => "user",
    };
    json!({ "role": role, "content": msg.content })
}
