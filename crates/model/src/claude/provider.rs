//! LLM trait implementation for the Claude (Anthropic) provider.

use super::{Claude, Request};
use anyhow::{Result, bail};
use llm::{Choice, CompletionMeta, Delta, FinishReason, LLM, Response, Role, Usage};
use reqwest::Method;
use serde::Deserialize;

/// Raw Anthropic non-streaming response.
#[derive(Deserialize)]
struct AnthropicResponse {
    id: String,
    model: String,
    content: Vec<ContentBlock>,
    stop_reason: Option<String>,
    usage: AnthropicUsage,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct AnthropicUsage {
    input_tokens: u32,
    output_tokens: u32,
}

impl LLM for Claude {
    async fn send(&self, request: &llm::Request) -> Result<Response> {
        let body = Request::from(request);
        let endpoint = self.endpoint();
        tracing::trace!("request: {}", serde_json::to_string(&body)?);
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

        tracing::trace!("response: {text}");
        let raw: AnthropicResponse = serde_json::from_str(&text)?;
        Ok(to_response(raw))
    }
}

/// Convert an Anthropic response to the unified `Response` format.
fn to_response(raw: AnthropicResponse) -> Response {
    let mut content = String::new();
    for block in raw.content {
        if let ContentBlock::Text { text } = block {
            if !content.is_empty() {
                content.push('\n');
            }
            content.push_str(&text);
        }
    }

    let finish_reason = raw.stop_reason.as_deref().map(|r| match r {
        "end_turn" | "stop_sequence" => FinishReason::Stop,
        "max_tokens" => FinishReason::Length,
        "tool_use" => FinishReason::ToolCalls,
        _ => FinishReason::Other,
    });

    Response {
        meta: CompletionMeta {
            id: raw.id,
            object: "chat.completion".into(),
            model: raw.model,
            ..Default::default()
        },
        choices: vec![Choice {
            index: 0,
            message: Delta {
                role: Some(Role::Assistant),
                content: Some(content),
                reasoning_content: None,
            },
            finish_reason,
        }],
        usage: Usage {
            prompt_tokens: raw.usage.input_tokens,
            completion_tokens: raw.usage.output_tokens,
            total_tokens: raw.usage.input_tokens + raw.usage.output_tokens,
        },
    }
}
