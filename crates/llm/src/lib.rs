//! Unified LLM capability types and traits.
//!
//! This crate provides the shared types used by every pincer provider:
//! `Message`, `Request`, `Response`, and the `LLM` trait. Also provides
//! `HttpProvider` for the OpenAI-compatible HTTP transport and the
//! `client()` builder that applies proxy and timeout settings.

pub use http::{DEFAULT_MAX_TOKENS_FIELD, HttpProvider, client};
pub use message::{Message, Role};
pub use provider::LLM;
pub use request::Request;
pub use reqwest::{self, Client};
pub use response::{Choice, CompletionMeta, Delta, FinishReason, Response, Usage};

mod http;
mod message;
mod provider;
mod request;
mod response;
