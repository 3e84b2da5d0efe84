//! Provider abstractions for the unified LLM interface

use crate::{Request, Response};
use anyhow::Result;

/// A trait for LLM providers.
///
/// Constructors are inherent methods on each provider, never called
/// polymorphically. The resolver in `pincer-model` picks the constructor.
pub trait LLM: Sized + Clone {
    /// Send a chat completion request.
    fn send(&self, request: &Request) -> impl Future<Output = Result<Response>> + Send;
}
