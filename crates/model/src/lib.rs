//! Model-string parsing and LLM provider resolution.
//!
//! Turns a [`ModelConfig`] such as `model = "ollama/llama3"` into a ready
//! [`Provider`] plus the bare model id, applying per-protocol credential
//! checks and default endpoints. [`ProviderManager`] holds a resolved set of
//! named providers with an active selection.

pub use claude::Claude;
pub use config::{ModelConfig, ModelList};
pub use error::{Error, Result};
pub use llm::{self, Client};
pub use manager::{ProviderEntry, ProviderManager};
pub use protocol::{
    DEFAULT_PROTOCOL, Family, Protocol, UnknownProtocol, default_api_base, extract_protocol,
};
pub use provider::{Provider, build_provider, resolve};

mod claude;
pub mod config;
mod error;
mod manager;
pub mod protocol;
mod provider;
