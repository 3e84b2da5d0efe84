//! Provider resolution errors.

/// Why a model configuration could not be turned into a provider.
///
/// Every variant is terminal: resolution never returns a partial provider.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No configuration record was supplied.
    #[error("model config is missing")]
    ConfigMissing,

    /// The configuration has an empty or whitespace-only `model` string.
    #[error("model is required")]
    ModelRequired,

    /// The model string has a protocol prefix but nothing after the `/`.
    #[error("model id is empty in model {model:?}")]
    EmptyModelId { model: String },

    /// An HTTP-based protocol was selected without a key or an endpoint.
    #[error("api_key or api_base is required for HTTP-based protocol {protocol:?}")]
    MissingCredentialOrEndpoint { protocol: String },

    /// The protocol prefix is not one this crate can construct.
    #[error("unknown protocol {protocol:?} in model {model:?}")]
    UnknownProtocol { protocol: String, model: String },

    /// The HTTP client or auth headers could not be built.
    #[error("failed to build {protocol} client: {source}")]
    Client {
        protocol: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Result alias for provider resolution.
pub type Result<T> = std::result::Result<T, Error>;
