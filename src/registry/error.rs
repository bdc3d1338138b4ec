//! Error types exposed by the feature-registry layer.

use thiserror::Error;

/// Errors surfaced while loading configuration or talking to the registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No registry base URL was supplied.
    #[error("registry URL is required")]
    MissingRegistryUrl,

    /// The registry base URL could not be parsed.
    #[error("registry URL is invalid: {0}")]
    InvalidUrl(String),

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The registry returned a non-success response to a read call.
    #[error("registry API error: {message}")]
    Api {
        /// Response detail from the registry describing the failure.
        message: String,
    },

    /// Networking failed while calling the registry.
    #[error("network error talking to the registry: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// A registry response could not be decoded.
    #[error("failed to decode registry response: {message}")]
    Decode {
        /// Deserialisation error detail.
        message: String,
    },
}
