//! Error types for EcoQuest Community

use thiserror::Error;

/// Main error type for datastore, auth and configuration operations
#[derive(Error, Debug)]
pub enum CommunityError {
    /// Transport-level failure talking to the hosted backend
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Backend returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as sent by the provider
        body: String,
    },

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session could not be established or resolved
    #[error("Auth error: {0}")]
    Auth(String),

    /// A URL could not be parsed or built
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Response was well-formed but not what the operation expected
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Result type alias using CommunityError
pub type CommunityResult<T> = Result<T, CommunityError>;
