//! Error types for the onboarding flow.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid content endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Errors raised while acquiring the remote content document.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The service responded, but flagged the document as unsuccessful.
    #[error("Content service returned an unsuccessful response")]
    Unavailable,

    /// Transport-level failure (connection, timeout, non-2xx status).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The response body could not be decoded into a content document.
    #[error("Malformed content document: {0}")]
    Malformed(String),
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
