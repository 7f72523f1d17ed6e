//! Error taxonomy for the adapter.

use thiserror::Error;

/// Errors surfaced by adapter operations.
///
/// Every failure crosses the public API as an `Err` value; nothing in the
/// adapter panics or throws across the boundary. The hibernation case gets
/// its own variant because callers (and the health probe) treat it as a
/// recognized degraded state rather than an arbitrary transport fault.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Network-level failure: connection refused, DNS, TLS, timeout.
    #[error("transport error: {0}")]
    Transport(String),

    /// The instance returned its hibernation placeholder page instead of
    /// API JSON.
    #[error("ServiceNow instance is hibernating")]
    Hibernating,

    /// The remote returned a non-success HTTP status.
    #[error("ServiceNow returned HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: u16,
        /// The response body text.
        body: String,
    },

    /// A 2xx response whose body did not match the expected table-API shape.
    #[error("malformed response body: {0}")]
    MalformedResponse(String),

    /// Adapter configuration failed validation.
    #[error("invalid adapter config: {0}")]
    InvalidConfig(String),
}

impl AdapterError {
    /// Whether this error represents the hibernating-instance condition.
    pub fn is_hibernation(&self) -> bool {
        matches!(self, Self::Hibernating)
    }
}

impl From<reqwest::Error> for AdapterError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for AdapterError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type AdapterResult<T> = Result<T, AdapterError>;
