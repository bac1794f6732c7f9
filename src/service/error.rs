//! Error type for calls to the external service.
//!
//! The error taxonomy is "whatever the service reports": a failed call either
//! never completed (network), came back with a non-success status carrying the
//! provider's message string, or returned a body this crate could not decode.

use thiserror::Error;

/// Errors from the external auth/database service client.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request never completed (connection, TLS, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    ///
    /// `message` is the provider's own message string, unmodified, so the UI
    /// layer can match the substrings it knows how to localize.
    #[error("{message}")]
    Service {
        /// HTTP status code reported by the service
        status: u16,
        /// Provider error message, verbatim
        message: String,
    },

    /// The response body could not be decoded
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ServiceError {
    /// Create a service error from a status code and provider message
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        Self::Service {
            status,
            message: message.into(),
        }
    }

    /// Whether the failure happened before any response arrived
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// The user-facing message for this error
    pub fn message(&self) -> String {
        self.to_string()
    }
}
