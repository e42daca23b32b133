//! Error types for the routing client

use thiserror::Error;

/// Result type alias for routing operations
pub type Result<T> = std::result::Result<T, RoutingError>;

/// Errors that can occur while computing a route
#[derive(Debug, Error)]
pub enum RoutingError {
    /// HTTP request failed (connection, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Routing service returned an error status code
    #[error("Routing service error (status {status}): {message}")]
    ServiceError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Failed to parse the service response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Service answered but found no route between the points
    #[error("No route found (code {0})")]
    NoRoute(String),

    /// Client could not be constructed
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl RoutingError {
    /// Create a service error from status code and body
    pub fn service_error(status: u16, message: impl Into<String>) -> Self {
        Self::ServiceError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error came from the request timing out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::RequestFailed(e) if e.is_timeout())
    }

    /// Check if the service itself rejected the request (5xx)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ServiceError { status, .. } if *status >= 500)
    }
}
