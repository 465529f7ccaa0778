//! Error shared by every collaborator port.
//!
//! Collaborators (merchant callbacks, the elements session client) report
//! failures with this type. The session manager carries it through unchanged,
//! wrapped in a variant that says which collaborator failed.

use serde::{Deserialize, Serialize};

/// Failure reported by an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderError {
    /// Error code for categorization.
    pub code: ProviderErrorCode,

    /// Human-readable message.
    pub message: String,

    /// Whether the caller may retry the operation.
    pub retryable: bool,
}

impl ProviderError {
    /// Create a new provider error.
    pub fn new(code: ProviderErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            retryable: code.is_retryable(),
        }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::NetworkError, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::AuthenticationError, message)
    }

    /// Create an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::InvalidRequest, message)
    }

    /// Create a cancellation error.
    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::Cancelled, message)
    }

    /// Create a generic provider error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::ProviderError, message)
    }

    pub fn is_cancelled(&self) -> bool {
        self.code == ProviderErrorCode::Cancelled
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ProviderError {}

/// Provider error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderErrorCode {
    /// Network connectivity issue.
    NetworkError,

    /// API authentication failed (e.g. revoked client secret).
    AuthenticationError,

    /// Request rejected as malformed.
    InvalidRequest,

    /// The request was abandoned before completing.
    Cancelled,

    /// Provider API error.
    ProviderError,
}

impl ProviderErrorCode {
    /// Check if this error type is typically retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ProviderErrorCode::NetworkError)
    }
}

impl std::fmt::Display for ProviderErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProviderErrorCode::NetworkError => "network_error",
            ProviderErrorCode::AuthenticationError => "authentication_error",
            ProviderErrorCode::InvalidRequest => "invalid_request",
            ProviderErrorCode::Cancelled => "cancelled",
            ProviderErrorCode::ProviderError => "provider_error",
        };
        write!(f, "{}", s)
    }
}
