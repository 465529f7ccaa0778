//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read CUSTOMER_SHEET environment: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A loaded value that cannot be used.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidLogLevel { filter: String, reason: String },
}
