//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),

    #[error("Invalid CORS method: {0}")]
    InvalidCorsMethod(String),

    #[error("Invalid CORS header: {0}")]
    InvalidCorsHeader(String),

    #[error("Wildcard CORS origins are not allowed in production")]
    WildcardCorsInProduction,

    #[error("Timeout for capability '{capability}' must be between 1 and 300 seconds, got {actual}")]
    InvalidCapabilityTimeout {
        capability: &'static str,
        actual: u64,
    },

    #[error("Backend '{backend}' cannot serve capability '{capability}'")]
    UnsupportedBackend {
        capability: &'static str,
        backend: &'static str,
    },
}
