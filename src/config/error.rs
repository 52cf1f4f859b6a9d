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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid MongoDB URL format")]
    InvalidDatabaseUrl,

    #[error("JWT secret is too short")]
    JwtSecretTooShort,

    #[error("Invalid gateway key id format")]
    InvalidGatewayKey,

    #[error("Billing cycle count must be positive")]
    InvalidBillingCycles,

    #[error("Invalid from email address")]
    InvalidFromEmail,

    #[error("Invalid contact email address")]
    InvalidContactEmail,

    #[error("Media base URL must be http(s)")]
    InvalidMediaBaseUrl,
}
