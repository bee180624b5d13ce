//! Unified error types for the API service.

use thiserror::Error;

/// Unified error type for process-level failures.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Metrics recorder could not be installed.
    #[error("metrics error: {0}")]
    Metrics(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to turn a payload into an HTTP response.
#[derive(Error, Debug)]
pub enum WriteError {
    /// The payload could not be serialized to JSON.
    #[error("failed to serialize response body: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The response itself could not be assembled.
    #[error("failed to build response: {0}")]
    Response(#[from] axum::http::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
