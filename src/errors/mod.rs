//! Error handling module for the directory client.
//!
//! Provides a centralized error type for everything that can go wrong between
//! issuing a page request and landing validated records in the store. The
//! fetch layer absorbs these into `FetchState::Errored` with a human-readable
//! message; only the delete path surfaces them to the caller directly.

use std::fmt;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
    pub const SERVER_ERROR: &str = "SERVER_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
}

/// Application error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Request could not complete (connection refused, timeout, ...)
    Network(String),
    /// Backend answered with a non-success status or a failure envelope
    Server(String),
    /// Response body could not be parsed
    Decode(String),
    /// Response parsed but violated the member contract
    Validation(String),
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Network(_) => codes::NETWORK_ERROR,
            AppError::Server(_) => codes::SERVER_ERROR,
            AppError::Decode(_) => codes::DECODE_ERROR,
            AppError::Validation(_) => codes::VALIDATION_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        match self {
            AppError::Network(msg)
            | AppError::Server(msg)
            | AppError::Decode(msg)
            | AppError::Validation(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Network error: {:?}", err);
        if err.is_decode() {
            AppError::Decode(format!("Malformed response: {}", err))
        } else {
            AppError::Network(format!("Connection error: {}", err))
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::Decode(format!("JSON error: {}", err))
    }
}
