// src/error.rs

//! Unified error handling for the wordwatch application.

use std::fmt;

use thiserror::Error;

/// Result type alias for wordwatch operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Connection or DNS level failure
    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    /// No response within the configured deadline
    #[error("Request timed out for {url}")]
    Timeout { url: String },

    /// Remote returned a status >= 400
    #[error("Request failed with status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// Extraction found no usable structure
    #[error("Parse produced nothing: {0}")]
    ParseEmpty(String),

    /// Malformed caller input
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Persistence collaborator failure
    #[error("Store error: {0}")]
    Store(String),
}

impl AppError {
    /// Create a network error with its originating URL.
    pub fn network(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Network {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a timeout error for a URL.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Create an HTTP status error.
    pub fn http_status(status: u16, url: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            url: url.into(),
        }
    }

    /// Create a parse-empty error.
    pub fn parse_empty(message: impl Into<String>) -> Self {
        Self::ParseEmpty(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a store error.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }
}
