//! Error handling for the include builder.
//!
//! This module defines the main error type `Error` used throughout the
//! crate, along with a convenient `Result` type alias. It uses `thiserror`
//! for easy error handling and implements conversions from common error
//! types.

use thiserror::Error;

/// Result type for include-building operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for include-building operations
#[derive(Debug, Error)]
pub enum Error {
    /// The endpoint could not be reached or returned a non-success status
    #[error("network error: {0}")]
    Network(String),

    /// The payload was missing a required field or the template failed
    #[error("render error: {0}")]
    Render(String),

    /// The include file could not be created or written
    #[error("output error: {0}")]
    Output(String),

    /// Invalid CLI or credential combination
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a new network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }

    /// Create a new render error
    pub fn render<S: Into<String>>(msg: S) -> Self {
        Self::Render(msg.into())
    }

    /// Create a new output error
    pub fn output<S: Into<String>>(msg: S) -> Self {
        Self::Output(msg.into())
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
