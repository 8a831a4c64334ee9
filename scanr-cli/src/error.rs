//! Error handling module for the scanr CLI.
//!
//! Lexical errors are not failures of the tool: they are reported and turn
//! into a non-zero exit status. This type covers everything that stops a
//! command from producing its report at all.

use thiserror::Error;

/// Main error type for the scanr CLI application.
#[derive(Error, Debug)]
pub enum ScanrError {
    /// Error when a configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when the input file cannot be used.
    #[error("Input error: {0}")]
    Input(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization/deserialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when a TOML configuration fails to parse.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias using ScanrError.
pub type Result<T> = std::result::Result<T, ScanrError>;
