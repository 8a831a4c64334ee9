//! Core error types for scanr-util
//!
//! This module defines the error type for source line lookups.

use thiserror::Error;

/// Error type for source buffer lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    /// Invalid line number
    #[error("Invalid line number: {line} (source has {max_lines} lines)")]
    InvalidLineNumber {
        /// The requested line (1-based)
        line: usize,
        /// Number of lines in the source
        max_lines: usize,
    },
}

/// Result type alias for source buffer lookups
pub type SourceResult<T> = std::result::Result<T, SourceError>;
