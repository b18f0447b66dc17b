//! Error types for the read/transform/write pipeline

use leafwrap_core::TransformError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while substituting a document
#[derive(Debug, Error)]
pub enum SubstituteError {
    /// Options failed validation before any I/O.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
    /// Input file missing or unreadable.
    #[error("Failed to read input '{}': {source}", .path.display())]
    InputRead {
        /// Input path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// Input is not a valid JSON document.
    #[error("Failed to parse JSON from '{}': {source}", .path.display())]
    Parse {
        /// Input path, or `<reader>` for in-memory sources
        path: PathBuf,
        /// Underlying parser error (carries line and column)
        #[source]
        source: serde_json::Error,
    },
    /// The transformer rejected the document.
    #[error(transparent)]
    Transform(#[from] TransformError),
    /// Serializing the transformed tree failed.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[source] serde_json::Error),
    /// Destination could not be created or written.
    #[error("Failed to write output '{}': {source}", .path.display())]
    OutputWrite {
        /// Output path, or `<writer>` for in-memory sinks
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SubstituteError>;
