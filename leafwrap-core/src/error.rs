//! Error types for leafwrap core

use thiserror::Error;

/// Errors raised by the substitution transformer
#[derive(Debug, Error)]
pub enum TransformError {
    /// The tree nests objects deeper than the configured guard allows.
    #[error(
        "Nesting limit exceeded: object nesting reached level {level} (max: {max_nesting}) at '{path}'"
    )]
    NestingLimitExceeded {
        /// Object level at which the guard tripped
        level: usize,
        /// Configured maximum nesting
        max_nesting: usize,
        /// JSON Pointer of the object that could not be entered
        path: String,
    },
    /// Configured limits are beyond what the transformer will accept.
    #[error("Limits exceed hard maximum: {0}")]
    LimitsExceedHardMaximum(String),
    /// Wrapper key names are empty or collide with each other.
    #[error("Invalid wrapper keys: {0}")]
    InvalidWrapperKeys(String),
    /// Depth argument could not be interpreted.
    #[error(
        "Invalid depth '{input}': expected a non-negative integer or 'unbounded'"
    )]
    InvalidDepth {
        /// Text that failed to parse
        input: String,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TransformError>;
