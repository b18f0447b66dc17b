//! leafwrap core - Depth-limited leaf substitution for JSON trees
//!
//! This crate holds the transformation itself with no I/O dependencies:
//!
//! - Value kinds and their type labels
//! - Depth budgets (`Bounded(n)` or `Unbounded`)
//! - Wrapper records and configurable field names
//! - Recursion limits
//! - Error types
//! - The substitution transformer

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod depth;
pub mod error;
pub mod kind;
pub mod limits;
pub mod record;
pub mod transform;

// Re-export commonly used types
pub use depth::DepthBudget;
pub use error::{Result, TransformError};
pub use kind::ValueKind;
pub use limits::TransformLimits;
pub use record::{WrapperKeys, WrapperRecord, DEFAULT_CONTENT_KEY, DEFAULT_TYPE_KEY};
pub use transform::{transform, TransformStats, Transformer};
