//! Recursion limits

use crate::error::TransformError;

/// Guards against pathologically nested input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformLimits {
    /// Maximum object levels rewritten below the root (default: 512, hard: 1,024)
    pub max_nesting: usize,
}

impl Default for TransformLimits {
    fn default() -> Self {
        Self { max_nesting: 512 }
    }
}

impl TransformLimits {
    /// Hard maximum limits that cannot be exceeded
    ///
    /// Traversal keeps its own stack, but cloning and dropping
    /// `serde_json::Value` still recurse, so the cap must fit a 2 MiB thread.
    pub fn hard_maximums() -> Self {
        Self { max_nesting: 1_024 }
    }

    /// Validate limits against hard maximums
    pub fn validate(&self) -> Result<(), TransformError> {
        let hard = Self::hard_maximums();

        if self.max_nesting == 0 {
            return Err(TransformError::LimitsExceedHardMaximum(
                "max_nesting must be at least 1".to_string(),
            ));
        }

        if self.max_nesting > hard.max_nesting {
            return Err(TransformError::LimitsExceedHardMaximum(format!(
                "max_nesting {} exceeds hard maximum {}",
                self.max_nesting, hard.max_nesting
            )));
        }

        Ok(())
    }
}
