//! Pipeline options

use crate::error::SubstituteError;
use leafwrap_core::{DepthBudget, TransformLimits, Transformer, WrapperKeys};

/// Indentation width used when none is configured
pub const DEFAULT_INDENT: usize = 4;
/// Widest indentation accepted
pub const MAX_INDENT: usize = 16;

/// Output layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLayout {
    /// Multi-line output indented by the given number of spaces
    Indented(usize),
    /// Single-line output
    Compact,
}

impl Default for OutputLayout {
    fn default() -> Self {
        OutputLayout::Indented(DEFAULT_INDENT)
    }
}

/// High-level substitution options
#[derive(Debug, Clone, Default)]
pub struct SubstituteOptions {
    /// Object levels to rewrite
    pub depth: DepthBudget,
    /// Wrapper record field names
    pub keys: WrapperKeys,
    /// Recursion guard
    pub limits: TransformLimits,
    /// Output layout
    pub layout: OutputLayout,
}

impl SubstituteOptions {
    /// Options for a given depth with everything else defaulted
    pub fn with_depth(depth: DepthBudget) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    /// Check the output layout
    ///
    /// Keys and limits are checked once, by [`SubstituteOptions::transformer`].
    pub fn validate(&self) -> Result<(), SubstituteError> {
        if let OutputLayout::Indented(width) = self.layout {
            if width > MAX_INDENT {
                return Err(SubstituteError::InvalidOptions(format!(
                    "indent {} exceeds maximum {}",
                    width, MAX_INDENT
                )));
            }
        }
        Ok(())
    }

    /// Build the transformer these options describe
    pub fn transformer(&self) -> Result<Transformer, SubstituteError> {
        Ok(Transformer::new(self.keys.clone(), self.limits.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let opts = SubstituteOptions::default();
        assert!(opts.validate().is_ok());
        assert_eq!(opts.layout, OutputLayout::Indented(4));
        assert_eq!(opts.depth, DepthBudget::Unbounded);
    }

    #[test]
    fn rejects_wide_indent() {
        let opts = SubstituteOptions {
            layout: OutputLayout::Indented(17),
            ..SubstituteOptions::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(SubstituteError::InvalidOptions(_))
        ));
    }

    #[test]
    fn rejects_colliding_keys() {
        let opts = SubstituteOptions {
            keys: WrapperKeys {
                content: "x".to_string(),
                type_key: "x".to_string(),
            },
            ..SubstituteOptions::default()
        };
        assert!(opts.validate().is_ok());
        assert!(matches!(
            opts.transformer(),
            Err(SubstituteError::Transform(_))
        ));
    }

    #[test]
    fn transformer_rejects_limits_over_hard_maximum() {
        let opts = SubstituteOptions {
            limits: TransformLimits {
                max_nesting: TransformLimits::hard_maximums().max_nesting + 1,
            },
            ..SubstituteOptions::default()
        };
        assert!(opts.validate().is_ok());
        assert!(matches!(
            opts.transformer(),
            Err(SubstituteError::Transform(_))
        ));
    }
}
