//! Depth budget

use crate::error::TransformError;
use std::fmt;
use std::str::FromStr;

/// Remaining object levels the transformer may descend through
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DepthBudget {
    /// No limit; recurse until every branch ends in a leaf or `{}`
    #[default]
    Unbounded,
    /// Stop after this many object levels
    Bounded(usize),
}

impl DepthBudget {
    /// True when no further object may be rewritten
    pub fn is_exhausted(&self) -> bool {
        matches!(self, DepthBudget::Bounded(0))
    }

    /// Budget handed to an object-valued child
    pub fn descend(self) -> Self {
        match self {
            DepthBudget::Unbounded => DepthBudget::Unbounded,
            DepthBudget::Bounded(n) => DepthBudget::Bounded(n.saturating_sub(1)),
        }
    }
}

impl FromStr for DepthBudget {
    type Err = TransformError;

    /// Accepts a non-negative integer, or `unbounded` / `inf` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("unbounded") || trimmed.eq_ignore_ascii_case("inf") {
            return Ok(DepthBudget::Unbounded);
        }
        trimmed
            .parse::<usize>()
            .map(DepthBudget::Bounded)
            .map_err(|_| TransformError::InvalidDepth {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for DepthBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthBudget::Unbounded => f.write_str("unbounded"),
            DepthBudget::Bounded(n) => write!(f, "{}", n),
        }
    }
}
