//! Allocation error types.

use coinage_shared::{Money, MoneyError};
use thiserror::Error;

/// Errors raised while splitting a monetary value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// The weights sum to zero, so no proportion is defined.
    #[error("Weights sum to zero; cannot distribute {total} proportionally")]
    ZeroWeightTotal {
        /// The value that was being distributed.
        total: Money,
    },

    /// Value-level failure: mismatched weight currency, overflow.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

impl AllocationError {
    /// Returns a stable, machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroWeightTotal { .. } => "ZERO_WEIGHT_TOTAL",
            Self::Money(inner) => inner.error_code(),
        }
    }
}
