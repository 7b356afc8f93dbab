//! Error types for monetary values.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by `Money` construction, conversion and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Two values of different currencies were combined.
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// Alphabetic code of the receiver's currency.
        expected: &'static str,
        /// Alphabetic code of the other operand's currency.
        found: &'static str,
    },

    /// The amount does not fit in a 64-bit minor-units count.
    #[error("Amount {amount} cannot be represented as minor units with exponent {exponent}")]
    MinorUnitsOverflow {
        /// The exact amount that was being converted.
        amount: Decimal,
        /// The currency's minor-units exponent.
        exponent: u8,
    },

    /// Decimal arithmetic overflowed.
    #[error("Arithmetic overflow during {0}")]
    Overflow(&'static str),

    /// Division by a zero scalar.
    #[error("Division by zero")]
    DivisionByZero,

    /// A scalar operand has no exact decimal representation.
    #[error("Scalar operand cannot be represented as a decimal: {0}")]
    UnrepresentableScalar(String),

    /// No currency is known for the identifier.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

impl MoneyError {
    /// Returns a stable, machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::MinorUnitsOverflow { .. } => "MINOR_UNITS_OVERFLOW",
            Self::Overflow(_) => "ARITHMETIC_OVERFLOW",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::UnrepresentableScalar(_) => "UNREPRESENTABLE_SCALAR",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
        }
    }
}
