//! Calculator error types.

use rust_decimal::Decimal;
use thiserror::Error;

use fincalc_shared::AppError;

/// Result type alias using `CalculatorError`.
pub type CalculatorResult<T> = Result<T, CalculatorError>;

/// Calculation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// A compound-interest input was negative.
    #[error("Invalid argument: {field} cannot be negative")]
    NegativeInput {
        /// Name of the offending parameter.
        field: &'static str,
    },

    /// Compounding frequency was zero.
    #[error("Invalid argument: compounds per year must be at least 1")]
    InvalidCompoundingFrequency,

    /// A rate table entry was zero or negative.
    #[error("Invalid argument: rate for {currency} must be positive, got {rate}")]
    InvalidRate {
        /// Currency code of the entry.
        currency: String,
        /// The rejected rate.
        rate: Decimal,
    },

    /// Intermediate result exceeded the decimal range.
    #[error("Arithmetic overflow in {operation}")]
    Overflow {
        /// Operation that overflowed.
        operation: &'static str,
    },
}

impl CalculatorError {
    /// Returns true for errors caused by a caller-supplied argument.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::Overflow { .. })
    }
}

impl From<CalculatorError> for AppError {
    fn from(err: CalculatorError) -> Self {
        if err.is_invalid_argument() {
            Self::Validation(err.to_string())
        } else {
            Self::Calculation(err.to_string())
        }
    }
}
