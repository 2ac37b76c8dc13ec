//! Currency conversion estimates.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rounding::RESULT_DECIMAL_PLACES;

/// Outcome of looking up a conversion in the rate table.
///
/// A missing rate is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConversionEstimate {
    /// The target currency has a rate.
    Converted {
        /// Source amount as supplied.
        amount: Decimal,
        /// Currency the source amount is denominated in.
        base_currency: String,
        /// Converted amount, rounded to 2 decimal places.
        converted: Decimal,
        /// Target currency code as supplied.
        target_currency: String,
    },
    /// No rate is known for the target currency.
    RateUnavailable {
        /// Target currency code as supplied.
        target_currency: String,
    },
}

impl ConversionEstimate {
    /// Returns the converted amount, if a rate was found.
    #[must_use]
    pub const fn converted(&self) -> Option<Decimal> {
        match self {
            Self::Converted { converted, .. } => Some(*converted),
            Self::RateUnavailable { .. } => None,
        }
    }

    /// Returns true if no rate was found.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::RateUnavailable { .. })
    }
}

impl fmt::Display for ConversionEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Converted {
                amount,
                base_currency,
                converted,
                target_currency,
            } => write!(
                f,
                "{amount} {base_currency} is approximately {converted:.prec$} {target_currency}",
                prec = RESULT_DECIMAL_PLACES as usize
            ),
            Self::RateUnavailable { target_currency } => {
                write!(f, "Sorry, no exchange rate is available for {target_currency}")
            }
        }
    }
}
