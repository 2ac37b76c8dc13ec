//! Static conversion rate table.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::{CalculatorError, CalculatorResult};

/// Illustrative rates used when no table is configured (1 base = rate target).
const DEFAULT_RATES: [(&str, Decimal); 3] = [
    ("EUR", Decimal::from_parts(85, 0, 0, false, 2)),
    ("GBP", Decimal::from_parts(75, 0, 0, false, 2)),
    ("JPY", Decimal::from_parts(1100, 0, 0, false, 1)),
];

/// Conversion factors keyed by currency code.
///
/// Codes are trimmed and upper-cased when the table is built; lookups are
/// exact matches against the stored codes.
/// Every rate is strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Decimal>",
    into = "BTreeMap<String, Decimal>"
)]
pub struct RateTable {
    rates: BTreeMap<String, Decimal>,
}

impl RateTable {
    /// Builds a table from `(code, rate)` pairs.
    ///
    /// A repeated code keeps the last rate.
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError::InvalidRate` if any rate is zero or negative.
    pub fn new<I, K>(entries: I) -> CalculatorResult<Self>
    where
        I: IntoIterator<Item = (K, Decimal)>,
        K: AsRef<str>,
    {
        let mut rates = BTreeMap::new();
        for (code, rate) in entries {
            let code = normalize(code.as_ref());
            if rate <= Decimal::ZERO {
                return Err(CalculatorError::InvalidRate {
                    currency: code,
                    rate,
                });
            }
            rates.insert(code, rate);
        }
        Ok(Self { rates })
    }

    /// Returns the rate for `code`, if present. `code` must match exactly.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<Decimal> {
        self.rates.get(code).copied()
    }

    /// Returns true if the table has a rate for `code`.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Iterates entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.rates.iter().map(|(code, rate)| (code.as_str(), *rate))
    }

    /// Number of currencies in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table has no rates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            rates: DEFAULT_RATES
                .iter()
                .map(|(code, rate)| ((*code).to_string(), *rate))
                .collect(),
        }
    }
}

impl TryFrom<BTreeMap<String, Decimal>> for RateTable {
    type Error = CalculatorError;

    fn try_from(rates: BTreeMap<String, Decimal>) -> Result<Self, Self::Error> {
        Self::new(rates)
    }
}

impl From<RateTable> for BTreeMap<String, Decimal> {
    fn from(table: RateTable) -> Self {
        table.rates
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
