//! Financial calculator service.
//!
//! This module provides the calculator itself: compound interest, ROI and
//! static currency conversion estimates. All operations are pure functions
//! of their inputs plus the calculator's immutable configuration.

use rust_decimal::{Decimal, MathematicalOps};
use tracing::debug;

use fincalc_shared::CalculatorConfig;

use super::conversion::ConversionEstimate;
use super::error::{CalculatorError, CalculatorResult};
use super::rates::RateTable;
use super::rounding::round_result;

/// Base currency used by [`FinancialCalculator::default`].
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Calculator for common personal-finance figures.
///
/// Holds a base currency label and a rate table, both fixed at
/// construction. Every result is rounded to 2 decimal places using
/// Banker's Rounding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialCalculator {
    base_currency: String,
    rates: RateTable,
}

impl FinancialCalculator {
    /// Creates a calculator with the built-in rate table.
    #[must_use]
    pub fn new(base_currency: impl Into<String>) -> Self {
        Self::with_rates(base_currency, RateTable::default())
    }

    /// Creates a calculator with an injected rate table.
    #[must_use]
    pub fn with_rates(base_currency: impl Into<String>, rates: RateTable) -> Self {
        Self {
            base_currency: base_currency.into(),
            rates,
        }
    }

    /// Creates a calculator from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError::InvalidRate` if a configured rate is not
    /// strictly positive.
    pub fn from_config(config: &CalculatorConfig) -> CalculatorResult<Self> {
        let rates = match &config.rates {
            Some(rates) => RateTable::new(rates.iter().map(|(code, rate)| (code, *rate)))?,
            None => RateTable::default(),
        };
        Ok(Self::with_rates(config.base_currency.clone(), rates))
    }

    /// Currency label used in conversion output.
    #[must_use]
    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// Rate table used for conversion estimates.
    #[must_use]
    pub const fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Calculates compound interest with annual compounding.
    ///
    /// See [`Self::calculate_compound_interest_with_frequency`].
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use fincalc_core::calculator::FinancialCalculator;
    ///
    /// let calc = FinancialCalculator::default();
    /// let amount = calc.calculate_compound_interest(dec!(1000), dec!(5), 10).unwrap();
    /// assert_eq!(amount, dec!(1628.89));
    /// ```
    pub fn calculate_compound_interest(
        &self,
        principal: Decimal,
        rate: Decimal,
        time: i64,
    ) -> CalculatorResult<Decimal> {
        self.calculate_compound_interest_with_frequency(principal, rate, time, 1)
    }

    /// Calculates the final amount `A = P(1 + r/n)^(nt)`.
    ///
    /// # Arguments
    ///
    /// * `principal` - Initial amount
    /// * `rate` - Annual rate as a percentage (5 means 5%)
    /// * `time` - Whole years
    /// * `compounds_per_year` - Compounding periods per year
    ///
    /// # Errors
    ///
    /// - `NegativeInput` if principal, rate or time is negative
    /// - `InvalidCompoundingFrequency` if `compounds_per_year` is zero
    /// - `Overflow` if the result exceeds the decimal range
    pub fn calculate_compound_interest_with_frequency(
        &self,
        principal: Decimal,
        rate: Decimal,
        time: i64,
        compounds_per_year: u32,
    ) -> CalculatorResult<Decimal> {
        const OVERFLOW: CalculatorError = CalculatorError::Overflow {
            operation: "compound interest",
        };

        if principal < Decimal::ZERO {
            return Err(CalculatorError::NegativeInput { field: "principal" });
        }
        if rate < Decimal::ZERO {
            return Err(CalculatorError::NegativeInput { field: "rate" });
        }
        let Ok(years) = u64::try_from(time) else {
            return Err(CalculatorError::NegativeInput { field: "time" });
        };
        if compounds_per_year == 0 {
            return Err(CalculatorError::InvalidCompoundingFrequency);
        }
        if principal.is_zero() {
            return Ok(Decimal::ZERO);
        }

        let periods = years
            .checked_mul(u64::from(compounds_per_year))
            .ok_or(OVERFLOW)?;
        let periodic_rate = rate / Decimal::ONE_HUNDRED / Decimal::from(compounds_per_year);
        let growth = (Decimal::ONE + periodic_rate)
            .checked_powu(periods)
            .ok_or(OVERFLOW)?;
        let amount = round_result(principal.checked_mul(growth).ok_or(OVERFLOW)?);

        debug!(
            %principal,
            %rate,
            time,
            compounds_per_year,
            %amount,
            "Calculated compound interest"
        );
        Ok(amount)
    }

    /// Calculates return on investment as a percentage.
    ///
    /// `((return_amount - investment) / investment) * 100`. A zero
    /// investment yields zero rather than an error. Signs are not validated.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the result exceeds the decimal range.
    pub fn calculate_roi(
        &self,
        investment: Decimal,
        return_amount: Decimal,
    ) -> CalculatorResult<Decimal> {
        if investment.is_zero() {
            debug!(%return_amount, "Zero investment, ROI defaults to zero");
            return Ok(Decimal::ZERO);
        }

        let roi = return_amount
            .checked_sub(investment)
            .and_then(|gain| gain.checked_div(investment))
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map(round_result)
            .ok_or(CalculatorError::Overflow { operation: "roi" })?;

        debug!(%investment, %return_amount, %roi, "Calculated ROI");
        Ok(roi)
    }

    /// Looks up a static conversion of `amount` into `target_currency`.
    ///
    /// An unknown currency yields `ConversionEstimate::RateUnavailable`.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the converted amount exceeds the decimal range.
    pub fn quote_currency_conversion(
        &self,
        amount: Decimal,
        target_currency: &str,
    ) -> CalculatorResult<ConversionEstimate> {
        let Some(rate) = self.rates.get(target_currency) else {
            debug!(target_currency, "No conversion rate available");
            return Ok(ConversionEstimate::RateUnavailable {
                target_currency: target_currency.to_string(),
            });
        };

        let converted = amount
            .checked_mul(rate)
            .map(round_result)
            .ok_or(CalculatorError::Overflow {
                operation: "currency conversion",
            })?;

        debug!(
            %amount,
            base_currency = %self.base_currency,
            target_currency,
            %rate,
            %converted,
            "Estimated currency conversion"
        );
        Ok(ConversionEstimate::Converted {
            amount,
            base_currency: self.base_currency.clone(),
            converted,
            target_currency: target_currency.to_string(),
        })
    }

    /// Estimates a conversion and renders it as a sentence.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use fincalc_core::calculator::FinancialCalculator;
    ///
    /// let calc = FinancialCalculator::default();
    /// let text = calc.estimate_currency_conversion(dec!(100), "EUR").unwrap();
    /// assert_eq!(text, "100 USD is approximately 85.00 EUR");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the converted amount exceeds the decimal range.
    pub fn estimate_currency_conversion(
        &self,
        amount: Decimal,
        target_currency: &str,
    ) -> CalculatorResult<String> {
        self.quote_currency_conversion(amount, target_currency)
            .map(|estimate| estimate.to_string())
    }
}

impl Default for FinancialCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_CURRENCY)
    }
}
