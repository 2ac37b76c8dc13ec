//! Result rounding.
//!
//! CRITICAL: every figure the calculator returns goes through here:
//! - Always 2 decimal places
//! - Banker's rounding (round half to even)

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Decimal places kept on every calculator result.
pub const RESULT_DECIMAL_PLACES: u32 = 2;

/// Rounds a value using Banker's Rounding (MidpointNearestEven).
///
/// - Rounds 2.5 → 2
/// - Rounds 3.5 → 4
/// - Rounds 2.25 → 2.2 at 1 decimal
#[must_use]
pub fn round(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}

/// Rounds a calculator result to [`RESULT_DECIMAL_PLACES`].
#[must_use]
pub fn round_result(value: Decimal) -> Decimal {
    round(value, RESULT_DECIMAL_PLACES)
}
