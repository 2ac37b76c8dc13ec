//! Property-based tests for calculator operations.
//!
//! - Compound growth never loses principal
//! - Zero rate preserves principal
//! - All three operations are deterministic

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::rounding::round_result;
use super::service::FinancialCalculator;

/// Strategy to generate non-negative amounts (0.00 to 1,000,000.00).
fn principal() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive annual percentage rates (0.01 to 20.00).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..=2_000i64).prop_map(|bps| Decimal::new(bps, 2))
}

/// Strategy to generate signed amounts (-1,000,000.00 to 1,000,000.00).
fn signed_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn currency_code() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("EUR".to_string()),
        Just("GBP".to_string()),
        Just("JPY".to_string()),
        "[A-Z]{3}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// With a positive rate the final amount is never below the principal.
    #[test]
    fn prop_compound_interest_not_below_principal(
        principal in principal(),
        rate in positive_rate(),
        time in 0i64..=40,
        compounds_per_year in 1u32..=12,
    ) {
        let calc = FinancialCalculator::default();
        let amount = calc
            .calculate_compound_interest_with_frequency(principal, rate, time, compounds_per_year)
            .unwrap();
        prop_assert!(
            amount >= principal,
            "Amount {} should not be below principal {}",
            amount, principal
        );
    }

    /// A zero rate returns the principal unchanged.
    #[test]
    fn prop_zero_rate_preserves_principal(
        principal in principal(),
        time in 0i64..=100,
        compounds_per_year in 1u32..=365,
    ) {
        let calc = FinancialCalculator::default();
        let amount = calc
            .calculate_compound_interest_with_frequency(principal, Decimal::ZERO, time, compounds_per_year)
            .unwrap();
        prop_assert_eq!(amount, principal);
    }

    /// Negative principal is always rejected as an invalid argument.
    #[test]
    fn prop_negative_principal_rejected(
        cents in 1i64..100_000_000,
        rate in positive_rate(),
        time in 0i64..=40,
    ) {
        let calc = FinancialCalculator::default();
        let result = calc.calculate_compound_interest(Decimal::new(-cents, 2), rate, time);
        prop_assert!(result.is_err_and(|err| err.is_invalid_argument()));
    }

    /// Compound interest is deterministic.
    #[test]
    fn prop_compound_interest_is_deterministic(
        principal in principal(),
        rate in positive_rate(),
        time in 0i64..=40,
    ) {
        let calc = FinancialCalculator::default();
        let first = calc.calculate_compound_interest(principal, rate, time);
        let second = calc.calculate_compound_interest(principal, rate, time);
        prop_assert_eq!(first, second);
    }

    /// ROI is deterministic and already rounded to 2 decimals.
    #[test]
    fn prop_roi_is_deterministic_and_rounded(
        investment in signed_amount(),
        return_amount in signed_amount(),
    ) {
        let calc = FinancialCalculator::default();
        let first = calc.calculate_roi(investment, return_amount).unwrap();
        let second = calc.calculate_roi(investment, return_amount).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(round_result(first), first);
    }

    /// Positive investments gain exactly when the return exceeds them.
    #[test]
    fn prop_roi_sign_follows_gain(
        cents in 1i64..100_000_000,
        return_amount in principal(),
    ) {
        let investment = Decimal::new(cents, 2);
        let calc = FinancialCalculator::default();
        let roi = calc.calculate_roi(investment, return_amount).unwrap();
        if return_amount > investment {
            prop_assert!(roi >= Decimal::ZERO);
        } else {
            prop_assert!(roi <= Decimal::ZERO);
        }
    }

    /// Conversion never fails for in-range amounts and always names the target.
    #[test]
    fn prop_conversion_mentions_target(
        amount in principal(),
        code in currency_code(),
    ) {
        let calc = FinancialCalculator::default();
        let first = calc.estimate_currency_conversion(amount, &code).unwrap();
        let second = calc.estimate_currency_conversion(amount, &code).unwrap();
        prop_assert!(first.contains(&code));
        prop_assert_eq!(first, second);
    }
}
