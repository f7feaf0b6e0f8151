//! Property-based tests for minor-unit conversion.
//!
//! - Round-trip exactness for integral minor units
//! - Single-rounding-step bounds for rate conversion
//! - Determinism of the numeric core

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::{convert_minor_units, to_decimal_amount, to_minor_unit_amount};

/// Strategy to generate minor-unit amounts that survive scaling to any
/// supported exponent without overflow.
fn minor_amount() -> impl Strategy<Value = i64> {
    -1_000_000_000_000i64..1_000_000_000_000i64
}

/// Strategy to generate amounts small enough that amount * rate * 10^6
/// still fits in an i64 minor-unit result.
fn convertible_amount() -> impl Strategy<Value = i64> {
    -100_000_000i64..100_000_000i64
}

/// Strategy to generate minor-unit exponents (0 to 6 covers real currencies).
fn minor_unit() -> impl Strategy<Value = i32> {
    0i32..=6
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* integral minor-unit amount, decimal conversion and back
    /// SHALL reproduce the amount exactly (no intermediate rounding).
    #[test]
    fn prop_round_trip_is_exact(
        amount in minor_amount(),
        minor_unit in minor_unit(),
    ) {
        let decimal = to_decimal_amount(amount, minor_unit).unwrap();
        let back = to_minor_unit_amount(decimal, minor_unit).unwrap();
        prop_assert_eq!(back, amount);
    }

    /// *For any* amount, a rate of 1 between equal exponents SHALL be the
    /// identity conversion.
    #[test]
    fn prop_unit_rate_is_identity(
        amount in minor_amount(),
        minor_unit in minor_unit(),
    ) {
        let converted = convert_minor_units(amount, minor_unit, minor_unit, Decimal::ONE).unwrap();
        prop_assert_eq!(converted, amount);
    }

    /// *For any* amount and rate, conversion SHALL be deterministic.
    #[test]
    fn prop_convert_is_deterministic(
        amount in convertible_amount(),
        source in minor_unit(),
        target in minor_unit(),
        rate in positive_rate(),
    ) {
        let first = convert_minor_units(amount, source, target, rate).unwrap();
        let second = convert_minor_units(amount, source, target, rate).unwrap();
        prop_assert_eq!(first, second);
    }

    /// *For any* non-negative amount, the single half-up rounding step SHALL
    /// land within one target minor unit of the exact product.
    #[test]
    fn prop_single_rounding_step_error_bound(
        amount in 0i64..100_000_000i64,
        source in minor_unit(),
        target in minor_unit(),
        rate in positive_rate(),
    ) {
        let converted = convert_minor_units(amount, source, target, rate).unwrap();
        let exact = to_decimal_amount(amount, source).unwrap() * rate;
        let converted_back = to_decimal_amount(converted, target).unwrap();
        let error = (converted_back - exact).abs();
        let half_unit = Decimal::new(5, 1) * to_decimal_amount(1, target).unwrap();
        prop_assert!(error <= half_unit, "error {} exceeds half a minor unit", error);
    }
}
