//! Minor-unit conversion math.
//!
//! CRITICAL: Rounding strategy for minor-unit boundaries:
//! - Round half-up (midpoint away from zero), not banker's rounding
//! - Round exactly once, at the target minor-unit boundary
//! - Minor-unit integers convert to decimals exactly, no rounding

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use super::error::ConversionError;

/// Maximum minor-unit exponent `Decimal` can represent as a scale.
pub const MAX_SCALE: u32 = 28;

fn scale_for(minor_unit: i32) -> Result<u32, ConversionError> {
    let scale =
        u32::try_from(minor_unit).map_err(|_| ConversionError::NegativeMinorUnit(minor_unit))?;
    if scale > MAX_SCALE {
        return Err(ConversionError::MinorUnitOutOfRange(scale));
    }
    Ok(scale)
}

/// Converts an integer minor-unit amount into its decimal representation.
///
/// Exact division by 10^`minor_unit`; minor units are always integral so
/// no rounding occurs in this direction. An exponent of 0 returns the
/// amount unchanged (JPY-style currencies).
///
/// # Errors
///
/// Returns `ConversionError::NegativeMinorUnit` if `minor_unit` is negative.
pub fn to_decimal_amount(amount: i64, minor_unit: i32) -> Result<Decimal, ConversionError> {
    let scale = scale_for(minor_unit)?;
    Ok(Decimal::new(amount, scale))
}

/// Converts a decimal amount into integer minor units.
///
/// Multiplies by 10^`minor_unit` and rounds half-up (ties away from zero):
/// 1.135 at 2 decimal places becomes 114, not 113. Amounts with fewer
/// fractional digits than `minor_unit` are zero-padded (1.12 at 4 decimal
/// places becomes 11200).
///
/// # Errors
///
/// Returns `ConversionError::NegativeMinorUnit` if `minor_unit` is negative,
/// or `ConversionError::AmountOutOfRange` if the result overflows `i64`.
pub fn to_minor_unit_amount(amount: Decimal, minor_unit: i32) -> Result<i64, ConversionError> {
    let scale = scale_for(minor_unit)?;
    let mut rounded = amount.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(scale);
    if rounded.scale() != scale {
        return Err(ConversionError::AmountOutOfRange);
    }
    i64::try_from(rounded.mantissa()).map_err(|_| ConversionError::AmountOutOfRange)
}

/// Converts a minor-unit amount from one currency scale to another via a rate.
///
/// Source minor units -> source decimal -> multiply by `rate` -> target minor
/// units, with a single half-up rounding step at the final boundary. Rounding
/// is never compounded across stages: 100 at source exponent 2 with rate
/// 153.40 to exponent 0 yields 153, and rate 153.50 yields 154.
///
/// Assumes `rate` has already been validated positive by the caller
/// (`CurrencyConverter::convert` enforces this).
///
/// # Errors
///
/// Returns `ConversionError::NegativeMinorUnit` for a negative exponent or
/// `ConversionError::AmountOutOfRange` if the product overflows.
pub fn convert_minor_units(
    amount: i64,
    source_minor_unit: i32,
    target_minor_unit: i32,
    rate: Decimal,
) -> Result<i64, ConversionError> {
    let source_amount = to_decimal_amount(amount, source_minor_unit)?;
    let target_amount = source_amount
        .checked_mul(rate)
        .ok_or(ConversionError::AmountOutOfRange)?;
    to_minor_unit_amount(target_amount, target_minor_unit)
}
