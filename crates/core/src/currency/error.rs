//! Currency conversion error types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Currency conversion errors.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Minor-unit exponent is negative.
    #[error("currency minor unit cannot be negative: {0}")]
    NegativeMinorUnit(i32),

    /// Minor-unit exponent exceeds the decimal scale the engine supports.
    #[error("currency minor unit {0} exceeds the supported scale of 28")]
    MinorUnitOutOfRange(u32),

    /// Converted amount does not fit in a minor-unit integer.
    #[error("converted amount does not fit in a minor-unit integer")]
    AmountOutOfRange,

    /// Exchange rate must be positive.
    #[error("exchange rate must be positive, got {0}")]
    InvalidExchangeRate(Decimal),

    /// Currency not found.
    #[error("currency '{0}' not found")]
    UnknownCurrency(String),

    /// Exchange rate not found.
    #[error("no exchange rate found for {0}/{1} on or before {2}")]
    RateNotFound(String, String, NaiveDate),

    /// Currencies must be different.
    #[error("from and to currencies must be different")]
    SameCurrency,
}
