//! The currency converter engine.
//!
//! Ties the minor-unit math to the two collaborators: a currency metadata
//! lookup (minor-unit exponents) and an FX rate lookup (date-scoped rates).
//! The engine is stateless across calls; all state lives in the collaborators.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use walletfx_shared::Money;

use super::conversion::{convert_minor_units, to_decimal_amount, to_minor_unit_amount};
use super::error::ConversionError;
use super::exchange::FxRateLookup;
use super::metadata::CurrencyMetadataLookup;

/// Converts minor-unit amounts between currencies.
#[derive(Debug, Clone)]
pub struct CurrencyConverter<M, F> {
    metadata: M,
    rates: F,
}

impl<M, F> CurrencyConverter<M, F>
where
    M: CurrencyMetadataLookup,
    F: FxRateLookup,
{
    /// Creates a converter over the given collaborators.
    pub const fn new(metadata: M, rates: F) -> Self {
        Self { metadata, rates }
    }

    fn exponent(&self, currency_code: &str) -> Result<i32, ConversionError> {
        let minor_unit = self.metadata.minor_unit(currency_code)?;
        i32::try_from(minor_unit).map_err(|_| ConversionError::MinorUnitOutOfRange(minor_unit))
    }

    /// Converts an integer minor-unit amount into a `Money` value.
    ///
    /// Performs exactly one metadata lookup.
    pub fn to_money(&self, amount: i64, currency_code: &str) -> Result<Money, ConversionError> {
        let minor_unit = self.exponent(currency_code)?;
        let decimal_amount = to_decimal_amount(amount, minor_unit)?;
        Ok(Money::new(decimal_amount, currency_code))
    }

    /// Converts a `Money` value into integer minor units for its currency.
    pub fn to_minor_units(&self, money: &Money) -> Result<i64, ConversionError> {
        let minor_unit = self.exponent(&money.currency_code)?;
        to_minor_unit_amount(money.amount, minor_unit)
    }

    /// Converts a minor-unit amount between currencies.
    ///
    /// Uses `rate` when supplied, otherwise resolves one from the FX lookup
    /// keyed by the currency pair and as-of date. Returns the converted
    /// amount together with the rate actually used, so callers can persist
    /// the rate for audit.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::InvalidExchangeRate` if the resolved rate is
    /// not positive, plus any metadata or rate lookup failure.
    pub fn convert(
        &self,
        amount: i64,
        source_currency_code: &str,
        target_currency_code: &str,
        as_of: NaiveDate,
        rate: Option<Decimal>,
    ) -> Result<(i64, Decimal), ConversionError> {
        let rate = match rate {
            Some(rate) => rate,
            None => self
                .rates
                .rate(source_currency_code, target_currency_code, as_of)?,
        };
        let converted =
            self.convert_with_rate(amount, source_currency_code, target_currency_code, rate)?;
        Ok((converted, rate))
    }

    /// Converts a minor-unit amount between currencies with a known rate.
    ///
    /// This is the dateless variant used when a previously locked-in rate is
    /// being reapplied (e.g., reimbursement adjustments).
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::InvalidExchangeRate` if `rate` is not
    /// positive.
    pub fn convert_with_rate(
        &self,
        amount: i64,
        source_currency_code: &str,
        target_currency_code: &str,
        rate: Decimal,
    ) -> Result<i64, ConversionError> {
        if rate <= Decimal::ZERO {
            return Err(ConversionError::InvalidExchangeRate(rate));
        }
        let source_minor_unit = self.exponent(source_currency_code)?;
        let target_minor_unit = self.exponent(target_currency_code)?;
        convert_minor_units(amount, source_minor_unit, target_minor_unit, rate)
    }
}
