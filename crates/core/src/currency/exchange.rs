//! Exchange rate types and date-scoped rate lookup.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ConversionError;

/// Exchange rate between two currencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Source currency code.
    pub from_currency: String,
    /// Target currency code.
    pub to_currency: String,
    /// Exchange rate (1 from_currency = rate to_currency).
    pub rate: Decimal,
    /// Date this rate is effective.
    pub effective_date: NaiveDate,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    #[must_use]
    pub const fn new(
        from_currency: String,
        to_currency: String,
        rate: Decimal,
        effective_date: NaiveDate,
    ) -> Self {
        Self {
            from_currency,
            to_currency,
            rate,
            effective_date,
        }
    }

    /// Returns the inverse rate.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            from_currency: self.to_currency.clone(),
            to_currency: self.from_currency.clone(),
            rate: Decimal::ONE / self.rate,
            effective_date: self.effective_date,
        }
    }
}

/// Lookup for historical exchange rates.
///
/// Returns the rate to multiply one source-currency unit by to get
/// target-currency units, as of the given date. Same-currency pairs
/// return 1.
#[cfg_attr(test, mockall::automock)]
pub trait FxRateLookup {
    /// Resolves the rate for a currency pair as of a date.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::RateNotFound` if no rate is known for the
    /// pair on or before the date.
    fn rate(
        &self,
        from_currency: &str,
        to_currency: &str,
        as_of: NaiveDate,
    ) -> Result<Decimal, ConversionError>;
}

/// In-memory, date-scoped exchange rate store.
///
/// Lookup picks the most recent rate effective on or before the as-of date.
/// When no direct rate is stored for a pair, the reverse pair is consulted
/// and inverted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRateStore {
    rates: HashMap<(String, String), Vec<ExchangeRate>>,
}

impl InMemoryRateStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rate to the store.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::InvalidExchangeRate` if the rate is not
    /// positive, or `ConversionError::SameCurrency` if both codes match.
    pub fn add_rate(&mut self, rate: ExchangeRate) -> Result<(), ConversionError> {
        if rate.rate <= Decimal::ZERO {
            return Err(ConversionError::InvalidExchangeRate(rate.rate));
        }
        if rate.from_currency == rate.to_currency {
            return Err(ConversionError::SameCurrency);
        }
        let key = (rate.from_currency.clone(), rate.to_currency.clone());
        let entries = self.rates.entry(key).or_default();
        entries.push(rate);
        entries.sort_by_key(|entry| entry.effective_date);
        Ok(())
    }

    fn direct_rate(
        &self,
        from_currency: &str,
        to_currency: &str,
        as_of: NaiveDate,
    ) -> Option<&ExchangeRate> {
        let key = (from_currency.to_string(), to_currency.to_string());
        self.rates.get(&key).and_then(|entries| {
            entries
                .iter()
                .rev()
                .find(|entry| entry.effective_date <= as_of)
        })
    }
}

impl FxRateLookup for InMemoryRateStore {
    fn rate(
        &self,
        from_currency: &str,
        to_currency: &str,
        as_of: NaiveDate,
    ) -> Result<Decimal, ConversionError> {
        if from_currency == to_currency {
            return Ok(Decimal::ONE);
        }
        self.direct_rate(from_currency, to_currency, as_of)
            .map(|entry| entry.rate)
            .or_else(|| {
                self.direct_rate(to_currency, from_currency, as_of)
                    .map(|entry| entry.inverse().rate)
            })
            .ok_or_else(|| {
                ConversionError::RateNotFound(
                    from_currency.to_string(),
                    to_currency.to_string(),
                    as_of,
                )
            })
    }
}
