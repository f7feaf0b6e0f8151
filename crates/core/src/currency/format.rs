//! Display formatting for minor-unit amounts.

use rust_decimal::Decimal;
use serde::Serialize;

use walletfx_shared::USD;

use super::error::ConversionError;
use super::exchange::FxRateLookup;
use super::metadata::CurrencyMetadataLookup;
use super::service::CurrencyConverter;

/// Display structure for a minor-unit amount.
#[derive(Debug, Clone, Serialize)]
pub struct AmountDisplay {
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Amount in minor units.
    pub amount: i64,
    /// Decimal string carrying the currency's full minor-unit scale
    /// (e.g., "120.00").
    pub formatted_amount: String,
    /// Decimal string with an all-zero fraction and trailing fractional
    /// zeros dropped (e.g., "120", "120.5").
    pub formatted_amount_truncated: String,
    /// The decimal value itself.
    pub raw_amount: Decimal,
}

impl<M, F> CurrencyConverter<M, F>
where
    M: CurrencyMetadataLookup,
    F: FxRateLookup,
{
    /// Builds the display structure for a minor-unit amount.
    ///
    /// A missing amount defaults to 0 and a missing currency code to USD.
    pub fn format_amount(
        &self,
        amount: Option<i64>,
        currency_code: Option<&str>,
    ) -> Result<AmountDisplay, ConversionError> {
        let amount = amount.unwrap_or(0);
        let currency_code = currency_code.unwrap_or(USD);
        let money = self.to_money(amount, currency_code)?;
        Ok(AmountDisplay {
            currency_code: currency_code.to_string(),
            amount,
            formatted_amount: money.amount.to_string(),
            formatted_amount_truncated: money.amount.normalize().to_string(),
            raw_amount: money.amount,
        })
    }
}
