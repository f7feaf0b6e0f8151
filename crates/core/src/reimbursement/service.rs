//! Reimbursement pricing and adjustment service.

use rust_decimal::Decimal;
use tracing::debug;

use walletfx_shared::{Money, USD};

use crate::currency::exchange::FxRateLookup;
use crate::currency::metadata::CurrencyMetadataLookup;
use crate::currency::{ConversionError, CurrencyConverter};

use super::error::ReimbursementError;
use super::types::ReimbursementRequest;

/// Prices reimbursement requests and applies post-hoc USD adjustments.
#[derive(Debug, Clone)]
pub struct ReimbursementService<M, F> {
    converter: CurrencyConverter<M, F>,
}

impl<M, F> ReimbursementService<M, F>
where
    M: CurrencyMetadataLookup,
    F: FxRateLookup,
{
    /// Creates a service over the given converter.
    pub const fn new(converter: CurrencyConverter<M, F>) -> Self {
        Self { converter }
    }

    /// Returns the underlying converter.
    pub const fn converter(&self) -> &CurrencyConverter<M, F> {
        &self.converter
    }

    /// Prices a request: converts the transaction amount into USD and into
    /// the wallet's benefit currency, both as of the request's creation date.
    ///
    /// All amount, rate, and currency fields are written together after both
    /// conversions succeed; a failed precondition or conversion leaves the
    /// request untouched.
    ///
    /// # Errors
    ///
    /// - `ReimbursementError::MissingCategory` without a benefit-currency
    ///   association
    /// - `ReimbursementError::CustomRateNonUsdBenefit` when a custom rate is
    ///   supplied for a non-USD benefit plan
    /// - `ReimbursementError::CustomRateUsdTransaction` when a custom rate is
    ///   supplied for a transaction already in USD
    /// - `ReimbursementError::DirectPaymentNonUsd` for a non-USD transaction
    ///   on a direct-payment wallet
    /// - any `ConversionError` from the currency engine
    pub fn price_request(
        &self,
        transaction: &Money,
        request: &mut ReimbursementRequest,
        custom_rate: Option<Decimal>,
    ) -> Result<(), ReimbursementError> {
        let category = request
            .category
            .as_ref()
            .ok_or(ReimbursementError::MissingCategory(request.id))?;
        let benefit_currency = category.benefit_currency_code.clone();

        if custom_rate.is_some() {
            if benefit_currency != USD {
                return Err(ReimbursementError::CustomRateNonUsdBenefit(benefit_currency));
            }
            if transaction.is_usd() {
                return Err(ReimbursementError::CustomRateUsdTransaction);
            }
        }
        if !transaction.is_usd() && category.direct_payment_enabled {
            return Err(ReimbursementError::DirectPaymentNonUsd(
                transaction.currency_code.clone(),
            ));
        }

        let as_of = request.created_at.date_naive();
        let transaction_amount = self.converter.to_minor_units(transaction)?;
        let (usd_amount, usd_rate) = self.converter.convert(
            transaction_amount,
            &transaction.currency_code,
            USD,
            as_of,
            custom_rate,
        )?;
        let (benefit_amount, benefit_rate) = self.converter.convert(
            transaction_amount,
            &transaction.currency_code,
            &benefit_currency,
            as_of,
            custom_rate,
        )?;

        debug!(
            request_id = %request.id,
            %as_of,
            transaction_amount,
            usd_amount,
            benefit_amount,
            %usd_rate,
            %benefit_rate,
            "priced reimbursement request"
        );

        request.transaction_amount = Some(transaction_amount);
        request.transaction_currency_code = Some(transaction.currency_code.clone());
        request.benefit_currency_code = Some(benefit_currency);
        request.usd_amount = Some(usd_amount);
        request.transaction_to_usd_rate = Some(usd_rate);
        request.amount = Some(benefit_amount);
        request.transaction_to_benefit_rate = Some(benefit_rate);
        Ok(())
    }

    /// Re-derives a request's amounts after its USD-equivalent amount has
    /// been corrected.
    ///
    /// The rates locked in at pricing time are reused rather than re-queried:
    /// an adjustment corrects a known historical transaction and must stay
    /// internally consistent with the original pricing. The inverse of the
    /// stored transaction->USD rate takes the adjusted USD amount back to the
    /// transaction currency; the stored transaction->benefit rate takes it
    /// forward to the benefit currency.
    ///
    /// Legacy records without a stored benefit currency predate multi-currency
    /// pricing; for those the adjusted USD amount is written straight to
    /// `amount`.
    ///
    /// # Errors
    ///
    /// Returns `ReimbursementError::AdjustmentMissingField` if any prior
    /// amount, rate, or currency field needed for the math is unset.
    pub fn adjust_request(
        &self,
        request: &mut ReimbursementRequest,
        adjusted_usd_amount: i64,
    ) -> Result<(), ReimbursementError> {
        let Some(benefit_currency) = request.benefit_currency_code.clone() else {
            request.amount = Some(adjusted_usd_amount);
            return Ok(());
        };

        let missing = |field: &'static str| ReimbursementError::AdjustmentMissingField {
            request_id: request.id,
            field,
        };
        request.amount.ok_or_else(|| missing("amount"))?;
        let usd_amount = request.usd_amount.ok_or_else(|| missing("usd_amount"))?;
        request
            .transaction_amount
            .ok_or_else(|| missing("transaction_amount"))?;

        if adjusted_usd_amount == usd_amount {
            return Ok(());
        }

        let transaction_currency = request
            .transaction_currency_code
            .clone()
            .ok_or_else(|| missing("transaction_currency_code"))?;
        let usd_rate = request
            .transaction_to_usd_rate
            .ok_or_else(|| missing("transaction_to_usd_rate"))?;
        let benefit_rate = request
            .transaction_to_benefit_rate
            .ok_or_else(|| missing("transaction_to_benefit_rate"))?;
        if usd_rate <= Decimal::ZERO {
            return Err(ConversionError::InvalidExchangeRate(usd_rate).into());
        }

        let inverse_rate = Decimal::ONE / usd_rate;
        let transaction_amount = self.converter.convert_with_rate(
            adjusted_usd_amount,
            USD,
            &transaction_currency,
            inverse_rate,
        )?;
        let amount = self.converter.convert_with_rate(
            transaction_amount,
            &transaction_currency,
            &benefit_currency,
            benefit_rate,
        )?;

        debug!(
            request_id = %request.id,
            adjusted_usd_amount,
            transaction_amount,
            amount,
            "adjusted reimbursement request"
        );

        request.usd_amount = Some(adjusted_usd_amount);
        request.transaction_amount = Some(transaction_amount);
        request.amount = Some(amount);
        Ok(())
    }
}
