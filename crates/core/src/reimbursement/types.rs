//! Reimbursement domain types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The wallet category a request is filed under.
///
/// Carries the benefit-currency association and the wallet's payment mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletCategory {
    /// Currency the wallet's benefit balance is denominated in.
    pub benefit_currency_code: String,
    /// Whether payments flow directly to the provider (USD-only by policy).
    pub direct_payment_enabled: bool,
}

impl WalletCategory {
    /// Creates a category association.
    #[must_use]
    pub fn new(benefit_currency_code: impl Into<String>, direct_payment_enabled: bool) -> Self {
        Self {
            benefit_currency_code: benefit_currency_code.into(),
            direct_payment_enabled,
        }
    }
}

/// A reimbursement request's priced amounts.
///
/// All amounts are integer minor units. The amount, rate, and currency
/// fields are written together by pricing and adjustment, never partially;
/// a record with only some of them set is a data-integrity error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReimbursementRequest {
    /// Request id.
    pub id: Uuid,
    /// When the request record was created. Conversions are priced as of
    /// this date, not the service date, for consistent historical rate
    /// lookup.
    pub created_at: DateTime<Utc>,
    /// When the underlying care service started.
    pub service_start_date: NaiveDate,
    /// Category/benefit-currency association; pricing fails without it.
    pub category: Option<WalletCategory>,
    /// Amount in the wallet's benefit currency (minor units).
    pub amount: Option<i64>,
    /// USD-equivalent amount (minor units).
    pub usd_amount: Option<i64>,
    /// Amount in the original transaction currency (minor units).
    pub transaction_amount: Option<i64>,
    /// Original transaction currency.
    pub transaction_currency_code: Option<String>,
    /// Benefit currency the request was priced into.
    pub benefit_currency_code: Option<String>,
    /// Rate applied for transaction -> USD at pricing time.
    pub transaction_to_usd_rate: Option<Decimal>,
    /// Rate applied for transaction -> benefit currency at pricing time.
    pub transaction_to_benefit_rate: Option<Decimal>,
}

impl ReimbursementRequest {
    /// Creates an unpriced request.
    #[must_use]
    pub fn new(
        created_at: DateTime<Utc>,
        service_start_date: NaiveDate,
        category: Option<WalletCategory>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at,
            service_start_date,
            category,
            amount: None,
            usd_amount: None,
            transaction_amount: None,
            transaction_currency_code: None,
            benefit_currency_code: None,
            transaction_to_usd_rate: None,
            transaction_to_benefit_rate: None,
        }
    }

    /// Returns true if the request has been priced.
    #[must_use]
    pub const fn is_priced(&self) -> bool {
        self.amount.is_some()
            && self.usd_amount.is_some()
            && self.transaction_amount.is_some()
            && self.transaction_to_usd_rate.is_some()
            && self.transaction_to_benefit_rate.is_some()
    }
}
