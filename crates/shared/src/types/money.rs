//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The currency code every reimbursement request is priced against.
pub const USD: &str = "USD";

/// Represents a monetary amount with currency.
///
/// The amount is expressed in the currency's natural decimal unit
/// (e.g., 12.34 for USD), never in minor units. Uses `Decimal`
/// internally to avoid floating-point precision errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in the currency's natural decimal unit.
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "USD", "JPY").
    pub currency_code: String,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub fn new(amount: Decimal, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into(),
        }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency_code: impl Into<String>) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency_code: currency_code.into(),
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns true if this amount is denominated in USD.
    #[must_use]
    pub fn is_usd(&self) -> bool {
        self.currency_code == USD
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency_code)
    }
}
