//! Multi-currency handling: minor-unit math, metadata, and exchange rates.
//!
//! This module implements the currency conversion engine:
//! - Minor-unit <-> decimal conversion with round-half-up at minor-unit boundaries
//! - Currency metadata lookup (ISO 4217 minor-unit exponents)
//! - Date-scoped exchange rate lookup
//! - The converter engine tying the two collaborators together
//! - Display formatting for minor-unit amounts

pub mod conversion;
pub mod error;
pub mod exchange;
pub mod format;
pub mod metadata;
pub mod service;

#[cfg(test)]
mod props;

pub use conversion::{convert_minor_units, to_decimal_amount, to_minor_unit_amount};
pub use error::ConversionError;
pub use exchange::{ExchangeRate, FxRateLookup, InMemoryRateStore};
pub use format::AmountDisplay;
pub use metadata::{CurrencyInfo, CurrencyMetadataLookup, CurrencyRegistry};
pub use service::CurrencyConverter;
