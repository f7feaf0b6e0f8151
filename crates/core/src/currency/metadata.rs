//! Currency metadata lookup: ISO 4217 minor-unit exponents.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::ConversionError;

/// Lookup for per-currency metadata.
///
/// Implemented by the in-memory [`CurrencyRegistry`] here and by whatever
/// currency store the embedding system provides.
#[cfg_attr(test, mockall::automock)]
pub trait CurrencyMetadataLookup {
    /// Returns the minor-unit exponent for a currency code.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::UnknownCurrency` for an unknown code.
    fn minor_unit(&self, currency_code: &str) -> Result<u32, ConversionError>;
}

/// Metadata for a single currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyInfo {
    /// ISO 4217 currency code.
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Display symbol.
    pub symbol: String,
    /// Minor-unit exponent (0 = no fractional subunit).
    pub minor_unit: u32,
}

/// In-memory currency registry seeded with common currencies.
#[derive(Debug, Clone)]
pub struct CurrencyRegistry {
    currencies: HashMap<String, CurrencyInfo>,
}

const SEED_CURRENCIES: &[(&str, &str, &str, u32)] = &[
    ("USD", "US Dollar", "$", 2),
    ("EUR", "Euro", "\u{20ac}", 2),
    ("GBP", "British Pound", "\u{a3}", 2),
    ("JPY", "Japanese Yen", "\u{a5}", 0),
    ("IDR", "Indonesian Rupiah", "Rp", 0),
    ("SGD", "Singapore Dollar", "S$", 2),
    ("AUD", "Australian Dollar", "A$", 2),
    ("CNY", "Chinese Yuan", "\u{a5}", 2),
    ("MYR", "Malaysian Ringgit", "RM", 2),
    ("THB", "Thai Baht", "\u{e3f}", 2),
    ("PHP", "Philippine Peso", "\u{20b1}", 2),
    ("VND", "Vietnamese Dong", "\u{20ab}", 0),
    ("KRW", "South Korean Won", "\u{20a9}", 0),
    ("INR", "Indian Rupee", "\u{20b9}", 2),
    ("HKD", "Hong Kong Dollar", "HK$", 2),
    ("TWD", "Taiwan Dollar", "NT$", 2),
    ("CHF", "Swiss Franc", "CHF", 2),
    ("CAD", "Canadian Dollar", "C$", 2),
    ("NZD", "New Zealand Dollar", "NZ$", 2),
    ("SAR", "Saudi Riyal", "SAR", 2),
    ("AED", "UAE Dirham", "AED", 2),
    ("BRL", "Brazilian Real", "R$", 2),
    ("MXN", "Mexican Peso", "MX$", 2),
    ("ZAR", "South African Rand", "R", 2),
    ("TRY", "Turkish Lira", "\u{20ba}", 2),
    ("PLN", "Polish Zloty", "z\u{142}", 2),
    ("SEK", "Swedish Krona", "kr", 2),
    ("NOK", "Norwegian Krone", "kr", 2),
    ("DKK", "Danish Krone", "kr", 2),
    ("BHD", "Bahraini Dinar", "BD", 3),
    ("KWD", "Kuwaiti Dinar", "KD", 3),
    ("OMR", "Omani Rial", "OMR", 3),
];

impl CurrencyRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            currencies: HashMap::new(),
        }
    }

    /// Adds or replaces a currency, consuming and returning the registry.
    #[must_use]
    pub fn with_currency(mut self, info: CurrencyInfo) -> Self {
        self.currencies.insert(info.code.to_uppercase(), info);
        self
    }

    /// Returns the full metadata for a currency code, if known.
    #[must_use]
    pub fn get(&self, currency_code: &str) -> Option<&CurrencyInfo> {
        self.currencies.get(&currency_code.to_uppercase())
    }
}

impl Default for CurrencyRegistry {
    /// Registry seeded with common currencies, matching the platform's
    /// currency table.
    fn default() -> Self {
        let currencies = SEED_CURRENCIES
            .iter()
            .map(|&(code, name, symbol, minor_unit)| {
                (
                    code.to_string(),
                    CurrencyInfo {
                        code: code.to_string(),
                        name: name.to_string(),
                        symbol: symbol.to_string(),
                        minor_unit,
                    },
                )
            })
            .collect();
        Self { currencies }
    }
}

impl CurrencyMetadataLookup for CurrencyRegistry {
    fn minor_unit(&self, currency_code: &str) -> Result<u32, ConversionError> {
        self.get(currency_code)
            .map(|info| info.minor_unit)
            .ok_or_else(|| ConversionError::UnknownCurrency(currency_code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_exponents() {
        let registry = CurrencyRegistry::default();
        assert_eq!(registry.minor_unit("USD").unwrap(), 2);
        assert_eq!(registry.minor_unit("JPY").unwrap(), 0);
        assert_eq!(registry.minor_unit("BHD").unwrap(), 3);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = CurrencyRegistry::default();
        assert_eq!(registry.minor_unit("usd").unwrap(), 2);
    }

    #[test]
    fn test_unknown_currency() {
        let registry = CurrencyRegistry::default();
        let err = registry.minor_unit("XXX").unwrap_err();
        assert!(matches!(err, ConversionError::UnknownCurrency(code) if code == "XXX"));
    }

    #[test]
    fn test_with_currency_extends_registry() {
        let registry = CurrencyRegistry::empty().with_currency(CurrencyInfo {
            code: "CLF".to_string(),
            name: "Unidad de Fomento".to_string(),
            symbol: "UF".to_string(),
            minor_unit: 4,
        });
        assert_eq!(registry.minor_unit("CLF").unwrap(), 4);
    }
}
