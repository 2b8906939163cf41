//! Type-safe price representation using decimal arithmetic.
//!
//! The Storefront API sends money as a decimal string plus an ISO 4217 code.
//! [`Price`] is the parsed form; the badge rules shown on product cards
//! (free shipping, discount) are defined here so every view agrees on them.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum price (in [`CurrencyCode::USD`]) that qualifies for free shipping.
pub const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(70, 0, 0, false, 0);

/// Errors that can occur when parsing a price.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    /// The amount is not a decimal number.
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),
    /// The currency code is not one the storefront formats natively.
    #[error("unsupported currency: {0:?}")]
    UnsupportedCurrency(String),
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Parse a price from the API's string representation.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::InvalidAmount` if `amount` is not a decimal, or
    /// `PriceError::UnsupportedCurrency` for an unknown currency code.
    pub fn parse(amount: &str, currency_code: &str) -> Result<Self, PriceError> {
        let amount = parse_amount(amount)?;
        let currency_code = currency_code.parse()?;
        Ok(Self::new(amount, currency_code))
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency_code.symbol(), self.amount.round_dp(2))
    }

    /// Whether a product starting at this price ships for free.
    #[must_use]
    pub fn qualifies_for_free_shipping(&self) -> bool {
        self.currency_code == CurrencyCode::USD && self.amount >= FREE_SHIPPING_THRESHOLD
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Parse a decimal amount string, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns `PriceError::InvalidAmount` if the string is not a decimal.
pub fn parse_amount(amount: &str) -> Result<Decimal, PriceError> {
    Decimal::from_str(amount.trim()).map_err(|_| PriceError::InvalidAmount(amount.to_string()))
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::CAD => "CA$",
            Self::AUD => "A$",
        }
    }

    /// The ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

impl FromStr for CurrencyCode {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            other => Err(PriceError::UnsupportedCurrency(other.to_string())),
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        let price = Price::parse("19.99", "USD").unwrap();
        assert_eq!(price.amount, Decimal::new(1999, 2));
        assert_eq!(price.currency_code, CurrencyCode::USD);
    }

    #[test]
    fn test_parse_invalid_amount() {
        assert!(matches!(
            Price::parse("abc", "USD"),
            Err(PriceError::InvalidAmount(_))
        ));
        assert!(matches!(
            Price::parse("", "USD"),
            Err(PriceError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_parse_unsupported_currency() {
        assert_eq!(
            Price::parse("10.0", "JPY"),
            Err(PriceError::UnsupportedCurrency("JPY".to_string()))
        );
    }

    #[test]
    fn test_display_pads_to_two_decimals() {
        assert_eq!(Price::parse("70.0", "USD").unwrap().display(), "$70.00");
        assert_eq!(Price::parse("5", "EUR").unwrap().display(), "€5.00");
        assert_eq!(Price::parse("12.345", "GBP").unwrap().display(), "£12.35");
    }

    #[test]
    fn test_free_shipping_threshold() {
        assert!(Price::parse("70.0", "USD").unwrap().qualifies_for_free_shipping());
        assert!(Price::parse("129.99", "USD").unwrap().qualifies_for_free_shipping());
        assert!(!Price::parse("69.99", "USD").unwrap().qualifies_for_free_shipping());
    }

    #[test]
    fn test_free_shipping_requires_usd() {
        assert!(!Price::parse("100.0", "EUR").unwrap().qualifies_for_free_shipping());
        assert!(!Price::parse("100.0", "CAD").unwrap().qualifies_for_free_shipping());
    }

    #[test]
    fn test_currency_code_round_trip() {
        for code in [
            CurrencyCode::USD,
            CurrencyCode::EUR,
            CurrencyCode::GBP,
            CurrencyCode::CAD,
            CurrencyCode::AUD,
        ] {
            assert_eq!(code.code().parse::<CurrencyCode>().unwrap(), code);
        }
    }

    #[test]
    fn test_price_serializes_amount_as_string() {
        let price = Price::parse("70.00", "USD").unwrap();
        let json = serde_json::to_value(price).unwrap();
        assert_eq!(json["amount"], "70.00");
        assert_eq!(json["currency_code"], "USD");
    }
}
