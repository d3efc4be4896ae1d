//! Type-safe price representation using decimal arithmetic.
//!
//! Product prices arrive from the rendering layer as display-formatted
//! strings ("20€", "15,50 €", "$20.50"). [`Price::parse`] turns those into
//! exact [`Decimal`] amounts; floating point is never involved.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`] from a display string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty or whitespace.
    #[error("price cannot be empty")]
    Empty,
    /// The input carries a currency symbol but no amount.
    #[error("price has no digits")]
    NoDigits,
    /// The input starts or ends with a symbol that is not a known currency.
    #[error("unrecognized currency symbol: {0:?}")]
    UnknownCurrency(char),
    /// The amount portion does not parse as a decimal number.
    #[error("malformed price: {0:?}")]
    Malformed(String),
}

/// A price with currency information.
///
/// ## Examples
///
/// ```
/// use lumiere_core::{CurrencyCode, Price};
///
/// let price = Price::parse("15,50 €").unwrap();
/// assert_eq!(price.currency, CurrencyCode::Eur);
/// assert_eq!(price.to_string(), "15.50 €");
///
/// assert!(Price::parse("").is_err());
/// assert!(Price::parse("gratuit").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., euros, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Parse a display-formatted price string.
    ///
    /// Accepts an optional leading or trailing currency symbol with
    /// optional surrounding whitespace, and either `.` or `,` as the
    /// decimal separator. A string without a symbol is assumed to be in
    /// the storefront's home currency (EUR).
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, carries an unknown currency
    /// symbol, or the amount portion is not a decimal number.
    pub fn parse(input: &str) -> Result<Self, PriceError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }

        let mut currency = None;
        let mut rest = trimmed;

        // Symbol may lead ("$20.50") or trail ("20€", "15,50 €").
        if let Some(first) = rest.chars().next()
            && !first.is_ascii_digit()
        {
            let code =
                CurrencyCode::from_symbol(first).ok_or(PriceError::UnknownCurrency(first))?;
            currency = Some(code);
            rest = rest.strip_prefix(first).unwrap_or(rest).trim_start();
        }
        if let Some(last) = rest.chars().next_back()
            && !last.is_ascii_digit()
        {
            let code = CurrencyCode::from_symbol(last).ok_or(PriceError::UnknownCurrency(last))?;
            if currency.replace(code).is_some() {
                return Err(PriceError::Malformed(input.to_owned()));
            }
            rest = rest.strip_suffix(last).unwrap_or(rest).trim_end();
        }
        if rest.is_empty() {
            return Err(PriceError::NoDigits);
        }

        // A single comma is the locale decimal separator ("15,50").
        let normalized = if rest.contains(',') && !rest.contains('.') {
            rest.replace(',', ".")
        } else {
            rest.to_owned()
        };

        let amount =
            Decimal::from_str(&normalized).map_err(|_| PriceError::Malformed(input.to_owned()))?;

        Ok(Self {
            amount,
            currency: currency.unwrap_or_default(),
        })
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // EUR renders with a trailing symbol, the others leading.
        match self.currency {
            CurrencyCode::Eur => write!(f, "{:.2} {}", self.amount, self.currency.symbol()),
            CurrencyCode::Usd | CurrencyCode::Gbp => {
                write!(f, "{}{:.2}", self.currency.symbol(), self.amount)
            }
        }
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    Eur,
    Usd,
    Gbp,
}

impl CurrencyCode {
    /// The display symbol for this currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eur => "€",
            Self::Usd => "$",
            Self::Gbp => "£",
        }
    }

    /// The ISO 4217 code for this currency.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
        }
    }

    /// Map a display symbol back to its currency.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '€' => Some(Self::Eur),
            '$' => Some(Self::Usd),
            '£' => Some(Self::Gbp),
            _ => None,
        }
    }
}
