//! Currencies and conversion rates.
//!
//! Every price in the catalog is normalized to Indonesian Rupiah (IDR), the
//! base currency. IDR has no minor unit in practice, so normalized amounts
//! are whole rupiah.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;

/// Currencies a list price can be quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    IDR,
    EUR,
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "IDR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::IDR => "IDR",
            Currency::EUR => "EUR",
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol (e.g., "Rp").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::IDR => "Rp",
            Currency::EUR => "\u{20ac}",
            Currency::USD => "$",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "IDR" => Some(Currency::IDR),
            "EUR" => Some(Currency::EUR),
            "USD" => Some(Currency::USD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Multipliers converting foreign list prices to IDR.
///
/// Both rates are finite and strictly positive; construction and
/// deserialization reject anything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRates")]
pub struct CurrencyRates {
    eur: f64,
    usd: f64,
}

#[derive(Deserialize)]
struct RawRates {
    eur: f64,
    usd: f64,
}

impl TryFrom<RawRates> for CurrencyRates {
    type Error = CatalogError;

    fn try_from(raw: RawRates) -> Result<Self, Self::Error> {
        CurrencyRates::new(raw.eur, raw.usd)
    }
}

impl CurrencyRates {
    pub const DEFAULT_EUR: f64 = 19_000.0;
    pub const DEFAULT_USD: f64 = 16_000.0;

    /// Create a validated rate pair.
    pub fn new(eur: f64, usd: f64) -> Result<Self, CatalogError> {
        validate_rate(Currency::EUR, eur)?;
        validate_rate(Currency::USD, usd)?;
        Ok(Self { eur, usd })
    }

    pub fn eur(&self) -> f64 {
        self.eur
    }

    pub fn usd(&self) -> f64 {
        self.usd
    }

    /// Multiplier from `currency` to IDR.
    pub fn rate_for(&self, currency: Currency) -> f64 {
        match currency {
            Currency::IDR => 1.0,
            Currency::EUR => self.eur,
            Currency::USD => self.usd,
        }
    }
}

impl Default for CurrencyRates {
    fn default() -> Self {
        Self {
            eur: Self::DEFAULT_EUR,
            usd: Self::DEFAULT_USD,
        }
    }
}

fn validate_rate(currency: Currency, value: f64) -> Result<(), CatalogError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CatalogError::InvalidRate {
            currency: currency.code().to_string(),
            value,
        })
    }
}

/// Format a whole-rupiah amount the way id-ID locales do (e.g., "Rp 1.250.000").
pub fn format_idr(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{} {}", sign, Currency::IDR.symbol(), grouped)
}
