//! Catalog error types.

use thiserror::Error;

/// Errors raised when a caller hands the engine data that breaks its contract.
///
/// The engine defaults missing fields instead of failing, so these only cover
/// values that would otherwise produce nonsensical prices or configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Discount percentage outside 0-100.
    #[error("Invalid discount value for {id}: {value} (expected 0-100)")]
    InvalidDiscountValue { id: String, value: f64 },

    /// Currency rate that is not a finite positive multiplier.
    #[error("Invalid {currency} rate: {value}")]
    InvalidRate { currency: String, value: f64 },

    /// Monetary amount that is negative or not finite.
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    /// Sort option identifier not recognised.
    #[error("Unknown sort option: {0}")]
    UnknownSortOption(String),

    /// Config file could not be read.
    #[error("Failed to read config file {path}: {reason}")]
    ConfigRead { path: String, reason: String },

    /// Config content could not be parsed.
    #[error("Failed to parse config: {0}")]
    ConfigParse(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::ConfigParse(e.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(e: toml::de::Error) -> Self {
        CatalogError::ConfigParse(e.to_string())
    }
}
