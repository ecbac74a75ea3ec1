//! Catalog configuration.
//!
//! ```toml
//! [rates]
//! eur = 19000
//! usd = 16000
//!
//! [defaults]
//! sort = "name_asc"
//! view_mode = "1"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::browse::{CatalogView, ViewMode};
use crate::error::CatalogError;
use crate::money::CurrencyRates;
use crate::search::SortOption;

/// Catalog configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Conversion rates to IDR.
    #[serde(default)]
    pub rates: CurrencyRates,

    /// Initial view state.
    #[serde(default)]
    pub defaults: ViewDefaults,
}

/// View state a fresh session starts from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewDefaults {
    #[serde(default)]
    pub sort: SortOption,
    #[serde(default)]
    pub view_mode: ViewMode,
}

impl CatalogConfig {
    /// Load config from a file. `.json` files are JSON, anything else TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::ConfigRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, CatalogError> {
        toml::to_string_pretty(self).map_err(|e| CatalogError::ConfigParse(e.to_string()))
    }

    /// View state built from the configured defaults, with an empty query.
    pub fn initial_view(&self) -> CatalogView {
        CatalogView::new()
            .with_sort(self.defaults.sort)
            .with_view_mode(self.defaults.view_mode)
    }
}
