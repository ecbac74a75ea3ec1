//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use catalog_core::catalog::Product;
use catalog_core::CatalogConfig;
use serde::de::DeserializeOwned;

use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["catalog.toml", ".catalog.toml", "catalog.json"];

/// Execution context for CLI commands.
pub struct Context {
    pub config: CatalogConfig,
    pub output: Output,
    pub cwd: PathBuf,
}

impl Context {
    /// Load context, using an explicit config path or the nearest config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = match config_path {
            Some(path) => CatalogConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path))?,
            None => Self::find_config(&cwd, &output).unwrap_or_default(),
        };

        Ok(Self { config, output, cwd })
    }

    /// Walk up from `start` looking for a config file.
    fn find_config(start: &Path, output: &Output) -> Option<CatalogConfig> {
        for dir in start.ancestors() {
            for name in CONFIG_NAMES {
                let path = dir.join(name);
                if !path.exists() {
                    continue;
                }
                match CatalogConfig::load(&path) {
                    Ok(config) => {
                        output.debug(&format!("Using config {}", path.display()));
                        return Some(config);
                    }
                    Err(e) => output.warn(&format!("Ignoring {}: {}", path.display(), e)),
                }
            }
        }
        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = PathBuf::from(path);
        if path.is_absolute() {
            path
        } else {
            self.cwd.join(path)
        }
    }

    /// Read a JSON fixture relative to the working directory.
    pub fn read_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let full = self.resolve_path(path);
        let content = std::fs::read_to_string(&full)
            .with_context(|| format!("Failed to read {}", full.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON: {}", full.display()))
    }

    /// Read a product fixture, deriving SKUs and keyword indexes it lacks.
    pub fn load_products(&self, path: &str) -> Result<Vec<Product>> {
        let products: Vec<Product> = self.read_json(path)?;
        let missing = products
            .iter()
            .filter(|p| p.sku.is_empty() || p.search_keywords.is_empty())
            .count();
        if missing > 0 {
            self.output
                .debug(&format!("Indexing {} of {} products", missing, products.len()));
        }
        Ok(products.into_iter().map(Product::indexed).collect())
    }
}
