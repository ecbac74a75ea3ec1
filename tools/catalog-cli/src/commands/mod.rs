//! CLI command implementations.

pub mod browse;
pub mod keywords;
pub mod price;
pub mod sku;
pub mod views;

use anyhow::{Context as _, Result};
use catalog_core::prelude::{format_idr, ListedProduct};
use chrono::{DateTime, Utc};
use clap::Args;

use crate::output::status_badge;

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Product fixture (JSON array of products).
    #[arg(short, long)]
    pub products: String,

    /// Discount fixture (JSON array of discounts).
    #[arg(short, long)]
    pub discounts: Option<String>,

    /// Free-text search query.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Sort option (name_asc, name_desc, price_asc, price_desc).
    #[arg(short, long)]
    pub sort: Option<String>,

    /// View mode id ("1"-"5").
    #[arg(long)]
    pub view: Option<String>,

    /// Instant used for discount windows (RFC 3339, default: now).
    #[arg(long)]
    pub at: Option<String>,
}

/// Arguments for the price command.
#[derive(Args)]
pub struct PriceArgs {
    /// Product fixture (JSON array of products).
    #[arg(short, long)]
    pub products: String,

    /// Discount fixture (JSON array of discounts).
    #[arg(short, long)]
    pub discounts: Option<String>,

    /// Product id to price.
    pub id: String,

    /// Instant used for discount windows (RFC 3339, default: now).
    #[arg(long)]
    pub at: Option<String>,
}

/// Arguments for the keywords command.
#[derive(Args)]
pub struct KeywordsArgs {
    /// Product fixture (JSON array of products).
    #[arg(short, long)]
    pub products: String,

    /// Only show this product id.
    pub id: Option<String>,
}

/// Arguments for the sku command.
#[derive(Args)]
pub struct SkuArgs {
    pub brand: String,
    pub collection: String,
    pub category: String,
    pub product_name: String,
}

/// Parse `--at`, falling back to the system clock.
pub fn resolve_now(at: Option<&str>) -> Result<DateTime<Utc>> {
    match at {
        Some(s) => Ok(DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("Invalid --at instant: {}", s))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

/// One-line summary of a priced product.
pub fn listing_line(item: &ListedProduct<'_>) -> String {
    let product = item.product;
    let mut line = format!(
        "{}  {}  {}",
        product.sku,
        product.product_name,
        format_idr(item.pricing.final_idr)
    );

    if item.pricing.has_discount() {
        line.push_str(&format!(
            " (was {}, {})",
            format_idr(item.pricing.base_idr),
            item.pricing.discount_display
        ));
    }

    line.push_str(&format!("  [{}]", status_badge(product.status().label())));
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_resolve_now_parses_rfc3339() {
        let at = resolve_now(Some("2026-06-15T19:00:00+07:00")).unwrap();
        assert_eq!(at, Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_resolve_now_rejects_garbage() {
        assert!(resolve_now(Some("next tuesday")).is_err());
    }
}
