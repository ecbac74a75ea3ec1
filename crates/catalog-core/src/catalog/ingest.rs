//! Turning imported rows into catalog products.
//!
//! Spreadsheet parsing happens upstream; a [`ProductDraft`] is one row whose
//! cells have already been mapped to named fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::product::UNKNOWN;
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::CurrencyRates;
use crate::pricing::calculate_base_idr;

const DEFAULT_COLLECTION: &str = "General";
const DEFAULT_PRODUCT_NAME: &str = "Unnamed";
const DEFAULT_LOCATION: &str = "Warehouse";

/// One imported row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDraft {
    pub brand: Option<String>,
    pub category: Option<String>,
    pub collection_name: Option<String>,
    pub product_name: Option<String>,
    pub manufacturer_id: Option<String>,
    pub dimensions: Option<String>,
    pub finishing: Option<String>,
    pub detail: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub is_not_for_sale: bool,
    pub is_upcoming: bool,
    pub total_qty: Option<u32>,
    pub price_eur: Option<f64>,
    pub price_usd: Option<f64>,
    pub price_idr: Option<f64>,
}

/// Outcome of a bulk import.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub products: Vec<Product>,
    pub rejected: usize,
}

/// Trimmed cell value, or `default` when absent or blank.
fn text_or(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Build a product from a draft, or `None` when the row has no brand or name.
///
/// Missing IDR prices are filled from the foreign list price so that price
/// sorting sees every product in the base currency.
pub fn ingest(
    draft: &ProductDraft,
    id: ProductId,
    rates: &CurrencyRates,
    now: DateTime<Utc>,
) -> Option<Product> {
    let brand = text_or(draft.brand.as_deref(), UNKNOWN);
    let product_name = text_or(draft.product_name.as_deref(), DEFAULT_PRODUCT_NAME);

    if brand == UNKNOWN || product_name == DEFAULT_PRODUCT_NAME {
        warn!(%id, brand = %brand, product_name = %product_name, "Skipping draft without brand or product name");
        return None;
    }

    let mut product = Product::new(
        id,
        brand,
        text_or(draft.category.as_deref(), UNKNOWN),
        text_or(draft.collection_name.as_deref(), DEFAULT_COLLECTION),
        product_name,
        now,
    );

    product.manufacturer_id = text_or(draft.manufacturer_id.as_deref(), "");
    product.dimensions = text_or(draft.dimensions.as_deref(), "");
    product.finishing = text_or(draft.finishing.as_deref(), "");
    product.detail = text_or(draft.detail.as_deref(), "");
    product.location = text_or(draft.location.as_deref(), DEFAULT_LOCATION);
    product.image_url = text_or(draft.image_url.as_deref(), "");
    product.is_not_for_sale = draft.is_not_for_sale;
    product.is_upcoming = draft.is_upcoming;
    product.total_qty = draft.total_qty.unwrap_or(0);

    product.price_eur = positive(draft.price_eur);
    product.price_usd = positive(draft.price_usd);
    product.price_idr = positive(draft.price_idr);
    if product.price_idr.is_none() && (product.price_eur.is_some() || product.price_usd.is_some()) {
        product.price_idr = Some(calculate_base_idr(&product, rates).round());
    }

    // Keywords index finishing and location, which were filled in after construction.
    Some(product.reindexed())
}

/// Ingest a batch of drafts; `next_id` receives the row index.
pub fn ingest_all<I, F>(drafts: I, mut next_id: F, rates: &CurrencyRates, now: DateTime<Utc>) -> IngestReport
where
    I: IntoIterator<Item = ProductDraft>,
    F: FnMut(usize) -> ProductId,
{
    let mut report = IngestReport::default();

    for (row, draft) in drafts.into_iter().enumerate() {
        match ingest(&draft, next_id(row), rates, now) {
            Some(product) => report.products.push(product),
            None => report.rejected += 1,
        }
    }

    debug!(
        imported = report.products.len(),
        rejected = report.rejected,
        "Ingested product drafts"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH
    }

    fn draft(brand: &str, name: &str) -> ProductDraft {
        ProductDraft {
            brand: Some(brand.to_string()),
            product_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_ingest_applies_defaults() {
        let product = ingest(&draft("PIANCA", "Nice Bed"), "p-1".into(), &CurrencyRates::default(), now()).unwrap();

        assert_eq!(product.category, "Unknown");
        assert_eq!(product.collection_name, "General");
        assert_eq!(product.location, "Warehouse");
        assert_eq!(product.booked_qty, 0);
        assert_eq!(product.sku, "PIAN-GENE-UNKN-NICE");
        assert!(product.search_keywords.contains(&"warehouse".to_string()));
        assert_eq!(product.created_at, now());
        assert_eq!(product.updated_at, now());
    }

    #[test]
    fn test_ingest_rejects_missing_brand_or_name() {
        let rates = CurrencyRates::default();
        assert!(ingest(&draft("", "Nice Bed"), "p-1".into(), &rates, now()).is_none());
        assert!(ingest(&draft("PIANCA", "  "), "p-2".into(), &rates, now()).is_none());
        assert!(ingest(&ProductDraft::default(), "p-3".into(), &rates, now()).is_none());
    }

    #[test]
    fn test_ingest_converts_foreign_price() {
        let rates = CurrencyRates::new(19_000.0, 16_000.0).unwrap();
        let mut row = draft("SLAMP", "Clizia Lamp");
        row.price_eur = Some(120.5);
        row.price_usd = Some(0.0);

        let product = ingest(&row, "p-1".into(), &rates, now()).unwrap();
        assert_eq!(product.price_eur, Some(120.5));
        assert_eq!(product.price_usd, None);
        assert_eq!(product.price_idr, Some(2_289_500.0));
    }

    #[test]
    fn test_ingest_keeps_explicit_idr_price() {
        let mut row = draft("SLAMP", "Clizia Lamp");
        row.price_eur = Some(100.0);
        row.price_idr = Some(1_500_000.0);

        let product = ingest(&row, "p-1".into(), &CurrencyRates::default(), now()).unwrap();
        assert_eq!(product.price_idr, Some(1_500_000.0));
    }

    #[test]
    fn test_ingest_all_counts_rejections() {
        let drafts = vec![draft("GULLO", "Restart Sofa"), draft("", "Orphan"), draft("BLUESIDE", "Bea Chair")];
        let report = ingest_all(drafts, |row| ProductId::new(format!("row-{row}")), &CurrencyRates::default(), now());

        assert_eq!(report.rejected, 1);
        let ids: Vec<&str> = report.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["row-0", "row-2"]);
    }
}
