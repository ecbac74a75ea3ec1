//! Caller-owned view state and the browse pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::browse::{group_products, GroupNode, ViewMode};
use crate::catalog::Product;
use crate::error::CatalogError;
use crate::money::CurrencyRates;
use crate::pricing::{price_product, Discount, PriceBreakdown};
use crate::search::{filter_products, sort_products, SortOption};

/// Everything the UI controls about the catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogView {
    /// Free-text search query.
    pub query: String,
    pub sort: SortOption,
    pub view_mode: ViewMode,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }
}

/// Grouped listing plus the number of products that passed the search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage<P> {
    pub roots: Vec<GroupNode<P>>,
    pub total_count: usize,
}

/// A product with its resolved price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedProduct<'a> {
    pub product: &'a Product,
    pub pricing: PriceBreakdown,
}

impl AsRef<Product> for ListedProduct<'_> {
    fn as_ref(&self) -> &Product {
        self.product
    }
}

/// Filter, sort, and group the catalog for `view`.
pub fn browse<'a>(products: &'a [Product], view: &CatalogView) -> CatalogPage<&'a Product> {
    let filtered = filter_products(products, &view.query);
    let total_count = filtered.len();
    let sorted = sort_products(&filtered, view.sort);
    let roots = group_products(sorted, view.view_mode);

    debug!(
        catalog = products.len(),
        matched = total_count,
        groups = roots.len(),
        view_mode = %view.view_mode,
        sort = %view.sort,
        "Browsed catalog"
    );

    CatalogPage { roots, total_count }
}

/// Like [`browse`], with every listed product priced at instant `now`.
pub fn browse_priced<'a>(
    products: &'a [Product],
    discounts: &[Discount],
    rates: &CurrencyRates,
    view: &CatalogView,
    now: DateTime<Utc>,
) -> Result<CatalogPage<ListedProduct<'a>>, CatalogError> {
    let filtered = filter_products(products, &view.query);
    let total_count = filtered.len();

    let listed = sort_products(&filtered, view.sort)
        .into_iter()
        .map(|product| {
            price_product(product, discounts, rates, now)
                .map(|pricing| ListedProduct { product, pricing })
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;

    let roots = group_products(listed, view.view_mode);

    debug!(
        catalog = products.len(),
        matched = total_count,
        groups = roots.len(),
        %now,
        "Browsed priced catalog"
    );

    Ok(CatalogPage { roots, total_count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
    }

    fn product(id: &str, brand: &str, name: &str, price: f64) -> Product {
        let mut p = Product::new(id, brand, "Sofa", "Restart", name, now());
        p.price_idr = Some(price);
        p
    }

    #[test]
    fn test_browse_counts_filtered_products() {
        let products = vec![
            product("1", "GULLO", "Blue Sofa", 3_000_000.0),
            product("2", "GULLO", "Red Sofa", 2_000_000.0),
            product("3", "PIANCA", "Blue Bed", 1_000_000.0),
        ];
        let view = CatalogView::new()
            .with_query("blue")
            .with_sort(SortOption::PriceAsc)
            .with_view_mode(ViewMode::FlatList);

        let page = browse(&products, &view);
        assert_eq!(page.total_count, 2);

        let ids: Vec<String> = page.roots[0].products().iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_browse_priced_attaches_breakdowns() {
        let mut sofa = product("1", "GULLO", "Blue Sofa", 1_000_000.0);
        sofa.discount_ids.insert("promo".into());
        let products = vec![sofa, product("2", "PIANCA", "Bed", 500_000.0)];
        let discounts = vec![Discount::percentage(
            "promo",
            25.0,
            now() - Duration::days(1),
            now() + Duration::days(1),
        )];

        let page = browse_priced(
            &products,
            &discounts,
            &CurrencyRates::default(),
            &CatalogView::new(),
            now(),
        )
        .unwrap();

        assert_eq!(page.total_count, 2);
        let gullo = page.roots[0].products();
        assert_eq!(gullo[0].pricing.final_idr, 750_000);
        assert_eq!(gullo[0].pricing.discount_display, "25%");

        let pianca = page.roots[1].products();
        assert_eq!(pianca[0].pricing.final_idr, 500_000);
    }

    #[test]
    fn test_browse_priced_surfaces_invalid_discount() {
        let mut sofa = product("1", "GULLO", "Sofa", 1_000_000.0);
        sofa.discount_ids.insert("broken".into());
        let products = vec![sofa];
        let discounts = vec![Discount::percentage(
            "broken",
            150.0,
            now() - Duration::days(1),
            now() + Duration::days(1),
        )];

        let result = browse_priced(
            &products,
            &discounts,
            &CurrencyRates::default(),
            &CatalogView::new(),
            now(),
        );
        assert!(matches!(result, Err(CatalogError::InvalidDiscountValue { .. })));
    }

    #[test]
    fn test_view_state_deserializes_with_defaults() {
        let view: CatalogView = serde_json::from_str(r#"{"query": "sofa", "viewMode": "3"}"#).unwrap();
        assert_eq!(view.query, "sofa");
        assert_eq!(view.sort, SortOption::NameAsc);
        assert_eq!(view.view_mode, ViewMode::Location);
    }
}
