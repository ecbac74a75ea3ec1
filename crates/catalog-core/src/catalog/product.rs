//! Product record and availability status.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::generate_sku;
use crate::ids::{DiscountId, ProductId};
use crate::search::generate_search_keywords;

/// Label used for missing taxonomy fields.
pub const UNKNOWN: &str = "Unknown";

fn unknown() -> String {
    UNKNOWN.to_string()
}

/// Document stores write `null` for blank cells; treat it like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(unknown))
}

/// Availability status shown on catalog cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    #[default]
    Available,
    OutOfStock,
    Upcoming,
    NotForSale,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Available => "available",
            ProductStatus::OutOfStock => "out_of_stock",
            ProductStatus::Upcoming => "upcoming",
            ProductStatus::NotForSale => "not_for_sale",
        }
    }

    /// Badge label for display.
    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Available => "Available",
            ProductStatus::OutOfStock => "Out of Stock",
            ProductStatus::Upcoming => "Upcoming",
            ProductStatus::NotForSale => "Not for Sale",
        }
    }
}

/// A product in the catalog.
///
/// Records are owned by the document store and treated as immutable here;
/// `sku` and `search_keywords` are derived at ingestion time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    /// Derived `AAAA-BBBB-CCCC-DDDD` code.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sku: String,
    /// Derived keyword index; the only input to search.
    #[serde(default, deserialize_with = "null_as_default")]
    pub search_keywords: Vec<String>,

    #[serde(default = "unknown", deserialize_with = "null_as_unknown")]
    pub brand: String,
    #[serde(default = "unknown", deserialize_with = "null_as_unknown")]
    pub category: String,
    #[serde(default = "unknown", deserialize_with = "null_as_unknown")]
    pub collection_name: String,
    #[serde(default = "unknown", deserialize_with = "null_as_unknown")]
    pub product_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub manufacturer_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dimensions: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub finishing: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub detail: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_not_for_sale: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_upcoming: bool,
    #[serde(default)]
    pub upcoming_eta: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub total_qty: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub booked_qty: u32,

    #[serde(default)]
    pub price_eur: Option<f64>,
    #[serde(default)]
    pub price_usd: Option<f64>,
    #[serde(default)]
    pub price_idr: Option<f64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub discount_ids: BTreeSet<DiscountId>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a product with its taxonomy set and derived fields computed.
    pub fn new(
        id: impl Into<ProductId>,
        brand: impl Into<String>,
        category: impl Into<String>,
        collection_name: impl Into<String>,
        product_name: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            sku: String::new(),
            search_keywords: Vec::new(),
            brand: brand.into(),
            category: category.into(),
            collection_name: collection_name.into(),
            product_name: product_name.into(),
            manufacturer_id: String::new(),
            dimensions: String::new(),
            finishing: String::new(),
            detail: String::new(),
            location: String::new(),
            image_url: String::new(),
            is_not_for_sale: false,
            is_upcoming: false,
            upcoming_eta: None,
            total_qty: 0,
            booked_qty: 0,
            price_eur: None,
            price_usd: None,
            price_idr: None,
            discount_ids: BTreeSet::new(),
            created_at: now,
            updated_at: now,
        }
        .reindexed()
    }

    /// Recompute `sku` and `search_keywords` from the descriptive fields.
    ///
    /// The SKU is derived first because the keyword index includes it.
    pub fn reindexed(mut self) -> Self {
        self.sku = generate_sku(
            &self.brand,
            &self.collection_name,
            &self.category,
            &self.product_name,
        );
        self.search_keywords = generate_search_keywords(&self);
        self
    }

    /// Fill in derived fields a stored record is missing, keeping any it has.
    pub fn indexed(self) -> Self {
        if self.sku.is_empty() {
            self.reindexed()
        } else if self.search_keywords.is_empty() {
            let search_keywords = generate_search_keywords(&self);
            Self {
                search_keywords,
                ..self
            }
        } else {
            self
        }
    }

    /// Availability, in badge precedence order.
    pub fn status(&self) -> ProductStatus {
        if self.is_not_for_sale {
            ProductStatus::NotForSale
        } else if self.is_upcoming {
            ProductStatus::Upcoming
        } else if self.total_qty == 0 {
            ProductStatus::OutOfStock
        } else {
            ProductStatus::Available
        }
    }

    /// Units not yet booked.
    pub fn available_qty(&self) -> u32 {
        self.total_qty.saturating_sub(self.booked_qty)
    }

    /// IDR list price, with a missing price treated as zero.
    pub fn idr_price(&self) -> f64 {
        self.price_idr.unwrap_or(0.0)
    }
}

impl AsRef<Product> for Product {
    fn as_ref(&self) -> &Product {
        self
    }
}
