//! Catalog taxonomy and pricing engine for a furniture showroom.
//!
//! Everything in this crate is a pure recomputation over in-memory data:
//!
//! - **Catalog**: Products, master data (brands, categories), SKU derivation, ingestion
//! - **Pricing**: Currency normalization to IDR and compound discount resolution
//! - **Search**: Keyword indexing, conjunctive substring filtering, sorting
//! - **Browse**: Hierarchical grouping by view mode and the full browse pipeline
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_core::prelude::*;
//!
//! let view = CatalogView::new()
//!     .with_query("gullo blue")
//!     .with_sort(SortOption::PriceDesc)
//!     .with_view_mode(ViewMode::BrandCategory);
//!
//! let page = browse(&products, &view);
//! println!("{} products in {} brands", page.total_count, page.roots.len());
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod browse;
pub mod catalog;
pub mod pricing;
pub mod search;

pub use config::CatalogConfig;
pub use error::CatalogError;
pub use ids::*;
pub use money::{Currency, CurrencyRates};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{CatalogConfig, ViewDefaults};
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::money::{format_idr, Currency, CurrencyRates};

    // Catalog
    pub use crate::catalog::{
        generate_sku, ingest, ingest_all, slugify, Brand, Category, IngestReport, Product,
        ProductDraft, ProductStatus,
    };

    // Pricing
    pub use crate::pricing::{
        calculate_base_idr, calculate_nett_price, price_product, Discount, PriceBreakdown,
    };

    // Search
    pub use crate::search::{filter_products, generate_search_keywords, sort_products, SortOption};

    // Browse
    pub use crate::browse::{
        browse, browse_priced, group_products, CatalogPage, CatalogView, GroupContent,
        GroupNode, ListedProduct, ViewMode,
    };
}
