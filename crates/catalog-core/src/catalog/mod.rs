//! Product catalog module.
//!
//! Contains the product record, master data, SKU derivation, and ingestion.

mod ingest;
mod master;
mod product;
mod sku;

pub use ingest::{ingest, ingest_all, IngestReport, ProductDraft};
pub use master::{slugify, sort_by_name, Brand, Category, Named};
pub use product::{Product, ProductStatus, UNKNOWN};
pub use sku::generate_sku;
