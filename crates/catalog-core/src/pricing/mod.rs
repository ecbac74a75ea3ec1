//! Pricing module.
//!
//! Normalizes multi-currency list prices to IDR and compounds discounts.

mod discount;
mod resolver;

pub use discount::Discount;
pub use resolver::{
    calculate_base_idr, calculate_nett_price, price_product, resolve_discounts, PriceBreakdown,
};
