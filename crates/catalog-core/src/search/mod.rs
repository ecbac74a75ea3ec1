//! Search module.
//!
//! Keyword indexing, free-text filtering, and listing sort order.

mod filter;
mod keywords;
mod sort;

pub use filter::{filter_products, SearchTerms};
pub use keywords::generate_search_keywords;
pub use sort::{compare_names, sort_products, SortOption};
