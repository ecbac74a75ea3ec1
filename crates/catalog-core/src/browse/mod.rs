//! Browse module.
//!
//! Groups the searched and sorted catalog into a tree for the selected view.

mod group;
mod view;

pub use group::{group_products, GroupContent, GroupNode, ViewMode, ALL_PRODUCTS};
pub use view::{browse, browse_priced, CatalogPage, CatalogView, ListedProduct};
