//! Sort options for catalog listings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::catalog::Product;
use crate::error::CatalogError;

/// Sort options for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Sort by name A-Z.
    #[default]
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
    /// Sort by IDR price, low to high.
    PriceAsc,
    /// Sort by IDR price, high to low.
    PriceDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::NameAsc,
        SortOption::NameDesc,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "name_asc",
            SortOption::NameDesc => "name_desc",
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "Name: A-Z",
            SortOption::NameDesc => "Name: Z-A",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
        }
    }

    /// Comparator for this option. Missing IDR prices compare as zero.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::NameAsc => compare_names(&a.product_name, &b.product_name),
            SortOption::NameDesc => compare_names(&b.product_name, &a.product_name),
            SortOption::PriceAsc => a.idr_price().total_cmp(&b.idr_price()),
            SortOption::PriceDesc => b.idr_price().total_cmp(&a.idr_price()),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownSortOption(s.to_string()))
    }
}

/// Locale-style name ordering.
///
/// Names compare with accents folded and case ignored first, so "Élan"
/// sorts with the e's. Ties fall back to the accented form (plain letters
/// first), then put the lower-case form first. Distinct names never
/// compare equal.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(collation_key(b))
        .then_with(|| lowercase(a).cmp(lowercase(b)))
        .then_with(|| b.cmp(a))
}

/// Decomposed, lower-cased characters with combining marks dropped.
fn collation_key(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn lowercase(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase)
}

/// Return a stably sorted copy; the input is left untouched.
pub fn sort_products<P>(products: &[P], option: SortOption) -> Vec<P>
where
    P: AsRef<Product> + Clone,
{
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| option.compare(a.as_ref(), b.as_ref()));
    sorted
}
