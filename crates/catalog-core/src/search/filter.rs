//! Free-text search over the keyword index.

use crate::catalog::Product;

/// A parsed free-text query: lower-cased, whitespace-separated terms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTerms {
    terms: Vec<String>,
}

impl SearchTerms {
    pub fn parse(query: &str) -> Self {
        Self {
            terms: query
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        }
    }

    /// True for an empty or whitespace-only query.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Every term must occur as a substring of the space-joined keywords.
    pub fn matches(&self, product: &Product) -> bool {
        let haystack = product.search_keywords.join(" ");
        self.terms.iter().all(|term| haystack.contains(term.as_str()))
    }
}

/// Keep the products matching every query term, preserving input order.
///
/// An empty query keeps everything. Only `search_keywords` is consulted.
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let terms = SearchTerms::parse(query);
    if terms.is_empty() {
        return products.iter().collect();
    }

    products.iter().filter(|p| terms.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn with_keywords(id: &str, keywords: &[&str]) -> Product {
        let mut p = Product::new(id, "Brand", "Cat", "Coll", "Name", DateTime::<Utc>::UNIX_EPOCH);
        p.search_keywords = keywords.iter().map(|k| k.to_string()).collect();
        p
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let products = vec![with_keywords("a", &["sofa"]), with_keywords("b", &["bed"])];
        assert_eq!(ids(&filter_products(&products, "")), vec!["a", "b"]);
        assert_eq!(ids(&filter_products(&products, "   \t ")), vec!["a", "b"]);
    }

    #[test]
    fn test_terms_are_conjunctive_substrings() {
        let products = vec![
            with_keywords("both", &["gullo", "bluesofa"]),
            with_keywords("gullo-only", &["gullo", "redsofa"]),
            with_keywords("blue-only", &["pianca", "blue"]),
        ];

        assert_eq!(ids(&filter_products(&products, "gullo blue")), vec!["both"]);
        assert_eq!(ids(&filter_products(&products, "GULLO")), vec!["both", "gullo-only"]);
        assert_eq!(ids(&filter_products(&products, "sof")), vec!["both", "gullo-only"]);
    }

    #[test]
    fn test_keywords_are_space_joined() {
        let products = vec![with_keywords("a", &["nice", "bed"])];
        assert_eq!(ids(&filter_products(&products, "ice be")), vec!["a"]);
        assert!(filter_products(&products, "nicebed").is_empty());
    }

    #[test]
    fn test_raw_fields_are_not_scanned() {
        let products = vec![with_keywords("a", &[])];
        assert!(filter_products(&products, "brand").is_empty());
    }
}
