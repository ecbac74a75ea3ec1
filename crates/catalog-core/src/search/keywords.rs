//! Keyword index generation.

use std::collections::HashSet;

use crate::catalog::Product;

/// Build the search keyword index for a product.
///
/// Brand, collection, category, name, SKU, finishing, and location are
/// lower-cased and split on whitespace. Tokens are deduplicated in
/// first-occurrence order and single-character tokens are dropped.
pub fn generate_search_keywords(product: &Product) -> Vec<String> {
    let combined = [
        product.brand.as_str(),
        product.collection_name.as_str(),
        product.category.as_str(),
        product.product_name.as_str(),
        product.sku.as_str(),
        product.finishing.as_str(),
        product.location.as_str(),
    ]
    .join(" ")
    .to_lowercase();

    let mut seen = HashSet::new();
    combined
        .split_whitespace()
        .filter(|token| token.chars().count() > 1)
        .filter(|token| seen.insert(*token))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn product(brand: &str, name: &str) -> Product {
        Product::new("p-1", brand, "Sofa", "Restart", name, DateTime::<Utc>::UNIX_EPOCH)
    }

    #[test]
    fn test_keywords_lowercased_and_deduplicated() {
        let mut p = product("GULLO", "Gullo Blue Sofa");
        p.finishing = "Velvet  Blue".to_string();
        p.location = "Showroom A".to_string();
        let keywords = generate_search_keywords(&p);

        assert_eq!(
            keywords,
            vec!["gullo", "restart", "sofa", "blue", "gull-rest-sofa-gull", "velvet", "showroom"]
        );
    }

    #[test]
    fn test_keywords_drop_single_characters() {
        let mut p = product("B", "X 2 Chair");
        p.location = "a".to_string();
        let keywords = generate_search_keywords(&p);

        assert!(keywords.iter().all(|k| k.chars().count() > 1));
        assert!(keywords.contains(&"chair".to_string()));
        assert!(!keywords.contains(&"x".to_string()));
    }

    #[test]
    fn test_keywords_are_a_set_over_field_order() {
        let mut a = product("Pianca", "Nice Bed");
        a.finishing = "Oak".to_string();
        let mut b = product("Pianca", "Nice Bed");
        b.finishing = "Oak Pianca Nice".to_string();

        let set_a: HashSet<String> = generate_search_keywords(&a).into_iter().collect();
        let set_b: HashSet<String> = generate_search_keywords(&b).into_iter().collect();
        assert_eq!(set_a, set_b);
    }
}
