//! Brand and category master data.

use serde::{Deserialize, Serialize};

use crate::ids::{BrandId, CategoryId};
use crate::search::compare_names;

/// Derive a document id from a display name: lower-case, whitespace runs become `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;

    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    slug
}

/// A brand and the collections it carries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
    #[serde(default)]
    pub collections: Vec<String>,
}

impl Brand {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: BrandId::new(slugify(&name)),
            name,
            collections: Vec::new(),
        }
    }

    /// Add a collection; adding one that already exists is a no-op.
    pub fn add_collection(&mut self, collection: impl Into<String>) {
        let collection = collection.into();
        if !self.collections.contains(&collection) {
            self.collections.push(collection);
        }
    }
}

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: CategoryId::new(slugify(&name)),
            name,
        }
    }
}

/// Records listed by display name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Brand {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Sort master records by name, in the same order product names sort.
pub fn sort_by_name<T: Named>(records: &mut [T]) {
    records.sort_by(|a, b| compare_names(a.name(), b.name()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("ELEMENTI DOMUS"), "elementi-domus");
        assert_eq!(slugify("Accessories - Kitchen"), "accessories---kitchen");
        assert_eq!(slugify("Coffee   Table"), "coffee-table");
        assert_eq!(slugify(" Sofa"), "-sofa");
    }

    #[test]
    fn test_brand_collections_are_a_set() {
        let mut brand = Brand::new("GULLO");
        assert_eq!(brand.id.as_str(), "gullo");

        brand.add_collection("Restart");
        brand.add_collection("Fiorentina");
        brand.add_collection("Restart");

        assert_eq!(brand.collections, vec!["Restart", "Fiorentina"]);
    }

    #[test]
    fn test_sort_by_name() {
        let mut categories = vec![
            Category::new("Sofa"),
            Category::new("armchair"),
            Category::new("Bed"),
        ];
        sort_by_name(&mut categories);

        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["armchair", "Bed", "Sofa"]);
    }

    #[test]
    fn test_sort_by_name_folds_accents() {
        let mut brands = vec![Brand::new("Zanotta"), Brand::new("Écart"), Brand::new("Flexform")];
        sort_by_name(&mut brands);

        let names: Vec<&str> = brands.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Écart", "Flexform", "Zanotta"]);
    }
}
