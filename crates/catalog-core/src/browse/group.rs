//! Hierarchical grouping of products by view mode.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Product, UNKNOWN};

/// Key of the single root produced by flat views.
pub const ALL_PRODUCTS: &str = "All Products";

/// Saved catalog views, identified by the strings "1" through "5".
///
/// Unrecognized identifiers parse as [`ViewMode::FlatList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ViewMode {
    /// Brand, then category.
    #[default]
    BrandCategory,
    /// Category, then brand.
    CategoryBrand,
    /// Location only.
    Location,
    /// Every product under one root.
    FlatList,
    /// Reserved saved view; currently flat.
    Custom,
}

impl ViewMode {
    pub const ALL: [ViewMode; 5] = [
        ViewMode::BrandCategory,
        ViewMode::CategoryBrand,
        ViewMode::Location,
        ViewMode::FlatList,
        ViewMode::Custom,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ViewMode::BrandCategory => "1",
            ViewMode::CategoryBrand => "2",
            ViewMode::Location => "3",
            ViewMode::FlatList => "4",
            ViewMode::Custom => "5",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ViewMode::BrandCategory => "Brand > Cat",
            ViewMode::CategoryBrand => "Cat > Brand",
            ViewMode::Location => "Location",
            ViewMode::FlatList => "Flat List",
            ViewMode::Custom => "Custom",
        }
    }

    pub fn from_id(id: &str) -> Self {
        ViewMode::ALL
            .into_iter()
            .find(|mode| mode.id() == id)
            .unwrap_or(ViewMode::FlatList)
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl From<&str> for ViewMode {
    fn from(id: &str) -> Self {
        ViewMode::from_id(id)
    }
}

impl From<String> for ViewMode {
    fn from(id: String) -> Self {
        ViewMode::from_id(&id)
    }
}

impl From<ViewMode> for String {
    fn from(mode: ViewMode) -> Self {
        mode.id().to_string()
    }
}

/// What a group node holds: sub-groups or products, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GroupContent<P> {
    #[serde(rename = "children")]
    Branch(Vec<GroupNode<P>>),
    #[serde(rename = "products")]
    Leaf(Vec<P>),
}

/// A node in the grouped catalog tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupNode<P> {
    /// Group label.
    pub key: String,
    /// Depth, 0 for roots.
    pub level: usize,
    /// Number of products under this node.
    pub count: usize,
    #[serde(flatten)]
    pub content: GroupContent<P>,
}

impl<P> GroupNode<P> {
    pub fn leaf(key: impl Into<String>, level: usize, products: Vec<P>) -> Self {
        Self {
            key: key.into(),
            level,
            count: products.len(),
            content: GroupContent::Leaf(products),
        }
    }

    pub fn branch(key: impl Into<String>, level: usize, children: Vec<GroupNode<P>>) -> Self {
        Self {
            key: key.into(),
            level,
            count: children.iter().map(|c| c.count).sum(),
            content: GroupContent::Branch(children),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.content, GroupContent::Leaf(_))
    }

    pub fn children(&self) -> &[GroupNode<P>] {
        match &self.content {
            GroupContent::Branch(children) => children,
            GroupContent::Leaf(_) => &[],
        }
    }

    /// Every product under this node, in leaf order.
    pub fn products(&self) -> Vec<&P> {
        match &self.content {
            GroupContent::Leaf(products) => products.iter().collect(),
            GroupContent::Branch(children) => children.iter().flat_map(|c| c.products()).collect(),
        }
    }
}

type KeyFn = fn(&Product) -> &str;

fn brand(p: &Product) -> &str {
    &p.brand
}

fn category(p: &Product) -> &str {
    &p.category
}

fn location(p: &Product) -> &str {
    &p.location
}

/// Bucket items by key in ascending key order, keeping item order within buckets.
fn bucket<P: AsRef<Product>>(items: Vec<P>, key: KeyFn) -> BTreeMap<String, Vec<P>> {
    let mut groups: BTreeMap<String, Vec<P>> = BTreeMap::new();
    for item in items {
        let k = match key(item.as_ref()) {
            "" => UNKNOWN.to_string(),
            k => k.to_string(),
        };
        groups.entry(k).or_default().push(item);
    }
    groups
}

fn two_level<P: AsRef<Product>>(items: Vec<P>, outer: KeyFn, inner: KeyFn) -> Vec<GroupNode<P>> {
    bucket(items, outer)
        .into_iter()
        .map(|(key, members)| {
            let children = bucket(members, inner)
                .into_iter()
                .map(|(child_key, leaf)| GroupNode::leaf(child_key, 1, leaf))
                .collect();
            GroupNode::branch(key, 0, children)
        })
        .collect()
}

/// Group an already filtered and sorted collection into the tree for `mode`.
///
/// Group keys sort ascending; products keep their incoming order.
pub fn group_products<P: AsRef<Product>>(items: Vec<P>, mode: ViewMode) -> Vec<GroupNode<P>> {
    match mode {
        ViewMode::BrandCategory => two_level(items, brand, category),
        ViewMode::CategoryBrand => two_level(items, category, brand),
        ViewMode::Location => bucket(items, location)
            .into_iter()
            .map(|(key, leaf)| GroupNode::leaf(key, 0, leaf))
            .collect(),
        ViewMode::FlatList | ViewMode::Custom => vec![GroupNode::leaf(ALL_PRODUCTS, 0, items)],
    }
}
