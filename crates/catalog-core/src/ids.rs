//! Newtype IDs for catalog records.
//!
//! Product and discount ids are opaque strings owned by the document store;
//! wrapping them keeps a `DiscountId` from being looked up as a `ProductId`.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident) => {
        /// An opaque identifier.
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(DiscountId);
define_id!(BrandId);
define_id!(CategoryId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_str() {
        let id: ProductId = "prod-456".into();
        assert_eq!(id.as_str(), "prod-456");
        assert_eq!(id.to_string(), "prod-456");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = DiscountId::new("summer-20");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"summer-20\"");

        let back: DiscountId = serde_json::from_str("\"summer-20\"").unwrap();
        assert_eq!(back, id);
    }
}
