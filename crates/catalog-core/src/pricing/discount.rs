//! Promotional discounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::ids::DiscountId;

/// A percentage discount with an activity window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub id: DiscountId,
    #[serde(default)]
    pub name: String,
    /// Percentage off (0.0 - 100.0).
    pub value: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub is_active: bool,
}

impl Discount {
    /// Create an active percentage discount for the given window.
    pub fn percentage(
        id: impl Into<DiscountId>,
        value: f64,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            value,
            start_date,
            end_date,
            is_active: true,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Active and `start_date <= now <= end_date` (both ends inclusive).
    pub fn is_effective(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.start_date <= now && now <= self.end_date
    }

    /// Fraction of the price kept after this discount (e.g. 0.8 for 20%).
    pub fn retained_fraction(&self) -> f64 {
        1.0 - self.value / 100.0
    }

    /// Reject percentages outside 0-100.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.value.is_finite() && (0.0..=100.0).contains(&self.value) {
            Ok(())
        } else {
            Err(CatalogError::InvalidDiscountValue {
                id: self.id.to_string(),
                value: self.value,
            })
        }
    }

    /// Short label such as "20%".
    pub fn label(&self) -> String {
        format!("{}%", self.value)
    }
}
