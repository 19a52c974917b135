use serde::{Deserialize, Serialize};

use shopdesk_core::ProductId;

use crate::ordering::HIGH_RATING_THRESHOLD;

/// Customer rating summary attached to a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rate on a 0–5 scale.
    pub rate: f64,
    /// Number of ratings the average is computed from.
    pub count: u64,
}

impl Rating {
    pub fn new(rate: f64, count: u64) -> Self {
        Self { rate, count }
    }

    /// A rating is "high" only when strictly above the threshold.
    pub fn is_high(&self) -> bool {
        self.rate > HIGH_RATING_THRESHOLD
    }
}

/// Snapshot of a catalog product as served by the remote catalog.
///
/// The client never mutates a snapshot; every fetch replaces them wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Product {
    /// Rate of a high-rated product, `None` for unrated or ordinary ones.
    pub fn high_rate(&self) -> Option<f64> {
        self.rating.filter(Rating::is_high).map(|r| r.rate)
    }

    pub fn is_high_rated(&self) -> bool {
        self.high_rate().is_some()
    }

    pub fn belongs_to(&self, category: &str) -> bool {
        self.category == category
    }
}

/// Catalog category. The remote catalog only knows category names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self { name }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}
