use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Numeric stand-in for an unknown price at the presentation boundary.
///
/// Never stored: inside the crate an unknown price is `None`.
pub const UNKNOWN_PRICE: f64 = -1.0;

// ---------------------------------------------------------------------------
// PriceTable — Item name to market price
// ---------------------------------------------------------------------------

/// Market prices keyed by exact item name.
///
/// A missing key means the price is unknown, which is distinct from a price
/// of zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    prices: HashMap<String, f64>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from the static price document (a JSON object).
    ///
    /// Entries whose value is not a non-negative number are skipped. Any other
    /// top-level shape yields an empty table.
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            tracing::warn!("price document is not an object; using an empty price table");
            return Self::default();
        };

        let mut prices = HashMap::with_capacity(map.len());
        for (item, raw) in map {
            match raw.as_f64() {
                Some(price) if price >= 0.0 => {
                    prices.insert(item.clone(), price);
                }
                _ => tracing::debug!(item = %item, value = %raw, "skipping unusable price entry"),
            }
        }
        Self { prices }
    }

    /// Exact-match lookup.
    pub fn get(&self, item: &str) -> Option<f64> {
        self.prices.get(item).copied()
    }

    /// Insert a price. Negative values are ignored.
    pub fn insert(&mut self, item: impl Into<String>, price: f64) {
        if price >= 0.0 {
            self.prices.insert(item.into(), price);
        }
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut table = PriceTable::new();
        for (item, price) in iter {
            table.insert(item, price);
        }
        table
    }
}

/// Collapse an optional price to the single numeric channel used for display.
pub fn price_or_sentinel(price: Option<f64>) -> f64 {
    price.unwrap_or(UNKNOWN_PRICE)
}
