//! Price lookups against the loaded price table.

use std::collections::BTreeSet;

use crate::catalog::Catalog;

// ---------------------------------------------------------------------------
// PriceQuery
// ---------------------------------------------------------------------------

/// Query interface for item prices.
pub struct PriceQuery<'a> {
    catalog: &'a Catalog,
}

impl<'a> PriceQuery<'a> {
    /// Create a new `PriceQuery` bound to the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Price for an exact item name, `None` when unknown.
    pub fn get(&self, item: &str) -> Option<f64> {
        self.catalog.prices().get(item)
    }

    /// Number of items with a known price.
    pub fn priced_count(&self) -> usize {
        self.catalog.prices().len()
    }

    /// Distinct reward items in the catalog that have no price, sorted.
    ///
    /// Drop rows without any item field are not counted.
    pub fn missing_items(&self) -> Vec<String> {
        let prices = self.catalog.prices();
        self.catalog
            .relics()
            .iter()
            .flat_map(|r| r.drops())
            .filter(|d| d.has_item())
            .map(|d| d.item())
            .filter(|item| prices.get(item).is_none())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
