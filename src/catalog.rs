//! In-memory catalog: relics in natural order plus the price table.

use std::collections::HashMap;

use crate::models::{PriceTable, RelicRecord};
use crate::relic_name::relic_natural_compare;

/// Loaded, read-only session data shared by every query interface.
///
/// Relics are sorted once at construction by natural name order and indexed
/// by display name. When two rows share a display name the first one wins the
/// index entry.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    relics: Vec<RelicRecord>,
    names: Vec<String>,
    by_name: HashMap<String, usize>,
    prices: PriceTable,
}

impl Catalog {
    pub fn new(relics: Vec<RelicRecord>, prices: PriceTable) -> Self {
        let mut keyed: Vec<(String, RelicRecord)> =
            relics.into_iter().map(|r| (r.display_name(), r)).collect();
        keyed.sort_by(|(a, _), (b, _)| relic_natural_compare(a, b));

        let mut by_name = HashMap::with_capacity(keyed.len());
        for (i, (name, _)) in keyed.iter().enumerate() {
            by_name.entry(name.clone()).or_insert(i);
        }
        let (names, relics): (Vec<String>, Vec<RelicRecord>) = keyed.into_iter().unzip();

        Self {
            relics,
            names,
            by_name,
            prices,
        }
    }

    /// Every relic, in natural order.
    pub fn relics(&self) -> &[RelicRecord] {
        &self.relics
    }

    /// Display names parallel to [`relics`](Self::relics).
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    pub fn get(&self, display_name: &str) -> Option<&RelicRecord> {
        self.by_name.get(display_name).map(|&i| &self.relics[i])
    }

    pub fn len(&self) -> usize {
        self.relics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relics.is_empty()
    }
}
