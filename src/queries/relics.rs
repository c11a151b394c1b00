//! Catalog listing and search in natural relic order.

use crate::catalog::Catalog;
use crate::models::RelicRecord;

// ---------------------------------------------------------------------------
// RelicQuery
// ---------------------------------------------------------------------------

/// Query interface over the relic catalog.
///
/// Every list it returns is in natural relic order.
pub struct RelicQuery<'a> {
    catalog: &'a Catalog,
}

impl<'a> RelicQuery<'a> {
    /// Create a new `RelicQuery` bound to the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// All relics.
    pub fn list(&self) -> Vec<&'a RelicRecord> {
        self.catalog.relics().iter().collect()
    }

    /// All display names.
    pub fn names(&self) -> Vec<&'a str> {
        self.catalog.names().iter().map(String::as_str).collect()
    }

    /// Relics whose display name contains `text`, ignoring case.
    ///
    /// Surrounding and repeated whitespace in `text` is ignored; blank text
    /// matches everything.
    pub fn search(&self, text: &str) -> Vec<&'a RelicRecord> {
        let needle = crate::relic_name::normalize_whitespace(text).to_lowercase();
        self.catalog
            .relics()
            .iter()
            .zip(self.catalog.names())
            .filter(|(_, name)| needle.is_empty() || name.to_lowercase().contains(&needle))
            .map(|(relic, _)| relic)
            .collect()
    }

    /// Look up a relic by exact display name (e.g. `"Axi A1"`).
    pub fn get(&self, display_name: &str) -> Option<&'a RelicRecord> {
        self.catalog.get(display_name)
    }

    /// Relics of one era, matched case-insensitively.
    pub fn by_era(&self, era: &str) -> Vec<&'a RelicRecord> {
        self.catalog
            .relics()
            .iter()
            .filter(|r| r.era().eq_ignore_ascii_case(era))
            .collect()
    }

    /// Relics whose vault flag equals `vaulted`. Rows without a flag never match.
    pub fn vaulted(&self, vaulted: bool) -> Vec<&'a RelicRecord> {
        self.catalog
            .relics()
            .iter()
            .filter(|r| r.vaulted() == Some(vaulted))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.catalog.len()
    }
}
