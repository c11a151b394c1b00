//! Reward lists for the current pick.

use crate::aggregate::aggregate;
use crate::catalog::Catalog;
use crate::error::{RelicError, Result};
use crate::models::{AggregatedReward, RelicRecord};
use crate::selection::{RewardOutcome, Selection};

// ---------------------------------------------------------------------------
// RewardQuery
// ---------------------------------------------------------------------------

/// Query interface that turns picked relic names into merged reward lists.
pub struct RewardQuery<'a> {
    catalog: &'a Catalog,
}

impl<'a> RewardQuery<'a> {
    /// Create a new `RewardQuery` bound to the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Rewards for the filled slots of `selection`.
    ///
    /// An empty selection returns [`RewardOutcome::NeedAtLeastOnePick`]
    /// without aggregating anything. A slot naming a relic that is not in the
    /// catalog is an error.
    pub fn show(&self, selection: &Selection) -> Result<RewardOutcome> {
        if selection.is_empty() {
            return Ok(RewardOutcome::NeedAtLeastOnePick);
        }
        self.for_relics(&selection.picks()).map(RewardOutcome::Rewards)
    }

    /// Rewards for an explicit list of relic display names.
    pub fn for_relics(&self, names: &[&str]) -> Result<Vec<AggregatedReward>> {
        let relics = names
            .iter()
            .map(|name| self.resolve(name))
            .collect::<Result<Vec<&RelicRecord>>>()?;
        let rewards = aggregate(relics, self.catalog.prices());
        tracing::debug!(relics = names.len(), rewards = rewards.len(), "aggregated rewards");
        Ok(rewards)
    }

    fn resolve(&self, name: &str) -> Result<&'a RelicRecord> {
        self.catalog
            .get(name)
            .ok_or_else(|| RelicError::NotFound(format!("Unknown relic: {}", name)))
    }
}
