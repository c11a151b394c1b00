//! The picker's four independent relic slots.

use serde::{Deserialize, Serialize};

use crate::error::{RelicError, Result};
use crate::models::AggregatedReward;

/// Number of relics a user can pick at once.
pub const SLOT_COUNT: usize = 4;

/// Up to [`SLOT_COUNT`] relic display names, each slot independently empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    slots: [Option<String>; SLOT_COUNT],
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill `slot` with a relic display name, trimmed. A blank name empties
    /// the slot.
    pub fn set(&mut self, slot: usize, name: impl Into<String>) -> Result<()> {
        let target = self.slot_mut(slot)?;
        let name = name.into();
        let name = name.trim();
        *target = if name.is_empty() { None } else { Some(name.to_string()) };
        Ok(())
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, slot: usize, name: impl Into<String>) -> Result<Self> {
        self.set(slot, name)?;
        Ok(self)
    }

    pub fn get(&self, slot: usize) -> Option<&str> {
        self.slots.get(slot).and_then(|s| s.as_deref())
    }

    pub fn clear_slot(&mut self, slot: usize) -> Result<()> {
        *self.slot_mut(slot)? = None;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    /// Filled slots, in slot order.
    pub fn picks(&self) -> Vec<&str> {
        self.slots.iter().filter_map(|s| s.as_deref()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    fn slot_mut(&mut self, slot: usize) -> Result<&mut Option<String>> {
        self.slots.get_mut(slot).ok_or_else(|| {
            RelicError::InvalidArgument(format!(
                "slot {} out of range (0..{})",
                slot, SLOT_COUNT
            ))
        })
    }
}

/// Result of a "show rewards" request.
#[derive(Debug, Clone, PartialEq)]
pub enum RewardOutcome {
    /// Every slot was empty; nothing was aggregated.
    NeedAtLeastOnePick,
    Rewards(Vec<AggregatedReward>),
}

impl RewardOutcome {
    /// The rewards, or an empty slice when no relic was picked.
    pub fn rewards(&self) -> &[AggregatedReward] {
        match self {
            RewardOutcome::NeedAtLeastOnePick => &[],
            RewardOutcome::Rewards(rewards) => rewards,
        }
    }
}
