//! Builds the compact relic catalog from the upstream drop table.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RelicError, Result};
use crate::relic_name::era_rank;

/// Only this refinement state is kept; the other states repeat the same
/// relic with different chances.
pub const INTACT_STATE: &str = "Intact";

// ---------------------------------------------------------------------------
// MinRelic / MinReward — Rows of the published catalog document
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinReward {
    pub item: String,
    pub chance: Option<f64>,
    #[serde(rename = "type")]
    pub type_field: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinRelic {
    pub tier: String,
    pub name: String,
    pub vaulted: bool,
    pub rewards: Vec<MinReward>,
}

impl MinRelic {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.tier, self.name)
    }
}

/// Map `"Axi A1"` to its vault flag from the vault-flag relic list.
///
/// Rows without a non-blank string name and a boolean flag are skipped; a
/// payload that is not an array yields an empty map.
pub fn build_vaulted_map(payload: &Value) -> HashMap<String, bool> {
    let mut map = HashMap::new();
    let Some(rows) = payload.as_array() else {
        return map;
    };
    for row in rows {
        let name = row.get("name").and_then(|v| v.as_str()).map(str::trim);
        let vaulted = row.get("vaulted").and_then(|v| v.as_bool());
        if let (Some(name), Some(vaulted)) = (name, vaulted) {
            if !name.is_empty() {
                map.insert(name.to_string(), vaulted);
            }
        }
    }
    map
}

/// Build the published catalog from the full drop table (`{ "relics": [...] }`).
///
/// Relics missing from `vault_map` are assumed vaulted. The result is sorted
/// by era rank, then by code as plain text.
pub fn build_relics_min(payload: &Value, vault_map: &HashMap<String, bool>) -> Result<Vec<MinRelic>> {
    let rows = payload
        .get("relics")
        .and_then(|v| v.as_array())
        .ok_or_else(|| {
            RelicError::Data("unexpected drop table format (expected { relics: [...] })".to_string())
        })?;

    let mut out: Vec<MinRelic> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for row in rows {
        if !row.is_object() || str_field(row, "state") != INTACT_STATE {
            continue;
        }

        let tier = str_field(row, "tier");
        let code = str_field(row, "relicName");
        if tier.is_empty() || code.is_empty() {
            continue;
        }

        let full_name = format!("{} {}", tier, code);
        if !seen.insert(full_name.clone()) {
            continue;
        }

        let rewards: Vec<MinReward> = row
            .get("rewards")
            .and_then(|v| v.as_array())
            .map(|arr| arr.iter().filter_map(min_reward).collect())
            .unwrap_or_default();
        if rewards.is_empty() {
            continue;
        }

        out.push(MinRelic {
            vaulted: vault_map.get(&full_name).copied().unwrap_or(true),
            tier: tier.to_string(),
            name: code.to_string(),
            rewards,
        });
    }

    out.sort_by(|a, b| {
        era_rank(&a.tier)
            .cmp(&era_rank(&b.tier))
            .then_with(|| a.name.cmp(&b.name))
    });
    Ok(out)
}

/// Distinct reward item names across the catalog, sorted.
pub fn unique_reward_items(relics: &[MinRelic]) -> Vec<String> {
    relics
        .iter()
        .flat_map(|r| r.rewards.iter().map(|rw| rw.item.clone()))
        .filter(|item| !item.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn min_reward(row: &Value) -> Option<MinReward> {
    if !row.is_object() {
        return None;
    }
    let item = first_raw(row, &["itemName", "item", "name"]);
    if item.is_empty() {
        return None;
    }

    let chance = match row.get("chance") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };

    let type_field = first_raw(row, &["rarity", "type"]);

    Some(MinReward {
        item: item.to_string(),
        chance,
        type_field: type_field.to_string(),
    })
}

/// First candidate holding a non-empty string, trimmed only after it was
/// chosen: a whitespace-only value wins the lookup and comes back empty.
fn first_raw<'a>(row: &'a Value, keys: &[&str]) -> &'a str {
    keys.iter()
        .filter_map(|key| row.get(*key).and_then(|v| v.as_str()))
        .find(|s| !s.is_empty())
        .map(str::trim)
        .unwrap_or("")
}

/// Trimmed string field, empty when absent or not a string.
fn str_field<'a>(row: &'a Value, key: &str) -> &'a str {
    row.get(key).and_then(|v| v.as_str()).map(str::trim).unwrap_or("")
}
