use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::fields::{first_field, first_text};

const ERA_FIELDS: &[&str] = &["tier", "era"];
const NAME_FIELDS: &[&str] = &["name", "code", "relicName"];
const DROP_FIELDS: &[&str] = &["rewards", "drops"];

const ITEM_FIELDS: &[&str] = &["item", "name", "reward"];
const RARITY_FIELDS: &[&str] = &["rarity", "chance", "tier"];

/// Placeholder item name for drop rows that carry none.
pub const UNKNOWN_ITEM: &str = "Unknown";

// ---------------------------------------------------------------------------
// RelicRecord — One catalog row, kept as its raw JSON object
// ---------------------------------------------------------------------------

/// A relic from the static catalog document.
///
/// The row is kept as loaded; accessors resolve each concept through its
/// candidate field list so rows from differently shaped sources read the same.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelicRecord {
    fields: Map<String, Value>,
}

impl RelicRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Build a record from any JSON value; `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Era word (`tier`, then `era`), empty when absent.
    pub fn era(&self) -> String {
        first_text(&self.fields, ERA_FIELDS)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }

    /// Relic code (`name`, then `code`, then `relicName`), empty when absent.
    pub fn name(&self) -> String {
        first_text(&self.fields, NAME_FIELDS)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }

    /// `"<era> <name>"`, or whichever half exists.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.era(), self.name()).trim().to_string()
    }

    /// The vault flag, when the row has one.
    pub fn vaulted(&self) -> Option<bool> {
        self.fields.get("vaulted").and_then(|v| v.as_bool())
    }

    /// Drop rows (`rewards`, then `drops`). Non-object entries are skipped.
    pub fn drops(&self) -> Vec<DropEntry> {
        DROP_FIELDS
            .iter()
            .filter_map(|key| self.fields.get(*key))
            .find_map(|v| v.as_array())
            .map(|arr| arr.iter().cloned().filter_map(DropEntry::from_value).collect())
            .unwrap_or_default()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

// ---------------------------------------------------------------------------
// DropEntry — One reward row of a relic
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DropEntry {
    fields: Map<String, Value>,
}

impl DropEntry {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Item name: `item`, `name`, `reward`, else [`UNKNOWN_ITEM`].
    pub fn item(&self) -> String {
        first_text(&self.fields, ITEM_FIELDS).unwrap_or_else(|| UNKNOWN_ITEM.to_string())
    }

    /// Badge label: `rarity`, `chance`, `tier`, else empty.
    pub fn rarity(&self) -> String {
        first_text(&self.fields, RARITY_FIELDS).unwrap_or_default()
    }

    /// Whether the row names its item through any candidate field.
    pub fn has_item(&self) -> bool {
        first_field(&self.fields, ITEM_FIELDS).is_some()
    }
}
