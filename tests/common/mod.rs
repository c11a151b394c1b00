//! Shared test fixtures for the relic picker integration tests.
//!
//! Provides a small catalog in deliberately unsorted order, a matching price
//! table, and helpers that write both documents into a temp data directory.

#![allow(dead_code)]

use relic_picker::{Catalog, PriceTable, RelicRecord};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// Raw catalog rows as they appear in `Relics.min.json`.
///
/// One row (`Meso N3`) uses the alternate field names (`era`, `code`,
/// `drops`, `reward`, `rarity`) to exercise the fallback accessors.
pub fn sample_relics_json() -> Value {
    json!([
        {
            "tier": "Axi",
            "name": "A2",
            "vaulted": false,
            "rewards": [
                {"item": "Forma Blueprint", "chance": 25.33, "type": "Common"},
                {"item": "Braton Prime Receiver", "chance": 11, "type": "Uncommon"},
                {"item": "Nikana Prime Blade", "chance": 2, "type": "Rare"}
            ]
        },
        {
            "tier": "Lith",
            "name": "G10",
            "vaulted": true,
            "rewards": [
                {"item": "Forma Blueprint", "chance": 25.33, "type": "Common"},
                {"item": "Gara Prime Chassis", "chance": 2, "type": "Rare"}
            ]
        },
        {
            "tier": "Axi",
            "name": "A10",
            "vaulted": true,
            "rewards": [
                {"item": "Akstiletto Prime Barrel", "chance": 11, "type": "Uncommon"},
                {"item": "Forma Blueprint", "chance": 25.33, "type": "Common"}
            ]
        },
        {
            "tier": "Lith",
            "name": "G1",
            "vaulted": false,
            "rewards": [
                {"item": "Gara Prime Chassis", "chance": 11, "type": "Uncommon"},
                {"item": "Unpriced Trinket", "chance": 25.33, "type": "Common"}
            ]
        },
        {
            "era": "Meso",
            "code": "N3",
            "drops": [
                {"reward": "Nova Prime Neuroptics", "rarity": "Rare"},
                {"rarity": "Common"}
            ]
        },
        {
            "tier": "Requiem",
            "name": "I",
            "rewards": [
                {"item": "Free Item", "chance": 50}
            ]
        }
    ])
}

/// Price document matching [`sample_relics_json`].
pub fn sample_prices_json() -> Value {
    json!({
        "Forma Blueprint": 5,
        "Braton Prime Receiver": 12,
        "Nikana Prime Blade": 80,
        "Gara Prime Chassis": 30,
        "Akstiletto Prime Barrel": 8,
        "Nova Prime Neuroptics": 45,
        "Free Item": 0
    })
}

pub fn sample_relics() -> Vec<RelicRecord> {
    match sample_relics_json() {
        Value::Array(rows) => rows.into_iter().filter_map(RelicRecord::from_value).collect(),
        _ => unreachable!(),
    }
}

pub fn sample_prices() -> PriceTable {
    PriceTable::from_value(&sample_prices_json())
}

/// Catalog built from the sample relics and prices.
pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_relics(), sample_prices())
}

/// A relic record from inline JSON.
pub fn relic(value: Value) -> RelicRecord {
    RelicRecord::from_value(value).unwrap()
}

/// Write both sample documents into `dir`.
pub fn write_sample_data(dir: &Path) {
    fs::write(
        dir.join("Relics.min.json"),
        serde_json::to_string(&sample_relics_json()).unwrap(),
    )
    .unwrap();
    fs::write(
        dir.join("prices.json"),
        serde_json::to_string(&sample_prices_json()).unwrap(),
    )
    .unwrap();
}
