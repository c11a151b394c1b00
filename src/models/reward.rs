use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::price::price_or_sentinel;

/// Separator used when listing the relics a reward comes from.
pub const FROM_SEPARATOR: &str = ", ";

// ---------------------------------------------------------------------------
// RewardRow — One (item, relic) pair before merging
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct RewardRow {
    pub item: String,
    pub relic: String,
    pub rarity: String,
    pub price: Option<f64>,
}

// ---------------------------------------------------------------------------
// AggregatedReward — One distinct item across the selected relics
// ---------------------------------------------------------------------------

/// A reward merged across every selected relic that can drop it.
///
/// Serializes to the flat row the picker renders: `from` as one joined string
/// and `price` as `-1` when unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedReward {
    pub item: String,
    #[serde(serialize_with = "ser_from", deserialize_with = "de_from")]
    pub from: Vec<String>,
    pub rarity: String,
    #[serde(serialize_with = "ser_price", deserialize_with = "de_price")]
    pub price: Option<f64>,
}

impl AggregatedReward {
    /// Contributing relic names joined in insertion order.
    pub fn from_label(&self) -> String {
        self.from.join(FROM_SEPARATOR)
    }

    /// The price, or [`UNKNOWN_PRICE`](super::price::UNKNOWN_PRICE) when no source relic had one.
    pub fn price_or_sentinel(&self) -> f64 {
        price_or_sentinel(self.price)
    }
}

fn ser_from<S: Serializer>(from: &[String], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&from.join(FROM_SEPARATOR))
}

fn de_from<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    let joined = String::deserialize(d)?;
    Ok(joined
        .split(FROM_SEPARATOR)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect())
}

fn ser_price<S: Serializer>(price: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(price_or_sentinel(*price))
}

fn de_price<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    let raw = f64::deserialize(d)?;
    Ok(if raw < 0.0 { None } else { Some(raw) })
}
