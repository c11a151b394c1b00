//! Reward aggregation across selected relics.
//!
//! Pure functions over already loaded data: flatten every drop of every
//! selected relic into [`RewardRow`]s, merge rows by item name, then order the
//! merged rewards by price.

use std::collections::HashMap;

use crate::models::{AggregatedReward, PriceTable, RelicRecord, RewardRow};

/// Flatten the drops of `relics` into one row per (relic, drop), unmerged.
pub fn flatten_drops<'a, I>(relics: I, prices: &PriceTable) -> Vec<RewardRow>
where
    I: IntoIterator<Item = &'a RelicRecord>,
{
    let mut rows = Vec::new();
    for relic in relics {
        let relic_name = relic.display_name();
        for drop in relic.drops() {
            let item = drop.item();
            let price = prices.get(&item);
            rows.push(RewardRow {
                item,
                relic: relic_name.clone(),
                rarity: drop.rarity(),
                price,
            });
        }
    }
    rows
}

/// Merge rows sharing an item name.
///
/// The first row for an item fixes its rarity label. Source relics are kept
/// once each, in first-seen order. The merged price is the highest known one.
/// Output is in first-discovery order of each item.
pub fn merge_rows(rows: Vec<RewardRow>) -> Vec<AggregatedReward> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut merged: Vec<AggregatedReward> = Vec::new();

    for row in rows {
        match index.get(&row.item) {
            Some(&i) => {
                let reward = &mut merged[i];
                if !reward.from.contains(&row.relic) {
                    reward.from.push(row.relic);
                }
                reward.price = max_price(reward.price, row.price);
            }
            None => {
                index.insert(row.item.clone(), merged.len());
                merged.push(AggregatedReward {
                    item: row.item,
                    from: vec![row.relic],
                    rarity: row.rarity,
                    price: row.price,
                });
            }
        }
    }
    merged
}

/// Sort by price, highest first; unknown prices last.
///
/// The sort is stable, so rewards with equal prices (including all unknown
/// ones) keep the order they were discovered in.
pub fn sort_by_price(rewards: &mut [AggregatedReward]) {
    rewards.sort_by(|a, b| b.price_or_sentinel().total_cmp(&a.price_or_sentinel()));
}

/// Merged, price-ordered rewards for the given relics.
pub fn aggregate<'a, I>(relics: I, prices: &PriceTable) -> Vec<AggregatedReward>
where
    I: IntoIterator<Item = &'a RelicRecord>,
{
    let rows = flatten_drops(relics, prices);
    let mut rewards = merge_rows(rows);
    sort_by_price(&mut rewards);
    rewards
}

fn max_price(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.max(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}
