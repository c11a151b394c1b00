//! Reward flattening, merging and price ordering.

mod common;

use relic_picker::aggregate::{flatten_drops, merge_rows, sort_by_price};
use relic_picker::models::RewardRow;
use relic_picker::{aggregate, AggregatedReward, PriceTable, RelicRecord};
use serde_json::json;
use std::collections::BTreeMap;

fn by_name<'a>(relics: &'a [RelicRecord], name: &str) -> &'a RelicRecord {
    relics.iter().find(|r| r.display_name() == name).unwrap()
}

fn items(rewards: &[AggregatedReward]) -> Vec<&str> {
    rewards.iter().map(|r| r.item.as_str()).collect()
}

// ---------------------------------------------------------------------------
// flatten_drops
// ---------------------------------------------------------------------------

#[test]
fn flatten_keeps_every_row() {
    let relics = common::sample_relics();
    let picked = [by_name(&relics, "Axi A2"), by_name(&relics, "Lith G10")];
    let rows = flatten_drops(picked, &common::sample_prices());

    assert_eq!(rows.len(), 5);
    assert_eq!(
        rows[0],
        RewardRow {
            item: "Forma Blueprint".to_string(),
            relic: "Axi A2".to_string(),
            rarity: "25.33".to_string(),
            price: Some(5.0),
        }
    );
    assert_eq!(rows[3].item, "Forma Blueprint");
    assert_eq!(rows[3].relic, "Lith G10");
}

#[test]
fn flatten_resolves_fallback_fields() {
    let relics = common::sample_relics();
    let rows = flatten_drops([by_name(&relics, "Meso N3")], &common::sample_prices());
    assert_eq!(rows[0].item, "Nova Prime Neuroptics");
    assert_eq!(rows[0].rarity, "Rare");
    assert_eq!(rows[0].price, Some(45.0));
    assert_eq!(rows[1].item, "Unknown");
    assert_eq!(rows[1].price, None);
}

// ---------------------------------------------------------------------------
// aggregate
// ---------------------------------------------------------------------------

#[test]
fn merges_shared_items_and_sorts_by_price() {
    let relics = common::sample_relics();
    let picked = [by_name(&relics, "Axi A2"), by_name(&relics, "Lith G10")];
    let rewards = aggregate(picked, &common::sample_prices());

    assert_eq!(
        items(&rewards),
        vec![
            "Nikana Prime Blade",
            "Gara Prime Chassis",
            "Braton Prime Receiver",
            "Forma Blueprint"
        ]
    );
    let forma = rewards.last().unwrap();
    assert_eq!(forma.from, vec!["Axi A2", "Lith G10"]);
    assert_eq!(forma.from_label(), "Axi A2, Lith G10");
    assert_eq!(forma.price, Some(5.0));
}

#[test]
fn merged_price_is_the_maximum_known() {
    let a = common::relic(json!({"tier": "Axi", "name": "A1", "rewards": [{"item": "X"}]}));
    let b = common::relic(json!({"tier": "Axi", "name": "B1", "rewards": [{"item": "X"}]}));
    let prices: PriceTable = vec![("X", 10.0)].into_iter().collect();

    let rewards = aggregate([&a, &b], &prices);
    assert_eq!(rewards.len(), 1);
    assert_eq!(rewards[0].price, Some(10.0));
    assert_eq!(rewards[0].from_label(), "Axi A1, Axi B1");
}

#[test]
fn known_price_beats_unknown_in_merge() {
    let rows = vec![
        RewardRow { item: "X".into(), relic: "A".into(), rarity: "".into(), price: None },
        RewardRow { item: "X".into(), relic: "B".into(), rarity: "".into(), price: Some(10.0) },
        RewardRow { item: "X".into(), relic: "C".into(), rarity: "".into(), price: Some(3.0) },
    ];
    let merged = merge_rows(rows);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].price, Some(10.0));
    assert_eq!(merged[0].from, vec!["A", "B", "C"]);
}

#[test]
fn all_unknown_stays_unknown() {
    let rows = vec![
        RewardRow { item: "X".into(), relic: "A".into(), rarity: "".into(), price: None },
        RewardRow { item: "X".into(), relic: "B".into(), rarity: "".into(), price: None },
    ];
    let merged = merge_rows(rows);
    assert_eq!(merged[0].price, None);
    assert_eq!(merged[0].price_or_sentinel(), -1.0);
}

#[test]
fn first_rarity_label_wins() {
    let a = common::relic(json!({"tier": "Lith", "name": "A1", "rewards": [{"item": "X", "rarity": "Common"}]}));
    let b = common::relic(json!({"tier": "Lith", "name": "A2", "rewards": [{"item": "X", "rarity": "Rare"}]}));
    let rewards = aggregate([&a, &b], &PriceTable::new());
    assert_eq!(rewards[0].rarity, "Common");
    let rewards = aggregate([&b, &a], &PriceTable::new());
    assert_eq!(rewards[0].rarity, "Rare");
}

#[test]
fn unpriced_sort_after_priced() {
    let r = common::relic(json!({"tier": "Neo", "name": "N1", "rewards": [
        {"item": "X"}, {"item": "Y"}, {"item": "Z"}
    ]}));
    let prices: PriceTable = vec![("X", 10.0), ("Z", 5.0)].into_iter().collect();
    let rewards = aggregate([&r], &prices);
    assert_eq!(items(&rewards), vec!["X", "Z", "Y"]);
    assert_eq!(rewards[2].price_or_sentinel(), -1.0);
}

#[test]
fn zero_price_sorts_before_unknown() {
    let r = common::relic(json!({"tier": "Neo", "name": "N1", "rewards": [
        {"item": "Unpriced"}, {"item": "Free"}
    ]}));
    let prices: PriceTable = vec![("Free", 0.0)].into_iter().collect();
    let rewards = aggregate([&r], &prices);
    assert_eq!(items(&rewards), vec!["Free", "Unpriced"]);
    assert_eq!(rewards[0].price, Some(0.0));
}

#[test]
fn equal_prices_keep_discovery_order() {
    let mut rewards: Vec<AggregatedReward> = ["B", "A", "C"]
        .iter()
        .map(|item| AggregatedReward {
            item: item.to_string(),
            from: vec!["Axi A1".to_string()],
            rarity: String::new(),
            price: None,
        })
        .collect();
    sort_by_price(&mut rewards);
    assert_eq!(items(&rewards), vec!["B", "A", "C"]);
}

#[test]
fn same_relic_twice_counts_once_in_from() {
    let relics = common::sample_relics();
    let a2 = by_name(&relics, "Axi A2");
    let rewards = aggregate([a2, a2], &common::sample_prices());
    assert_eq!(rewards.len(), 3);
    assert!(rewards.iter().all(|r| r.from == vec!["Axi A2"]));
}

#[test]
fn repeated_item_within_one_relic_merges() {
    let r = common::relic(json!({"tier": "Axi", "name": "A1", "rewards": [
        {"item": "X", "rarity": "Common"}, {"item": "X", "rarity": "Rare"}
    ]}));
    let rewards = aggregate([&r], &PriceTable::new());
    assert_eq!(rewards.len(), 1);
    assert_eq!(rewards[0].from, vec!["Axi A1"]);
    assert_eq!(rewards[0].rarity, "Common");
}

#[test]
fn key_set_and_prices_ignore_input_order() {
    let relics = common::sample_relics();
    let prices = common::sample_prices();
    let names = ["Axi A2", "Lith G10", "Axi A10", "Lith G1"];

    let forward: Vec<&RelicRecord> = names.iter().map(|n| by_name(&relics, n)).collect();
    let reversed: Vec<&RelicRecord> = forward.iter().rev().copied().collect();

    let summarize = |rewards: Vec<AggregatedReward>| -> BTreeMap<String, Option<f64>> {
        rewards.into_iter().map(|r| (r.item, r.price)).collect()
    };
    assert_eq!(
        summarize(aggregate(forward, &prices)),
        summarize(aggregate(reversed, &prices))
    );
}

#[test]
fn no_relics_no_rewards() {
    let rewards = aggregate(Vec::<&RelicRecord>::new(), &common::sample_prices());
    assert!(rewards.is_empty());
}

#[test]
fn empty_price_table_leaves_everything_unpriced() {
    let relics = common::sample_relics();
    let rewards = aggregate([by_name(&relics, "Axi A2")], &PriceTable::new());
    assert!(rewards.iter().all(|r| r.price.is_none()));
    // Stable sort keeps drop order when nothing is priced.
    assert_eq!(
        items(&rewards),
        vec!["Forma Blueprint", "Braton Prime Receiver", "Nikana Prime Blade"]
    );
}
