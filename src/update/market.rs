//! Item pricing from market order statistics.
//!
//! Each item name is turned into one or more URL slugs, the statistics for a
//! slug are fetched, and a recent median sale price is taken from them.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;

use crate::config;
use crate::error::Result;

/// Statistics windows tried in order until one has a median.
const STATISTICS_FALLBACKS: [(&str, &str); 4] = [
    ("statistics_closed", "90days"),
    ("statistics_open", "90days"),
    ("statistics_closed", "48hours"),
    ("statistics_open", "48hours"),
];

/// Usual market slug for an item: lowercase, `&` spelled `and`, every run of
/// other characters collapsed to `_`, no leading or trailing `_`.
pub fn guess_url_name(item_name: &str) -> String {
    let lowered = item_name.trim().to_lowercase().replace('&', "and");
    let mut slug = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    slug.trim_matches('_').to_string()
}

/// Slugs to try for an item, best guess first, without duplicates.
///
/// `overrides` pins a slug for specific item names. The market spells some
/// receivers `reciever`, so that variant is tried too.
pub fn url_candidates(item_name: &str, overrides: &HashMap<String, String>) -> Vec<String> {
    let base = overrides
        .get(item_name)
        .cloned()
        .unwrap_or_else(|| guess_url_name(item_name));

    let mut candidates = vec![base.clone()];
    if let Some(stem) = base.strip_suffix("_receiver") {
        candidates.push(format!("{}_reciever", stem));
    }
    if base.contains("_receiver_") {
        candidates.push(base.replace("_receiver_", "_reciever_"));
    }

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| !c.is_empty() && seen.insert(c.clone()))
        .collect()
}

/// Median of the most recent bucket in one statistics window, rounded half
/// to even.
pub fn median_from_section(section: &Value, window: &str) -> Option<i64> {
    let last = section.get(window)?.as_array()?.last()?;
    let median = match last.get("median")? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    median.is_finite().then(|| median.round_ties_even() as i64)
}

/// Price from a statistics response body (`{ "payload": { ... } }`).
///
/// Closed (completed) trades over 90 days are preferred, then open orders
/// over 90 days, then the same two over 48 hours.
pub fn price_from_statistics(body: &Value) -> Option<i64> {
    let payload = body.get("payload")?;
    STATISTICS_FALLBACKS.iter().find_map(|(section, window)| {
        payload
            .get(*section)
            .and_then(|s| median_from_section(s, window))
    })
}

// ---------------------------------------------------------------------------
// StatisticsSource
// ---------------------------------------------------------------------------

/// Answer for one market slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceLookup {
    Priced(i64),
    /// The slug is unknown or has no usable statistics; another spelling may.
    NoData,
    /// The market is throttling or failing; stop asking for this item.
    Transient,
}

/// Something that can price a market slug.
pub trait StatisticsSource {
    fn price(&self, url_name: &str) -> Result<PriceLookup>;
}

/// [`StatisticsSource`] backed by the public market API.
pub struct MarketClient {
    client: Client,
    throttle: Duration,
}

impl MarketClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config::USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            throttle: config::MARKET_THROTTLE,
        })
    }

    /// Pause inserted after every request.
    pub fn throttle(mut self, throttle: Duration) -> Self {
        self.throttle = throttle;
        self
    }
}

impl StatisticsSource for MarketClient {
    fn price(&self, url_name: &str) -> Result<PriceLookup> {
        let url = config::market_statistics_url(url_name);
        let resp = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("Platform", config::MARKET_PLATFORM)
            .header("Language", config::MARKET_LANGUAGE)
            .send();
        thread::sleep(self.throttle);

        let resp = resp?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::FORBIDDEN {
            return Ok(PriceLookup::NoData);
        }
        if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
            tracing::warn!(url_name = %url_name, status = %status, "market unavailable; leaving item unpriced");
            return Ok(PriceLookup::Transient);
        }

        let body: Value = resp.error_for_status()?.json()?;
        Ok(price_from_statistics(&body).map_or(PriceLookup::NoData, PriceLookup::Priced))
    }
}

/// Price every item, trying each slug candidate until one has a price.
///
/// A transient answer ends the search for that item, which stays unpriced.
///
/// Returns the priced items and, separately, the names that stayed unpriced.
pub fn build_prices<S: StatisticsSource + ?Sized>(
    items: &[String],
    source: &S,
    overrides: &HashMap<String, String>,
) -> Result<(BTreeMap<String, i64>, Vec<String>)> {
    let mut prices = BTreeMap::new();
    let mut missing = Vec::new();

    for (i, item) in items.iter().enumerate() {
        let mut price = None;
        for url_name in url_candidates(item, overrides) {
            match source.price(&url_name)? {
                PriceLookup::Priced(p) => {
                    price = Some(p);
                    break;
                }
                PriceLookup::NoData => continue,
                PriceLookup::Transient => break,
            }
        }

        match price {
            Some(p) => {
                prices.insert(item.clone(), p);
            }
            None => missing.push(item.clone()),
        }

        if (i + 1) % 25 == 0 {
            tracing::info!(
                done = i + 1,
                total = items.len(),
                priced = prices.len(),
                missing = missing.len(),
                "pricing progress"
            );
        }
    }

    tracing::info!(priced = prices.len(), total = items.len(), missing = missing.len(), "pricing done");
    Ok((prices, missing))
}
