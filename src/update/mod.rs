//! Regenerates the static relic and price documents.
//!
//! This is a batch step run ahead of time (e.g. on a schedule); the picker
//! itself only ever reads the files it produces.

pub mod market;
pub mod relics;

pub use market::{build_prices, MarketClient, PriceLookup, StatisticsSource};
pub use relics::{build_relics_min, build_vaulted_map, unique_reward_items, MinRelic, MinReward};

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::config;
use crate::error::{RelicError, Result};

/// What a refresh produced.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSummary {
    pub relics: usize,
    pub priced: usize,
    pub missing: Vec<String>,
}

/// Downloads the upstream tables, rebuilds both documents and writes them
/// into `out_dir`.
pub struct Updater {
    out_dir: PathBuf,
    client: Client,
    overrides: HashMap<String, String>,
    min_priced: usize,
    timeout: Duration,
}

impl Updater {
    pub fn new<P: AsRef<Path>>(out_dir: P) -> Result<Self> {
        let timeout = config::DEFAULT_TIMEOUT;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config::USER_AGENT)
            .build()?;
        Ok(Self {
            out_dir: out_dir.as_ref().to_path_buf(),
            client,
            overrides: HashMap::new(),
            min_priced: config::MIN_PRICED_ITEMS,
            timeout,
        })
    }

    /// Pin the market slug for an item whose name does not map cleanly.
    pub fn slug_override(mut self, item: impl Into<String>, url_name: impl Into<String>) -> Self {
        self.overrides.insert(item.into(), url_name.into());
        self
    }

    /// Minimum number of priced items for the refresh to count as healthy.
    pub fn min_priced(mut self, min_priced: usize) -> Self {
        self.min_priced = min_priced;
        self
    }

    /// Run the full refresh against the live upstream sources.
    pub fn run(&self) -> Result<UpdateSummary> {
        tracing::info!(url = config::RELICS_ALL_URL, "downloading full relic drop table");
        let payload = self.fetch_json(config::RELICS_ALL_URL)?;

        let vault_map = match self.fetch_json(config::RELICS_VAULT_MAP_URL) {
            Ok(v) => build_vaulted_map(&v),
            Err(e) => {
                tracing::warn!(error = %e, "vault flags unavailable; unknown relics default to vaulted");
                HashMap::new()
            }
        };
        tracing::info!(entries = vault_map.len(), "vault map loaded");

        let market = MarketClient::new(self.timeout)?;
        self.run_with(&payload, &vault_map, &market)
    }

    /// Rebuild and write both documents from an already fetched drop table,
    /// pricing through `source`.
    pub fn run_with<S: StatisticsSource + ?Sized>(
        &self,
        payload: &Value,
        vault_map: &HashMap<String, bool>,
        source: &S,
    ) -> Result<UpdateSummary> {
        let relics = build_relics_min(payload, vault_map)?;
        write_relics(&self.out_dir, &relics)?;

        let items = unique_reward_items(&relics);
        tracing::info!(count = items.len(), "unique reward items to price");
        let (prices, missing) = build_prices(&items, source, &self.overrides)?;

        write_prices(&self.out_dir, &prices)?;
        let missing = write_missing(&self.out_dir, &missing)?;

        if prices.len() < self.min_priced {
            return Err(RelicError::Data(format!(
                "too few prices ({}); market calls may be failing",
                prices.len()
            )));
        }

        Ok(UpdateSummary {
            relics: relics.len(),
            priced: prices.len(),
            missing,
        })
    }

    fn fetch_json(&self, url: &str) -> Result<Value> {
        let resp = self
            .client
            .get(url)
            .header("Accept", "application/json,text/plain,*/*")
            .send()?
            .error_for_status()?;
        Ok(resp.json()?)
    }
}

/// Write the catalog document. Refuses to publish an empty catalog.
pub fn write_relics(out_dir: &Path, relics: &[MinRelic]) -> Result<PathBuf> {
    if relics.is_empty() {
        return Err(RelicError::Data(
            "relic list is empty after parsing; refusing to publish []".to_string(),
        ));
    }
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(config::RELICS_FILE);
    fs::write(&path, serde_json::to_string(relics)?)?;
    tracing::info!(count = relics.len(), path = %path.display(), "relics written");
    Ok(path)
}

pub fn write_prices(out_dir: &Path, prices: &BTreeMap<String, i64>) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(config::PRICES_FILE);
    fs::write(&path, serde_json::to_string(prices)?)?;
    tracing::info!(count = prices.len(), path = %path.display(), "prices written");
    Ok(path)
}

/// Write the unpriced items as a text list and a JSON array, both sorted and
/// deduplicated. Returns the list written.
pub fn write_missing(out_dir: &Path, missing: &[String]) -> Result<Vec<String>> {
    let sorted: Vec<String> = missing
        .iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    fs::create_dir_all(out_dir)?;
    let mut text = String::new();
    for name in &sorted {
        text.push_str(name);
        text.push('\n');
    }
    fs::write(out_dir.join(config::MISSING_TXT_FILE), text)?;
    fs::write(
        out_dir.join(config::MISSING_JSON_FILE),
        serde_json::to_string_pretty(&sorted)?,
    )?;
    tracing::info!(count = sorted.len(), "missing prices written");
    Ok(sorted)
}
