use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

pub const RELICS_FILE: &str = "Relics.min.json";
pub const PRICES_FILE: &str = "prices.json";
pub const MISSING_TXT_FILE: &str = "missing_prices.txt";
pub const MISSING_JSON_FILE: &str = "missing_prices.json";

/// Full drop table (vaulted and current relics, every refinement state).
pub const RELICS_ALL_URL: &str =
    "https://raw.githubusercontent.com/WFCD/warframe-drop-data/master/data/relics.json";
/// Smaller relic list carrying the `vaulted` flag.
pub const RELICS_VAULT_MAP_URL: &str =
    "https://raw.githubusercontent.com/WFCD/warframe-relic-data/master/data/Relics.min.json";

pub const MARKET_BASE: &str = "https://api.warframe.market/v1";
pub const MARKET_PLATFORM: &str = "pc";
pub const MARKET_LANGUAGE: &str = "en";

pub const USER_AGENT: &str = "relic-picker/0.1 (+data refresh)";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const MARKET_THROTTLE: Duration = Duration::from_millis(400);

/// A refresh that prices fewer items than this is treated as broken.
pub const MIN_PRICED_ITEMS: usize = 25;

pub fn market_statistics_url(url_name: &str) -> String {
    format!("{}/items/{}/statistics", MARKET_BASE, url_name)
}

pub fn data_files() -> HashMap<&'static str, &'static str> {
    HashMap::from([("relics", RELICS_FILE), ("prices", PRICES_FILE)])
}

pub fn default_data_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("relic-picker")
    } else {
        PathBuf::from(".relic-picker-data")
    }
}
