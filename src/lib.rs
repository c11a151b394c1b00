//! Relic picker library.
//!
//! Loads a relic catalog and a price table from two static JSON documents,
//! orders relics by their natural name order, and merges the rewards of up to
//! four picked relics into one price-ordered list.
//!
//! # Quick start
//!
//! ```no_run
//! use relic_picker::{RelicPicker, RewardOutcome, Selection};
//!
//! let picker = RelicPicker::builder()
//!     .data_dir("data")
//!     .offline(true)
//!     .build()
//!     .unwrap();
//!
//! // Catalog in natural order, filtered by a search box
//! let axi = picker.relics().search("axi a");
//!
//! // Merge the rewards of the picked relics
//! let mut selection = Selection::new();
//! selection.set(0, "Axi A1").unwrap();
//! match picker.rewards().show(&selection).unwrap() {
//!     RewardOutcome::NeedAtLeastOnePick => println!("pick at least one relic"),
//!     RewardOutcome::Rewards(rows) => println!("{} rewards", rows.len()),
//! }
//! ```

pub mod aggregate;
#[cfg(feature = "async")]
pub mod async_client;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod relic_name;
pub mod selection;
pub mod update;

pub use aggregate::aggregate;
#[cfg(feature = "async")]
pub use async_client::AsyncRelicPicker;
pub use cache::CacheManager;
pub use catalog::Catalog;
pub use error::{RelicError, Result};
pub use models::{AggregatedReward, DropEntry, PriceTable, RelicRecord, UNKNOWN_PRICE};
pub use relic_name::{parse_relic_name, relic_natural_compare, ParsedRelicName};
pub use selection::{RewardOutcome, Selection, SLOT_COUNT};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// RelicPickerBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`RelicPicker`].
pub struct RelicPickerBuilder {
    data_dir: Option<PathBuf>,
    base_url: Option<String>,
    offline: bool,
    timeout: Duration,
}

impl Default for RelicPickerBuilder {
    fn default() -> Self {
        Self {
            data_dir: None,
            base_url: None,
            offline: false,
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl RelicPickerBuilder {
    /// Directory holding `Relics.min.json` and `prices.json`.
    ///
    /// Defaults to the platform cache directory (e.g. `~/.cache/relic-picker`).
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// URL the two documents are published under, used to download any file
    /// missing from the data directory.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Never download; only read files already in the data directory.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// HTTP timeout for downloads. Defaults to 60 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load both documents and build the picker.
    ///
    /// A missing catalog is an error. A missing or unreadable price table is
    /// not: the picker starts with no prices.
    pub fn build(self) -> Result<RelicPicker> {
        let mut cache = CacheManager::new(self.data_dir, self.base_url, self.offline, self.timeout)?;
        let relics = cache.load_relics()?;
        let prices = cache.load_prices();
        tracing::info!(relics = relics.len(), prices = prices.len(), "relic picker ready");
        Ok(RelicPicker {
            catalog: Catalog::new(relics, prices),
            cache,
        })
    }
}

// ---------------------------------------------------------------------------
// RelicPicker
// ---------------------------------------------------------------------------

/// The main entry point: owns the loaded [`Catalog`] and exposes query
/// interfaces as lightweight borrowing wrappers.
pub struct RelicPicker {
    catalog: Catalog,
    cache: CacheManager,
}

impl RelicPicker {
    pub fn builder() -> RelicPickerBuilder {
        RelicPickerBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Catalog listing and search.
    pub fn relics(&self) -> queries::RelicQuery<'_> {
        queries::RelicQuery::new(&self.catalog)
    }

    /// Price lookups.
    pub fn prices(&self) -> queries::PriceQuery<'_> {
        queries::PriceQuery::new(&self.catalog)
    }

    /// Reward lists for picked relics.
    pub fn rewards(&self) -> queries::RewardQuery<'_> {
        queries::RewardQuery::new(&self.catalog)
    }

    // -- Data lifecycle ----------------------------------------------------

    /// Download fresh documents and rebuild the catalog.
    ///
    /// Refused with [`RelicError::InvalidArgument`] when offline or without a
    /// base URL; the local files and the loaded catalog are left untouched.
    pub fn reload(&mut self) -> Result<()> {
        self.cache.redownload()?;
        let relics = self.cache.load_relics()?;
        let prices = self.cache.load_prices();
        self.catalog = Catalog::new(relics, prices);
        tracing::info!(relics = self.catalog.len(), "catalog reloaded");
        Ok(())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cache(&self) -> &CacheManager {
        &self.cache
    }
}

impl fmt::Display for RelicPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RelicPicker(data_dir={}, relics={}, prices={}, offline={})",
            self.cache.data_dir.display(),
            self.catalog.len(),
            self.catalog.prices().len(),
            self.cache.offline
        )
    }
}
