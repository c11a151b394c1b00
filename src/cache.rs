//! Local data directory holding the two static documents.
//!
//! The relic catalog and the price table are published as plain JSON files.
//! They are downloaded lazily from a base URL on first access and read from the
//! data directory afterwards.

use crate::config;
use crate::error::{RelicError, Result};
use crate::models::{PriceTable, RelicRecord};
use flate2::read::GzDecoder;
use reqwest::blocking::Client;
use serde_json::Value;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Downloads and caches the static relic and price documents.
pub struct CacheManager {
    /// Directory where the data files are stored.
    pub data_dir: PathBuf,
    /// Where the documents are published, e.g. `https://example.org/data`.
    pub base_url: Option<String>,
    /// If true, never download (use local files only).
    pub offline: bool,
    timeout: Duration,
    client: Option<Client>,
}

impl CacheManager {
    /// Create a new cache manager.
    ///
    /// If `data_dir` is `None`, uses the platform-appropriate default directory.
    /// Creates the directory if it does not exist.
    pub fn new(
        data_dir: Option<PathBuf>,
        base_url: Option<String>,
        offline: bool,
        timeout: Duration,
    ) -> Result<Self> {
        let dir = data_dir.unwrap_or_else(config::default_data_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self {
            data_dir: dir,
            base_url: base_url.map(|u| u.trim_end_matches('/').to_string()),
            offline,
            timeout,
            client: None,
        })
    }

    /// Lazy HTTP client, created on first use.
    pub fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            let client = Client::builder()
                .timeout(self.timeout)
                .user_agent(config::USER_AGENT)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()?;
            self.client = Some(client);
        }
        self.client
            .as_ref()
            .ok_or_else(|| RelicError::NotFound("HTTP client unavailable".to_string()))
    }

    /// Download one file to `dest` via a temp file, renaming on success so an
    /// interrupted download never leaves a partial file behind.
    fn download_file(&mut self, base_url: &str, filename: &str, dest: &Path) -> Result<()> {
        let url = format!("{}/{}", base_url, filename);
        tracing::info!(url = %url, "downloading data file");

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_dest = dest.with_extension(format!(
            "{}.tmp",
            dest.extension().and_then(|e| e.to_str()).unwrap_or("")
        ));

        let client = self.client()?.clone();
        let result = (|| -> Result<()> {
            let resp = client.get(&url).send()?.error_for_status()?;
            let bytes = resp.bytes()?;
            fs::write(&tmp_dest, &bytes)?;
            fs::rename(&tmp_dest, dest)?;
            Ok(())
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp_dest);
        }

        result
    }

    /// Resolve a logical file name (`"relics"`, `"prices"`) to a local path,
    /// downloading the file if it is not present yet.
    ///
    /// A gzipped copy (`<file>.gz`) is used when the plain file is missing.
    pub fn ensure_file(&mut self, name: &str) -> Result<PathBuf> {
        let files = config::data_files();
        let filename = *files
            .get(name)
            .ok_or_else(|| RelicError::NotFound(format!("Unknown data file: {}", name)))?;

        let local_path = self.data_dir.join(filename);
        if local_path.exists() {
            return Ok(local_path);
        }
        let gz_path = self.data_dir.join(format!("{}.gz", filename));
        if gz_path.exists() {
            return Ok(gz_path);
        }

        if self.offline {
            return Err(RelicError::NotFound(format!(
                "Data file {} not present and offline mode is enabled",
                filename
            )));
        }
        let base_url = self.base_url.clone().ok_or_else(|| {
            RelicError::NotFound(format!(
                "Data file {} not present and no base URL is configured",
                filename
            ))
        })?;

        self.download_file(&base_url, filename, &local_path)?;
        Ok(local_path)
    }

    /// Load and parse a data file (handles `.gz` transparently).
    ///
    /// If the file is corrupt it is deleted so the next call downloads a
    /// fresh copy.
    pub fn load_json(&mut self, name: &str) -> Result<Value> {
        let path = self.ensure_file(name)?;

        let parse_result = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
            let file = fs::File::open(&path)?;
            let mut decoder = BufReader::new(GzDecoder::new(BufReader::new(file)));
            let mut contents = String::new();
            decoder.read_to_string(&mut contents)?;
            serde_json::from_str(&contents).map_err(RelicError::from)
        } else {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents).map_err(RelicError::from)
        };

        match parse_result {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "corrupt data file; removing");
                let _ = fs::remove_file(&path);
                Err(RelicError::NotFound(format!(
                    "Data file '{}' was corrupt and has been removed. \
                     Retry to re-download. Original error: {}",
                    path.file_name().and_then(|n| n.to_str()).unwrap_or("unknown"),
                    e
                )))
            }
        }
    }

    /// Load the relic catalog.
    ///
    /// Accepts a top-level array or an object wrapping it under `data` or
    /// `relics`. Rows that are not objects are skipped.
    pub fn load_relics(&mut self) -> Result<Vec<RelicRecord>> {
        let data = self.load_json("relics")?;
        let rows = match data {
            Value::Array(arr) => arr,
            Value::Object(mut map) => match map.remove("data").or_else(|| map.remove("relics")) {
                Some(Value::Array(arr)) => arr,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };

        let total = rows.len();
        let relics: Vec<RelicRecord> = rows.into_iter().filter_map(RelicRecord::from_value).collect();
        if relics.len() != total {
            tracing::warn!(skipped = total - relics.len(), "skipped malformed catalog rows");
        }
        tracing::debug!(count = relics.len(), "loaded relic catalog");
        Ok(relics)
    }

    /// Load the price table. Never fails: a missing or unreadable document
    /// yields an empty table, so every reward shows as unpriced.
    pub fn load_prices(&mut self) -> PriceTable {
        match self.load_json("prices") {
            Ok(value) => {
                let table = PriceTable::from_value(&value);
                tracing::debug!(count = table.len(), "loaded price table");
                table
            }
            Err(e) => {
                tracing::warn!(error = %e, "price table unavailable; continuing without prices");
                PriceTable::default()
            }
        }
    }

    /// Download fresh copies of both documents over the local ones.
    ///
    /// Each file goes through a temp file and only replaces the existing copy
    /// once fully downloaded, so a failed download leaves the data directory
    /// as it was. Refused when offline or when no base URL is configured.
    pub fn redownload(&mut self) -> Result<()> {
        if self.offline {
            return Err(RelicError::InvalidArgument(
                "cannot re-download data files in offline mode".to_string(),
            ));
        }
        let base_url = self.base_url.clone().ok_or_else(|| {
            RelicError::InvalidArgument("cannot re-download data files without a base URL".to_string())
        })?;

        for filename in [config::RELICS_FILE, config::PRICES_FILE] {
            let dest = self.data_dir.join(filename);
            self.download_file(&base_url, filename, &dest)?;
            let gz_path = self.data_dir.join(format!("{}.gz", filename));
            if gz_path.exists() {
                fs::remove_file(&gz_path)?;
            }
        }
        Ok(())
    }

    /// Close the HTTP client, if open.
    pub fn close(&mut self) {
        self.client = None;
    }
}
