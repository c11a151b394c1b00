//! Async wrapper around [`RelicPicker`] for use in async runtimes (Tokio, etc.).
//!
//! Loading the documents involves file and network I/O, so construction and
//! every operation run on the blocking thread pool via
//! [`tokio::task::spawn_blocking`].
//!
//! # Example
//!
//! ```no_run
//! use relic_picker::{AsyncRelicPicker, Selection};
//!
//! #[tokio::main]
//! async fn main() {
//!     let picker = AsyncRelicPicker::builder().data_dir("data").build().await.unwrap();
//!
//!     let names = picker.run(|p| Ok(p.relics().names().len())).await.unwrap();
//!
//!     let selection = Selection::new().with(0, "Axi A1").unwrap();
//!     let outcome = picker.show_rewards(selection).await.unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config;
use crate::error::{RelicError, Result};
use crate::selection::{RewardOutcome, Selection};
use crate::RelicPicker;

// ---------------------------------------------------------------------------
// AsyncRelicPickerBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncRelicPicker`].
pub struct AsyncRelicPickerBuilder {
    data_dir: Option<PathBuf>,
    base_url: Option<String>,
    offline: bool,
    timeout: Duration,
}

impl Default for AsyncRelicPickerBuilder {
    fn default() -> Self {
        Self {
            data_dir: None,
            base_url: None,
            offline: false,
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl AsyncRelicPickerBuilder {
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load the documents on the blocking pool and build the picker.
    pub async fn build(self) -> Result<AsyncRelicPicker> {
        tokio::task::spawn_blocking(move || {
            let mut builder = RelicPicker::builder();
            if let Some(dir) = self.data_dir {
                builder = builder.data_dir(dir);
            }
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            let picker = builder.offline(self.offline).timeout(self.timeout).build()?;
            Ok(AsyncRelicPicker {
                inner: Arc::new(Mutex::new(picker)),
            })
        })
        .await
        .map_err(|e| RelicError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncRelicPicker
// ---------------------------------------------------------------------------

/// Async wrapper around [`RelicPicker`].
#[derive(Clone)]
pub struct AsyncRelicPicker {
    inner: Arc<Mutex<RelicPicker>>,
}

impl AsyncRelicPicker {
    pub fn builder() -> AsyncRelicPickerBuilder {
        AsyncRelicPickerBuilder::default()
    }

    /// Run a sync picker operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&RelicPicker) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let picker = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = picker
                .lock()
                .map_err(|_| RelicError::InvalidArgument("picker lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| RelicError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Rewards for the filled slots of `selection`.
    pub async fn show_rewards(&self, selection: Selection) -> Result<RewardOutcome> {
        self.run(move |p| p.rewards().show(&selection)).await
    }

    /// Download fresh documents and rebuild the catalog.
    pub async fn reload(&self) -> Result<()> {
        let picker = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = picker
                .lock()
                .map_err(|_| RelicError::InvalidArgument("picker lock poisoned".into()))?;
            guard.reload()
        })
        .await
        .map_err(|e| RelicError::InvalidArgument(format!("Task join error: {e}")))?
    }
}
