//! Dataset store: one-time load of the two cleaned datasets.
//!
//! The day and hour datasets are read once per process and memoized in a
//! global `OnceLock`, so repeated dashboard interactions never touch the
//! backing files again. The memoized store is read-only and safe to share
//! across concurrent sessions; filter criteria and summaries stay
//! request-local.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::{Dataset, Granularity};
use crate::parsing::load_dataset;
use crate::preprocessing::validate_dataset;

fn default_preview_rows() -> usize {
    // Matches the dashboard's head(100) preview cap
    100
}

/// Store configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub data: DataSettings,
}

/// Data source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    pub day_csv: PathBuf,
    pub hour_csv: PathBuf,
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

impl StoreConfig {
    /// Load store configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AnalyticsError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            AnalyticsError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: StoreConfig = toml::from_str(&content).map_err(|e| {
            AnalyticsError::Configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load store configuration from the default location.
    ///
    /// Searches for `dashboard.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, AnalyticsError> {
        let search_paths = vec![
            PathBuf::from("dashboard.toml"),
            PathBuf::from("rust_backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(AnalyticsError::Configuration(
            "No dashboard.toml found in standard locations".to_string(),
        ))
    }
}

/// The two immutable datasets plus presentation limits, loaded once.
#[derive(Debug)]
pub struct DatasetStore {
    pub day: Dataset,
    pub hour: Dataset,
    pub preview_rows: usize,
}

impl DatasetStore {
    /// The dataset backing the given granularity selection.
    pub fn dataset(&self, granularity: Granularity) -> &Dataset {
        match granularity {
            Granularity::Day => &self.day,
            Granularity::Hour => &self.hour,
        }
    }
}

/// Global dataset store initialized once per process.
static STORE: OnceLock<DatasetStore> = OnceLock::new();

fn load_granularity(path: &Path, granularity: Granularity) -> AnalyticsResult<Dataset> {
    let dataset = load_dataset(path, granularity)
        .map_err(|e| AnalyticsError::DataLoad(format!("{:#}", e)))?;

    let (is_valid, issues) = validate_dataset(&dataset);
    if !is_valid {
        for issue in &issues {
            log::warn!(
                "{} dataset quality issue: {}",
                granularity.as_str(),
                issue
            );
        }
    }

    log::info!(
        "Loaded {} dataset: {} rows from {}",
        granularity.as_str(),
        dataset.len(),
        path.display()
    );

    Ok(dataset)
}

/// Load both datasets according to `config`. No memoization; callers that
/// want the process-wide store go through [`init_store`] / [`get_store`].
pub fn load_store(config: &StoreConfig) -> AnalyticsResult<DatasetStore> {
    let day = load_granularity(&config.data.day_csv, Granularity::Day)?;
    let hour = load_granularity(&config.data.hour_csv, Granularity::Hour)?;

    Ok(DatasetStore {
        day,
        hour,
        preview_rows: config.data.preview_rows,
    })
}

/// Initialize the global dataset store. Idempotent: a second call is a no-op.
pub fn init_store(config: &StoreConfig) -> Result<()> {
    if STORE.get().is_some() {
        return Ok(());
    }

    let store = load_store(config).map_err(|e| anyhow::Error::msg(e.to_string()))?;
    let _ = STORE.set(store);
    Ok(())
}

/// Get a reference to the global dataset store.
///
/// Falls back to configuration from the default location if the store has
/// not been initialized explicitly.
pub fn get_store() -> Result<&'static DatasetStore> {
    if STORE.get().is_none() {
        if let Ok(config) = StoreConfig::from_default_location() {
            let _ = init_store(&config);
        }
    }

    STORE
        .get()
        .context("Dataset store not initialized. Call init_store() first.")
}
