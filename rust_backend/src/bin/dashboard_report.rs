//! Print a dashboard payload as JSON, for smoke-testing the backend without
//! the frontend.
//!
//! Usage: `dashboard_report [config.toml] [Day|Hour]`

use anyhow::{Context, Result};

use bikeshare_rust::api::dashboard_data;
use bikeshare_rust::models::Granularity;
use bikeshare_rust::store::{get_store, init_store, StoreConfig};
use bikeshare_rust::transformations::FilterCriteria;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => StoreConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => StoreConfig::from_default_location().context("Failed to load dashboard.toml")?,
    };

    let granularity: Granularity = args
        .next()
        .as_deref()
        .unwrap_or("Day")
        .parse()
        .map_err(anyhow::Error::msg)?;

    init_store(&config)?;
    let store = get_store()?;

    // Everything selected, the dashboard's initial state
    let criteria = FilterCriteria::select_all(store.dataset(granularity));
    let data = dashboard_data(granularity, &criteria)?;

    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}
