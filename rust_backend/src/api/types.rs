//! Frontend-facing Data Transfer Objects (DTOs).
//!
//! ## Design Guidelines
//!
//! 1. **Primitives Only**: counts as integers, means as f64, labels as String
//! 2. **Flat Structures**: avoid deep nesting, optimize for chart ergonomics
//! 3. **Ordered**: summary vectors are emitted in their canonical chart order
//! 4. **Serializable**: every type serializes to JSON for the frontend

use serde::{Deserialize, Serialize};

use crate::models::{Granularity, Season, TempBucket};

/// Mean rentals for one hour of the day.
///
/// Hours with no matching records are omitted from the summary; the line
/// chart consuming this skips missing x-values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPoint {
    /// Hour of the day in 24h format (0-23)
    pub hour: u8,
    /// Arithmetic mean of total rentals over matching records
    pub mean_count: f64,
    /// Number of records behind the mean
    pub n_records: usize,
}

/// Total rentals for one season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonTotal {
    pub season: Season,
    pub total: u64,
}

/// Total rentals for one temperature bucket.
///
/// Unlike seasons, all three buckets are always present, absent ones as
/// explicit zeros, because the bar chart expects all three bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempBucketTotal {
    pub bucket: TempBucket,
    pub total: u64,
}

/// Observed filter domains for initializing the sidebar widgets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Seasons present in the active dataset, canonical order
    pub seasons: Vec<Season>,
    /// Weather labels present in the active dataset, sorted
    pub weather: Vec<String>,
}

/// Row counts for the active view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub granularity: Granularity,
    pub total_rows: usize,
    pub filtered_rows: usize,
}

/// One feature/description pair of the data dictionary expander.
#[derive(Debug, Clone, Serialize)]
pub struct DictionaryEntry {
    pub feature: &'static str,
    pub description: &'static str,
}

/// Complete payload for one dashboard recomputation pass.
///
/// Summaries not applicable to the active granularity are `None`: the
/// hourly curve only exists in the Hour view, the seasonal and temperature
/// totals only in the Day view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    pub info: DatasetInfo,
    /// First N filtered rows as JSON objects for the tabular preview
    pub preview: Vec<serde_json::Value>,
    pub hourly: Option<Vec<HourlyPoint>>,
    pub seasonal: Option<Vec<SeasonTotal>>,
    pub temperature: Option<Vec<TempBucketTotal>>,
}
