//! Rental records and granularity-tagged datasets.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Season;

/// Whether a dataset row represents one day or one hour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    Day,
    Hour,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Day => "Day",
            Granularity::Hour => "Hour",
        }
    }
}

impl std::str::FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Day" => Ok(Granularity::Day),
            "Hour" => Ok(Granularity::Hour),
            other => Err(format!(
                "Invalid granularity: '{}'. Must be 'Day' or 'Hour'",
                other
            )),
        }
    }
}

/// One row of the cleaned bike-sharing data.
///
/// `hour` is `Some` only at Hour granularity. All environmental measurements
/// (`temp`, `atemp`, `humidity`, `windspeed`) are normalized into [0, 1] by
/// the data provider. `total` is expected to equal `casual + registered`;
/// the loader reports violations as validation warnings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BikeRecord {
    pub date: NaiveDate,
    pub season: Season,
    pub hour: Option<u8>,
    pub weekday: String,
    pub weather: String,
    pub temp: f64,
    pub atemp: f64,
    pub humidity: f64,
    pub windspeed: f64,
    pub casual: u32,
    pub registered: u32,
    pub total: u32,
}

impl BikeRecord {
    /// Whether the weekday name falls on monday..friday.
    pub fn is_weekday(&self) -> bool {
        matches!(
            self.weekday.as_str(),
            "monday" | "tuesday" | "wednesday" | "thursday" | "friday"
        )
    }
}

/// Ordered sequence of records sharing a fixed granularity.
///
/// The granularity is set at load time and never changes; the store hands
/// out shared references only, so datasets are read-only for the process
/// lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub granularity: Granularity,
    pub records: Vec<BikeRecord>,
}

impl Dataset {
    pub fn new(granularity: Granularity, records: Vec<BikeRecord>) -> Self {
        Self {
            granularity,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
