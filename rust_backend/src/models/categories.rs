//! Categorical types: seasons, day types, and temperature buckets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Season of the year as labeled in the cleaned datasets.
///
/// Variants are declared in the canonical chart order (winter, spring,
/// summer, fall), so the derived `Ord` matches the order in which seasonal
/// output rows are emitted.
///
/// # Examples
///
/// ```
/// use bikeshare_rust::models::Season;
///
/// let season: Season = "summer".parse().unwrap();
/// assert_eq!(season, Season::Summer);
/// assert_eq!(season.as_str(), "summer");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// Fixed output order for all seasonal tables and charts.
    pub const CANONICAL_ORDER: [Season; 4] =
        [Season::Winter, Season::Spring, Season::Summer, Season::Fall];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
        }
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "winter" => Ok(Season::Winter),
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" | "autumn" => Ok(Season::Fall),
            other => Err(format!(
                "Invalid season: '{}'. Must be 'winter', 'spring', 'summer', or 'fall'",
                other
            )),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Day-type choice for the hourly view: weekdays only, weekends only, or all days.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayType {
    Weekday,
    Weekend,
    All,
}

impl FromStr for DayType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Weekday" => Ok(DayType::Weekday),
            "Weekend" => Ok(DayType::Weekend),
            "All" => Ok(DayType::All),
            other => Err(format!(
                "Invalid day type: '{}'. Must be 'Weekday', 'Weekend', or 'All'",
                other
            )),
        }
    }
}

/// Temperature category derived from the normalized `temp` column.
///
/// Buckets partition (0, 1] into three left-open/right-closed intervals:
/// (0, 0.3] is Cold, (0.3, 0.6] is Moderate, (0.6, 1.0] is Hot. A
/// temperature of exactly 0 falls in no bucket and the record is excluded
/// from temperature summaries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TempBucket {
    Cold,
    Moderate,
    Hot,
}

impl TempBucket {
    /// Fixed output order for temperature tables and charts.
    pub const CANONICAL_ORDER: [TempBucket; 3] =
        [TempBucket::Cold, TempBucket::Moderate, TempBucket::Hot];

    /// Assign a bucket to a normalized temperature, or `None` if the value
    /// falls outside all three intervals.
    pub fn for_temp(temp: f64) -> Option<TempBucket> {
        if temp > 0.0 && temp <= 0.3 {
            Some(TempBucket::Cold)
        } else if temp > 0.3 && temp <= 0.6 {
            Some(TempBucket::Moderate)
        } else if temp > 0.6 && temp <= 1.0 {
            Some(TempBucket::Hot)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TempBucket::Cold => "Cold",
            TempBucket::Moderate => "Moderate",
            TempBucket::Hot => "Hot",
        }
    }
}

impl fmt::Display for TempBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
