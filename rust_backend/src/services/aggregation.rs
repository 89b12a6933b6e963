use std::collections::HashMap;

use crate::api::{HourlyPoint, SeasonTotal, TempBucketTotal};
use crate::models::{BikeRecord, Season, TempBucket};

/// Compute the mean total rentals per hour of the day.
///
/// Records without an hour (Day granularity rows) are skipped. Hours with
/// no matching records are omitted rather than zero-filled; the output is
/// sorted by ascending hour.
pub fn hourly_mean_counts(records: &[BikeRecord]) -> Vec<HourlyPoint> {
    // Group by hour, keeping (count, running sum)
    let mut hour_groups: HashMap<u8, (usize, u64)> = HashMap::new();

    for record in records {
        if let Some(hour) = record.hour {
            let entry = hour_groups.entry(hour).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += record.total as u64;
        }
    }

    let mut points: Vec<HourlyPoint> = hour_groups
        .into_iter()
        .map(|(hour, (n_records, sum))| HourlyPoint {
            hour,
            mean_count: sum as f64 / n_records as f64,
            n_records,
        })
        .collect();

    points.sort_by_key(|p| p.hour);

    points
}

/// Compute total rentals per season in the canonical chart order.
///
/// Seasons absent from the subset are omitted, not zero-filled.
pub fn seasonal_totals(records: &[BikeRecord]) -> Vec<SeasonTotal> {
    let mut season_groups: HashMap<Season, u64> = HashMap::new();

    for record in records {
        *season_groups.entry(record.season).or_insert(0) += record.total as u64;
    }

    Season::CANONICAL_ORDER
        .into_iter()
        .filter_map(|season| {
            season_groups
                .get(&season)
                .map(|&total| SeasonTotal { season, total })
        })
        .collect()
}

/// Compute total rentals per temperature bucket.
///
/// Records whose temperature falls outside every bucket (exactly 0, or out
/// of the normalized range) are excluded. The output always carries all
/// three buckets in order Cold, Moderate, Hot, absent ones as explicit
/// zeros.
pub fn temperature_totals(records: &[BikeRecord]) -> Vec<TempBucketTotal> {
    let mut bucket_groups: HashMap<TempBucket, u64> = HashMap::new();

    for record in records {
        if let Some(bucket) = TempBucket::for_temp(record.temp) {
            *bucket_groups.entry(bucket).or_insert(0) += record.total as u64;
        }
    }

    TempBucket::CANONICAL_ORDER
        .into_iter()
        .map(|bucket| TempBucketTotal {
            bucket,
            total: bucket_groups.get(&bucket).copied().unwrap_or(0),
        })
        .collect()
}
