//! Dataset quality validation.
//!
//! Checks the invariants the cleaned datasets are supposed to satisfy:
//! `cnt = casual + registered`, normalized measurements inside [0, 1], and
//! one row per date at Day granularity. Violations are reported as warnings
//! and logged by the store; they do not fail the load.

use std::collections::HashSet;

use crate::models::{Dataset, Granularity};

/// Validate dataset invariants and report data quality issues
pub fn validate_dataset(dataset: &Dataset) -> (bool, Vec<String>) {
    let mut issues: Vec<String> = Vec::new();

    // Check the count identity
    let mismatched_totals = dataset
        .records
        .iter()
        .filter(|r| r.total != r.casual + r.registered)
        .count();
    if mismatched_totals > 0 {
        issues.push(format!(
            "{} rows violate cnt = casual + registered",
            mismatched_totals
        ));
    }

    // Check normalized measurements (must be in [0, 1])
    let out_of_range = dataset
        .records
        .iter()
        .filter(|r| {
            [r.temp, r.atemp, r.humidity, r.windspeed]
                .iter()
                .any(|v| !(0.0..=1.0).contains(v))
        })
        .count();
    if out_of_range > 0 {
        issues.push(format!(
            "{} rows have normalized measurements outside [0, 1]",
            out_of_range
        ));
    }

    // Day granularity should carry one row per date
    if dataset.granularity == Granularity::Day {
        let mut seen = HashSet::new();
        let duplicate_dates = dataset
            .records
            .iter()
            .filter(|r| !seen.insert(r.date))
            .count();
        if duplicate_dates > 0 {
            issues.push(format!("{} duplicate dates in day dataset", duplicate_dates));
        }
    }

    // Hour granularity rows must carry an hour
    if dataset.granularity == Granularity::Hour {
        let missing_hours = dataset.records.iter().filter(|r| r.hour.is_none()).count();
        if missing_hours > 0 {
            issues.push(format!("{} hourly rows have no hour value", missing_hours));
        }
    }

    (issues.is_empty(), issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BikeRecord, Season};
    use chrono::NaiveDate;

    fn record(date: &str, casual: u32, registered: u32, total: u32) -> BikeRecord {
        BikeRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            season: Season::Winter,
            hour: None,
            weekday: "monday".to_string(),
            weather: "Clear".to_string(),
            temp: 0.3,
            atemp: 0.3,
            humidity: 0.5,
            windspeed: 0.1,
            casual,
            registered,
            total,
        }
    }

    #[test]
    fn test_valid_dataset() {
        let dataset = Dataset::new(
            Granularity::Day,
            vec![record("2011-01-01", 10, 20, 30), record("2011-01-02", 5, 5, 10)],
        );
        let (is_valid, issues) = validate_dataset(&dataset);
        assert!(is_valid, "unexpected issues: {:?}", issues);
    }

    #[test]
    fn test_count_identity_violation() {
        let dataset = Dataset::new(Granularity::Day, vec![record("2011-01-01", 10, 20, 31)]);
        let (is_valid, issues) = validate_dataset(&dataset);
        assert!(!is_valid);
        assert!(issues[0].contains("cnt = casual + registered"));
    }

    #[test]
    fn test_duplicate_dates() {
        let dataset = Dataset::new(
            Granularity::Day,
            vec![record("2011-01-01", 1, 1, 2), record("2011-01-01", 2, 2, 4)],
        );
        let (is_valid, issues) = validate_dataset(&dataset);
        assert!(!is_valid);
        assert!(issues.iter().any(|i| i.contains("duplicate dates")));
    }

    #[test]
    fn test_out_of_range_measurement() {
        let mut bad = record("2011-01-01", 1, 1, 2);
        bad.humidity = 1.5;
        let dataset = Dataset::new(Granularity::Day, vec![bad]);
        let (is_valid, issues) = validate_dataset(&dataset);
        assert!(!is_valid);
        assert!(issues.iter().any(|i| i.contains("outside [0, 1]")));
    }
}
