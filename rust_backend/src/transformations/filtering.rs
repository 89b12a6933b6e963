use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{BikeRecord, Dataset, DayType, Granularity, Season};

/// User-selected filter values for one recomputation pass.
///
/// An empty selection set yields an empty result for that dimension: the UI
/// initializes every multiselect to the full observed domain (see
/// [`FilterCriteria::select_all`]), so an empty set only arises when the
/// user deliberately clears a filter. Selected values not present in the
/// active dataset match nothing; multiselect widgets can transiently pass
/// stale values while switching granularity, so unknown values are ignored
/// rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub seasons: HashSet<Season>,
    pub weather: HashSet<String>,
    pub day_type: DayType,
}

impl FilterCriteria {
    /// Criteria matching everything present in `dataset`, mirroring the
    /// dashboard's initial widget state (every option selected, day type All).
    pub fn select_all(dataset: &Dataset) -> Self {
        Self {
            seasons: dataset.records.iter().map(|r| r.season).collect(),
            weather: dataset.records.iter().map(|r| r.weather.clone()).collect(),
            day_type: DayType::All,
        }
    }
}

/// Filter records by season membership (Day granularity dimension)
pub fn filter_by_season(records: &[BikeRecord], selected: &HashSet<Season>) -> Vec<BikeRecord> {
    records
        .iter()
        .filter(|r| selected.contains(&r.season))
        .cloned()
        .collect()
}

/// Filter records by weather label membership
pub fn filter_by_weather(records: &[BikeRecord], selected: &HashSet<String>) -> Vec<BikeRecord> {
    records
        .iter()
        .filter(|r| selected.contains(&r.weather))
        .cloned()
        .collect()
}

/// Filter records by day type (Hour granularity dimension)
pub fn filter_by_day_type(records: &[BikeRecord], day_type: DayType) -> Vec<BikeRecord> {
    match day_type {
        DayType::All => records.to_vec(),
        DayType::Weekday => records.iter().filter(|r| r.is_weekday()).cloned().collect(),
        DayType::Weekend => records
            .iter()
            .filter(|r| !r.is_weekday())
            .cloned()
            .collect(),
    }
}

/// Apply every filter dimension relevant to the dataset's granularity.
///
/// The season filter only applies to the Day view and the day-type filter
/// only to the Hour view, matching the controls each view exposes.
pub fn filter_records(dataset: &Dataset, criteria: &FilterCriteria) -> Vec<BikeRecord> {
    match dataset.granularity {
        Granularity::Day => {
            let filtered = filter_by_season(&dataset.records, &criteria.seasons);
            filter_by_weather(&filtered, &criteria.weather)
        }
        Granularity::Hour => {
            let filtered = filter_by_weather(&dataset.records, &criteria.weather);
            filter_by_day_type(&filtered, criteria.day_type)
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn arb_record() -> impl Strategy<Value = BikeRecord> {
        (
            0..4usize,
            0..3usize,
            prop::sample::select(vec![
                "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
            ]),
            0u32..5000,
            0u32..5000,
        )
            .prop_map(|(season_idx, weather_idx, weekday, casual, registered)| {
                let weather = ["Clear", "Mist", "Light Rain"][weather_idx];
                BikeRecord {
                    date: NaiveDate::from_ymd_opt(2012, 1, 1).unwrap(),
                    season: Season::CANONICAL_ORDER[season_idx],
                    hour: Some(12),
                    weekday: weekday.to_string(),
                    weather: weather.to_string(),
                    temp: 0.5,
                    atemp: 0.5,
                    humidity: 0.5,
                    windspeed: 0.1,
                    casual,
                    registered,
                    total: casual + registered,
                }
            })
    }

    fn arb_season_set() -> impl Strategy<Value = HashSet<Season>> {
        prop::collection::hash_set(
            (0..4usize).prop_map(|i| Season::CANONICAL_ORDER[i]),
            0..=4,
        )
    }

    proptest! {
        #[test]
        fn prop_filters_commute(
            records in prop::collection::vec(arb_record(), 0..40),
            seasons in arb_season_set(),
            weather in prop::collection::hash_set(
                prop::sample::select(vec!["Clear", "Mist", "Light Rain", "Heavy Rain"])
                    .prop_map(String::from),
                0..=4,
            ),
        ) {
            let season_first = filter_by_weather(&filter_by_season(&records, &seasons), &weather);
            let weather_first = filter_by_season(&filter_by_weather(&records, &weather), &seasons);
            prop_assert_eq!(season_first, weather_first);
        }

        #[test]
        fn prop_full_domain_is_identity(records in prop::collection::vec(arb_record(), 0..40)) {
            let all: HashSet<Season> = Season::CANONICAL_ORDER.into_iter().collect();
            prop_assert_eq!(filter_by_season(&records, &all), records);
        }

        #[test]
        fn prop_filtered_subset_never_grows(
            records in prop::collection::vec(arb_record(), 0..40),
            seasons in arb_season_set(),
        ) {
            let filtered = filter_by_season(&records, &seasons);
            prop_assert!(filtered.len() <= records.len());
            prop_assert!(filtered.iter().all(|r| seasons.contains(&r.season)));
        }
    }
}
