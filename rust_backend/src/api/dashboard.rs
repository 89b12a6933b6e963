use crate::api::types::{
    DashboardData, DatasetInfo, DictionaryEntry, FilterOptions, HourlyPoint, SeasonTotal,
    TempBucketTotal,
};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::{Dataset, Granularity, Season};
use crate::services::{hourly_mean_counts, seasonal_totals, temperature_totals};
use crate::store::get_store;
use crate::transformations::{filter_records, FilterCriteria};

/// Route function name constant for the dashboard payload
pub const GET_DASHBOARD_DATA: &str = "get_dashboard_data";
/// Route function name constant for the filter domains
pub const GET_FILTER_OPTIONS: &str = "get_filter_options";

/// Observed filter domains for a dataset, used by the sidebar to initialize
/// its multiselects with every value present.
pub fn options_for(dataset: &Dataset) -> FilterOptions {
    let present: std::collections::HashSet<Season> =
        dataset.records.iter().map(|r| r.season).collect();
    let seasons = Season::CANONICAL_ORDER
        .into_iter()
        .filter(|s| present.contains(s))
        .collect();

    let mut weather: Vec<String> = dataset
        .records
        .iter()
        .map(|r| r.weather.clone())
        .collect::<std::collections::HashSet<_>>()
        .into_iter()
        .collect();
    weather.sort();

    FilterOptions { seasons, weather }
}

/// Get the filter domains for the active granularity (wraps the store)
pub fn filter_options(granularity: Granularity) -> AnalyticsResult<FilterOptions> {
    let store = get_store().map_err(|e| AnalyticsError::Internal(e.to_string()))?;
    Ok(options_for(store.dataset(granularity)))
}

/// One full recomputation pass over an already-loaded dataset.
///
/// Pure apart from allocation: filter, aggregate, and package the results.
/// Summaries irrelevant to the dataset's granularity are `None`.
pub fn build_dashboard_data(
    dataset: &Dataset,
    criteria: &FilterCriteria,
    preview_rows: usize,
) -> AnalyticsResult<DashboardData> {
    let filtered = filter_records(dataset, criteria);

    let preview: Result<Vec<serde_json::Value>, _> = filtered
        .iter()
        .take(preview_rows)
        .map(serde_json::to_value)
        .collect();
    let preview =
        preview.map_err(|e| AnalyticsError::Internal(format!("Preview serialization: {}", e)))?;

    let (hourly, seasonal, temperature): (
        Option<Vec<HourlyPoint>>,
        Option<Vec<SeasonTotal>>,
        Option<Vec<TempBucketTotal>>,
    ) = match dataset.granularity {
        Granularity::Hour => (Some(hourly_mean_counts(&filtered)), None, None),
        Granularity::Day => (
            None,
            Some(seasonal_totals(&filtered)),
            Some(temperature_totals(&filtered)),
        ),
    };

    Ok(DashboardData {
        info: DatasetInfo {
            granularity: dataset.granularity,
            total_rows: dataset.len(),
            filtered_rows: filtered.len(),
        },
        preview,
        hourly,
        seasonal,
        temperature,
    })
}

/// Get the complete dashboard payload for one interaction (wraps the store)
pub fn dashboard_data(
    granularity: Granularity,
    criteria: &FilterCriteria,
) -> AnalyticsResult<DashboardData> {
    let store = get_store().map_err(|e| AnalyticsError::Internal(e.to_string()))?;
    build_dashboard_data(store.dataset(granularity), criteria, store.preview_rows)
}

/// The static feature/description table shown in the dashboard's data
/// dictionary expander.
pub fn data_dictionary() -> &'static [DictionaryEntry] {
    static ENTRIES: [DictionaryEntry; 15] = [
        DictionaryEntry {
            feature: "instant",
            description: "Unique index for each record",
        },
        DictionaryEntry {
            feature: "dteday",
            description: "Date in YYYY-MM-DD format",
        },
        DictionaryEntry {
            feature: "season",
            description: "Season category",
        },
        DictionaryEntry {
            feature: "hr",
            description: "Hour of the day (0-23)",
        },
        DictionaryEntry {
            feature: "holiday",
            description: "Public holiday indicator",
        },
        DictionaryEntry {
            feature: "weekday",
            description: "Day of the week",
        },
        DictionaryEntry {
            feature: "workingday",
            description: "Working day indicator",
        },
        DictionaryEntry {
            feature: "weathersit",
            description: "Weather condition category",
        },
        DictionaryEntry {
            feature: "temp",
            description: "Normalized actual temperature (0-1)",
        },
        DictionaryEntry {
            feature: "atemp",
            description: "Normalized feeling temperature (0-1)",
        },
        DictionaryEntry {
            feature: "hum",
            description: "Normalized humidity level (0-1)",
        },
        DictionaryEntry {
            feature: "windspeed",
            description: "Normalized wind speed (0-1)",
        },
        DictionaryEntry {
            feature: "casual",
            description: "Count of casual (unregistered) users",
        },
        DictionaryEntry {
            feature: "registered",
            description: "Count of registered users",
        },
        DictionaryEntry {
            feature: "cnt",
            description: "Total bike rentals (casual + registered)",
        },
    ];
    &ENTRIES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BikeRecord, DayType};
    use chrono::NaiveDate;

    fn day_record(season: Season, weather: &str, temp: f64, total: u32) -> BikeRecord {
        BikeRecord {
            date: NaiveDate::from_ymd_opt(2011, 6, 15).unwrap(),
            season,
            hour: None,
            weekday: "wednesday".to_string(),
            weather: weather.to_string(),
            temp,
            atemp: temp,
            humidity: 0.5,
            windspeed: 0.1,
            casual: total / 2,
            registered: total - total / 2,
            total,
        }
    }

    fn criteria(seasons: &[Season], weather: &[&str]) -> FilterCriteria {
        FilterCriteria {
            seasons: seasons.iter().copied().collect(),
            weather: weather.iter().map(|w| w.to_string()).collect(),
            day_type: DayType::All,
        }
    }

    #[test]
    fn test_day_view_payload() {
        // Seasonal scenario: winter 10, summer 20 + 30, filter to summer only
        let dataset = Dataset::new(
            Granularity::Day,
            vec![
                day_record(Season::Winter, "Clear", 0.2, 10),
                day_record(Season::Summer, "Clear", 0.5, 20),
                day_record(Season::Summer, "Clear", 0.9, 30),
            ],
        );

        let data = build_dashboard_data(
            &dataset,
            &criteria(&[Season::Summer], &["Clear"]),
            100,
        )
        .unwrap();

        assert_eq!(data.info.total_rows, 3);
        assert_eq!(data.info.filtered_rows, 2);
        assert!(data.hourly.is_none());

        let seasonal = data.seasonal.unwrap();
        assert_eq!(seasonal.len(), 1);
        assert_eq!(seasonal[0].season, Season::Summer);
        assert_eq!(seasonal[0].total, 50);

        let temperature = data.temperature.unwrap();
        assert_eq!(temperature.len(), 3);
    }

    #[test]
    fn test_preview_is_capped() {
        let records: Vec<BikeRecord> = (0..10)
            .map(|i| day_record(Season::Spring, "Clear", 0.4, i))
            .collect();
        let dataset = Dataset::new(Granularity::Day, records);

        let data = build_dashboard_data(
            &dataset,
            &criteria(&[Season::Spring], &["Clear"]),
            4,
        )
        .unwrap();

        assert_eq!(data.preview.len(), 4);
        assert_eq!(data.info.filtered_rows, 10);
        assert!(data.preview[0].get("season").is_some());
    }

    #[test]
    fn test_empty_weather_selection_empties_payload() {
        let dataset = Dataset::new(
            Granularity::Day,
            vec![day_record(Season::Winter, "Clear", 0.2, 10)],
        );

        let data =
            build_dashboard_data(&dataset, &criteria(&[Season::Winter], &[]), 100).unwrap();
        assert_eq!(data.info.filtered_rows, 0);
        assert!(data.seasonal.unwrap().is_empty());
        // Temperature bars are always present, here as zeros
        let temperature = data.temperature.unwrap();
        assert_eq!(temperature.len(), 3);
        assert!(temperature.iter().all(|t| t.total == 0));
    }

    #[test]
    fn test_options_for() {
        let dataset = Dataset::new(
            Granularity::Day,
            vec![
                day_record(Season::Fall, "Mist", 0.4, 1),
                day_record(Season::Winter, "Clear", 0.2, 2),
                day_record(Season::Fall, "Clear", 0.5, 3),
            ],
        );

        let options = options_for(&dataset);
        assert_eq!(options.seasons, vec![Season::Winter, Season::Fall]);
        assert_eq!(options.weather, vec!["Clear".to_string(), "Mist".to_string()]);
    }

    #[test]
    fn test_data_dictionary_shape() {
        let entries = data_dictionary();
        assert_eq!(entries.len(), 15);
        assert_eq!(entries[0].feature, "instant");
        assert!(entries.iter().any(|e| e.feature == "cnt"));
    }
}
