use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use polars::prelude::*;
use std::path::Path;

use crate::models::{BikeRecord, Dataset, Granularity, Season};

/// Columns that every granularity must provide.
const REQUIRED_COLUMNS: [&str; 11] = [
    "dteday",
    "season",
    "weekday",
    "weathersit",
    "temp",
    "atemp",
    "hum",
    "windspeed",
    "casual",
    "registered",
    "cnt",
];

/// Parse a cleaned bike-sharing CSV file into a Polars DataFrame
pub fn parse_bike_csv(csv_path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path.into()))?
        .finish()
        .with_context(|| format!("Failed to parse CSV into DataFrame: {}", csv_path.display()))?;

    // Get existing column names
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    // Cast columns to expected types if they were inferred incorrectly
    let mut lazy_df = df.lazy();

    // Categorical columns should be String (older exports carry numeric codes)
    for col_name in ["season", "weekday", "weathersit"] {
        if column_names.contains(&col_name.to_string()) {
            lazy_df = lazy_df.with_column(col(col_name).cast(DataType::String));
        }
    }

    // Numeric columns that should be Float64 (may be inferred as i64 if no decimal point)
    let float_columns = [
        "hr",
        "temp",
        "atemp",
        "hum",
        "windspeed",
        "casual",
        "registered",
        "cnt",
    ];

    for col_name in float_columns {
        if column_names.contains(&col_name.to_string()) {
            lazy_df = lazy_df.with_column(
                when(col(col_name).is_not_null())
                    .then(col(col_name).cast(DataType::Float64))
                    .otherwise(lit(NULL).cast(DataType::Float64))
                    .alias(col_name),
            );
        }
    }

    let df = lazy_df
        .collect()
        .context("Failed to cast columns to expected types")?;

    Ok(df)
}

/// Parse a cleaned CSV file and convert it into a granularity-tagged dataset
pub fn load_dataset(csv_path: &Path, granularity: Granularity) -> Result<Dataset> {
    let df = parse_bike_csv(csv_path)?;
    let records = dataframe_to_records(&df, granularity)
        .with_context(|| format!("Invalid data in {}", csv_path.display()))?;
    Ok(Dataset::new(granularity, records))
}

/// Convert a Polars DataFrame into BikeRecord structures
pub fn dataframe_to_records(df: &DataFrame, granularity: Granularity) -> Result<Vec<BikeRecord>> {
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|c| !column_names.contains(&c.to_string()))
        .collect();
    if granularity == Granularity::Hour && !column_names.contains(&"hr".to_string()) {
        missing.push("hr");
    }
    if !missing.is_empty() {
        bail!("Missing required columns: {}", missing.join(", "));
    }

    // Extract columns
    let dates = df.column("dteday")?.str()?;
    let seasons = df.column("season")?.str()?;
    let weekdays = df.column("weekday")?.str()?;
    let weather = df.column("weathersit")?.str()?;
    let temps = df.column("temp")?.f64()?;
    let atemps = df.column("atemp")?.f64()?;
    let humidities = df.column("hum")?.f64()?;
    let windspeeds = df.column("windspeed")?.f64()?;
    let casuals = df.column("casual")?.f64()?;
    let registereds = df.column("registered")?.f64()?;
    let totals = df.column("cnt")?.f64()?;

    let hours = match granularity {
        Granularity::Hour => Some(df.column("hr")?.f64()?),
        Granularity::Day => None,
    };

    let mut records = Vec::with_capacity(df.height());

    for i in 0..df.height() {
        let date_str = dates
            .get(i)
            .with_context(|| format!("Missing dteday at row {}", i))?;
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .with_context(|| format!("Invalid dteday '{}' at row {}", date_str, i))?;

        let season_str = seasons
            .get(i)
            .with_context(|| format!("Missing season at row {}", i))?;
        let season: Season = season_str
            .parse()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("Invalid season at row {}", i))?;

        let weekday = weekdays
            .get(i)
            .with_context(|| format!("Missing weekday at row {}", i))?
            .to_lowercase();

        let weather_label = weather
            .get(i)
            .with_context(|| format!("Missing weathersit at row {}", i))?
            .to_string();

        let hour = match hours {
            Some(col) => {
                let raw = col
                    .get(i)
                    .with_context(|| format!("Missing hr at row {}", i))?;
                if !(0.0..=23.0).contains(&raw) {
                    bail!("Invalid hr {} at row {}: must be in 0-23", raw, i);
                }
                Some(raw as u8)
            }
            None => None,
        };

        let record = BikeRecord {
            date,
            season,
            hour,
            weekday,
            weather: weather_label,
            temp: temps
                .get(i)
                .with_context(|| format!("Missing temp at row {}", i))?,
            atemp: atemps
                .get(i)
                .with_context(|| format!("Missing atemp at row {}", i))?,
            humidity: humidities
                .get(i)
                .with_context(|| format!("Missing hum at row {}", i))?,
            windspeed: windspeeds
                .get(i)
                .with_context(|| format!("Missing windspeed at row {}", i))?,
            casual: casuals
                .get(i)
                .with_context(|| format!("Missing casual at row {}", i))?
                as u32,
            registered: registereds
                .get(i)
                .with_context(|| format!("Missing registered at row {}", i))?
                as u32,
            total: totals
                .get(i)
                .with_context(|| format!("Missing cnt at row {}", i))? as u32,
        };

        records.push(record);
    }

    Ok(records)
}
