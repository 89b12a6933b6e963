//! Parsers for the cleaned bike-sharing data files.
//!
//! The dashboard reads two delimited text tables, one per granularity
//! (`day_clean.csv` and `hour_clean.csv`). This module parses them into a
//! Polars DataFrame and converts the frame into typed [`BikeRecord`]
//! sequences, validating the required schema along the way.
//!
//! [`BikeRecord`]: crate::models::BikeRecord

pub mod csv_parser;


pub use csv_parser::{dataframe_to_records, load_dataset, parse_bike_csv};
