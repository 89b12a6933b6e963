//! Record filtering for the dashboard views.
//!
//! Each filter is an independent row predicate; filters compose with AND
//! semantics across dimensions and OR semantics within a dimension's
//! selected-values set, so application order never changes the result.
//!
//! # Example
//!
//! ```no_run
//! use bikeshare_rust::transformations::{filter_records, FilterCriteria};
//! use bikeshare_rust::models::Dataset;
//!
//! # fn example(dataset: Dataset) {
//! // Start from "everything present" and let the user narrow it down
//! let mut criteria = FilterCriteria::select_all(&dataset);
//! criteria.weather.remove("Heavy Rain");
//! let subset = filter_records(&dataset, &criteria);
//! # }
//! ```

pub mod filtering;

pub use filtering::{
    filter_by_day_type, filter_by_season, filter_by_weather, filter_records, FilterCriteria,
};
