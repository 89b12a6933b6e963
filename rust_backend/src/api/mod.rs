//! Frontend-facing data transfer objects and entry points.
//!
//! Each dashboard interaction triggers exactly one synchronous pass through
//! [`dashboard::dashboard_data`]: filter, aggregate, and hand the results to
//! the presentation layer as plain ordered structures. DTOs are flat,
//! serde-serializable, and isolated from internal model details.

pub mod dashboard;
pub mod types;

pub use dashboard::{
    build_dashboard_data, dashboard_data, data_dictionary, filter_options, GET_DASHBOARD_DATA,
    GET_FILTER_OPTIONS,
};
pub use types::{
    DashboardData, DatasetInfo, DictionaryEntry, FilterOptions, HourlyPoint, SeasonTotal,
    TempBucketTotal,
};
