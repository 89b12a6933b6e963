//! Service layer computing chart summaries from filtered record subsets.
//!
//! Everything here is a pure function over in-memory slices; the only I/O in
//! the crate is the one-time load performed by the store.

pub mod aggregation;

pub use aggregation::{hourly_mean_counts, seasonal_totals, temperature_totals};
