//! Domain models for bike-sharing rental records.
//!
//! This module provides the core data structures shared by the whole crate:
//! the per-row rental record, the dataset wrapper that fixes a granularity,
//! and the categorical types used for filtering and aggregation.

pub mod categories;
pub mod record;

pub use categories::{DayType, Season, TempBucket};
pub use record::{BikeRecord, Dataset, Granularity};
