//! Bike Sharing Analytics Backend - filtering and aggregation for the dashboard
//!
//! The crate is layered the same way the dashboard consumes it: the [`store`]
//! loads the two cleaned datasets once, [`transformations`] reduces them to
//! the subset matching the user's selections, [`services`] computes the chart
//! summaries, and [`api`] packages everything for the presentation layer.

pub mod api;
pub mod error;
pub mod models;
pub mod parsing;
pub mod preprocessing;
pub mod services;
pub mod store;
pub mod transformations;
