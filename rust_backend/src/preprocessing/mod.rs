//! Data quality checks run once at load time.

pub mod validator;

pub use validator::validate_dataset;
