//! Error types for analytics operations.

/// Result type for analytics operations
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Error type for analytics operations
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("Data load error: {0}")]
    DataLoad(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Data validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for AnalyticsError {
    fn from(s: String) -> Self {
        AnalyticsError::Internal(s)
    }
}

impl From<&str> for AnalyticsError {
    fn from(s: &str) -> Self {
        AnalyticsError::Internal(s.to_string())
    }
}
