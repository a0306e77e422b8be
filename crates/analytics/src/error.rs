//! Analytics error types.

use thiserror::Error;

/// Errors that can occur while preparing analytics queries.
///
/// Running a query never fails: filters that match nothing produce empty
/// tables. Errors only arise when turning raw parameters into typed ones.
/// Loading the table reports [`dataset::DatasetError`] instead.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// A query parameter could not be parsed.
    #[error("Invalid value {value:?} for parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// The requested dimension is not one of the supported columns.
    #[error("Unknown dimension: {0:?}")]
    UnknownDimension(String),
}

/// Result type for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;
