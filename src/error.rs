//! Error types for the epicurve library.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, TrendError>;

/// Errors that can occur while running the trend pipeline.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum TrendError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Period window must be at least one base unit wide.
    #[error("invalid window: {window} (must be greater than zero)")]
    InvalidWindow { window: usize },

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Ratio estimation hit a zero (or otherwise unusable) denominator.
    #[error("degenerate ratio: {numerator} / {denominator}")]
    DegenerateRatio { numerator: f64, denominator: f64 },

    /// Offset from the epoch falls outside the representable date range.
    #[error("date out of range: {epoch} + {offset} days")]
    DateOutOfRange { epoch: NaiveDate, offset: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for TrendError {
    fn from(err: serde_json::Error) -> Self {
        TrendError::Config(err.to_string())
    }
}
