//! Trend error types

use thiserror::Error;

/// Errors that can occur while fitting, projecting or merging series
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrendError {
    /// Too few observations for the requested operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Every observation shares the same year, so the slope is undefined
    #[error("Degenerate input: all years are identical, slope is undefined")]
    DegenerateInput,

    /// Prediction was requested for no target years
    #[error("Empty domain: at least one year is required for prediction")]
    EmptyDomain,

    /// A year is not strictly greater than the year before it
    #[error("Unordered series: year {year} at index {index} does not follow its predecessor")]
    UnorderedSeries { index: usize, year: i32 },

    /// An observed value is NaN or infinite
    #[error("Non-finite value for year {year}")]
    NonFiniteValue { year: i32 },

    /// A projected year collides with a historical year or another projected year
    #[error("Overlapping domain: year {year} appears in both series")]
    OverlappingDomain { year: i32 },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Computation left the range of finite floating-point numbers
    #[error("Numerical error: {0}")]
    NumericalError(String),
}

impl TrendError {
    /// Shorthand for [`TrendError::InvalidParameter`].
    pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
