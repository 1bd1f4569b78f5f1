//! Trend Service Provider Interface
//!
//! Defines the series models, error taxonomy and estimator contract shared by
//! the trend projection crates.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::TrendEstimator;
pub use error::{Result, TrendError};
pub use model::{
    CombinedSeries, DataPoint, FitDiagnostics, LinearModel, ProjectedSeries, SeriesKind,
    SeriesPoint, TimeSeries,
};
