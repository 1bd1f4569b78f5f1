//! Trend Core
//!
//! Core implementations for least squares trend fitting, projection over
//! future years, in-sample diagnostics and history/forecast merging.

pub mod diagnostics;
pub mod least_squares;
pub mod merge;
pub mod projection;

// Re-export SPI items for implementations
pub use trend_spi::{
    CombinedSeries, DataPoint, FitDiagnostics, LinearModel, ProjectedSeries, Result, SeriesKind,
    SeriesPoint, TimeSeries, TrendError, TrendEstimator,
};

// Re-export main entry points
pub use diagnostics::diagnose;
pub use least_squares::{fit, fit_points};
pub use merge::{future_domain, merge};
pub use projection::{predict, project, TrendProjector};
