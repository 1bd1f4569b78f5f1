//! Trend Consumer API
//!
//! Consumer configuration and orchestration for trend projection.
//!
//! This crate provides:
//! - [`ProjectionConfig`] and its builder
//! - [`TrendForecast`], which fits, scores, projects and merges in one call
//! - Re-exports from SPI and core for convenience

pub mod config;
pub mod forecast;

pub use config::{ProjectionConfig, ProjectionConfigBuilder, DEFAULT_HORIZON, MAX_HORIZON};
pub use forecast::{ForecastReport, TrendForecast};

// Re-export from core
pub use trend_core::{
    diagnose, diagnostics, fit, fit_points, future_domain, least_squares, merge, predict,
    project, projection, TrendProjector,
};

// Re-export from SPI
pub use trend_spi::{
    CombinedSeries, DataPoint, FitDiagnostics, LinearModel, ProjectedSeries, Result, SeriesKind,
    SeriesPoint, TimeSeries, TrendError, TrendEstimator,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ForecastReport, ProjectionConfig, ProjectionConfigBuilder, TrendForecast};
    pub use trend_core::{diagnose, fit, future_domain, merge, predict, project, TrendProjector};
    pub use trend_spi::{
        CombinedSeries, DataPoint, FitDiagnostics, LinearModel, ProjectedSeries, Result,
        SeriesKind, SeriesPoint, TimeSeries, TrendError, TrendEstimator,
    };
}
