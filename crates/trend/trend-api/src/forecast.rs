//! Configuration-driven forecast runs
//!
//! Fits a trend to the history, scores it, and when enabled projects it over
//! the configured years and merges the result with the history. Whether a
//! projection is shown is decided here, never inside the fitting code.

use crate::config::ProjectionConfig;
use serde::Serialize;
use trend_core::{diagnose, merge, TrendProjector};
use trend_spi::{
    CombinedSeries, FitDiagnostics, LinearModel, ProjectedSeries, Result, TimeSeries,
    TrendEstimator,
};

/// Output of a forecast run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    /// Estimator that produced the model
    pub estimator: String,
    /// Fitted line
    pub model: LinearModel,
    /// In-sample diagnostics of `model`
    pub diagnostics: FitDiagnostics,
    /// Projected values, absent when the forecast is disabled
    pub projection: Option<ProjectedSeries>,
    /// History, followed by the projection when present
    pub combined: CombinedSeries,
}

/// Runs an estimator under a [`ProjectionConfig`]
///
/// # Example
///
/// ```rust
/// use trend_api::{ProjectionConfig, TimeSeries, TrendForecast};
///
/// let history = TimeSeries::from_start_year(2000, &[1.47, 1.45, 1.42]).unwrap();
/// let report = TrendForecast::new(ProjectionConfig::with_horizon(2))
///     .run(&history)
///     .unwrap();
/// assert_eq!(report.combined.len(), 5);
/// ```
pub struct TrendForecast {
    estimator: Box<dyn TrendEstimator>,
    config: ProjectionConfig,
}

impl TrendForecast {
    /// Create a forecast using the least squares projector.
    pub fn new(config: ProjectionConfig) -> Self {
        Self::with_estimator(Box::new(TrendProjector::new()), config)
    }

    /// Create a forecast using a custom estimator.
    pub fn with_estimator(estimator: Box<dyn TrendEstimator>, config: ProjectionConfig) -> Self {
        Self { estimator, config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Fit, score and (optionally) project `history`.
    pub fn run(&self, history: &TimeSeries) -> Result<ForecastReport> {
        self.config.validate()?;

        let model = self.estimator.fit(history)?;
        let diagnostics = diagnose(history, &model)?;
        tracing::debug!(
            estimator = self.estimator.name(),
            slope = model.slope,
            intercept = model.intercept,
            r_squared = diagnostics.r_squared,
            "fitted trend"
        );

        let projection = if self.config.include_forecast {
            let domain = self.config.domain_for(history)?;
            Some(self.estimator.predict(&model, &domain)?)
        } else {
            tracing::debug!("forecast disabled, returning history only");
            None
        };

        let empty = ProjectedSeries::new(Vec::new());
        let combined = merge(history, projection.as_ref().unwrap_or(&empty))?;

        tracing::info!(
            observations = history.len(),
            projected = projection.as_ref().map_or(0, ProjectedSeries::len),
            "forecast complete"
        );

        Ok(ForecastReport {
            estimator: self.estimator.name().to_string(),
            model,
            diagnostics,
            projection,
            combined,
        })
    }
}

impl Default for TrendForecast {
    fn default() -> Self {
        Self::new(ProjectionConfig::default())
    }
}
