//! Projection of a fitted line over future years

use crate::least_squares;
use trend_spi::{
    DataPoint, LinearModel, ProjectedSeries, Result, TimeSeries, TrendError, TrendEstimator,
};

/// Evaluate `model` at each year of `domain`.
///
/// The output keeps the domain's order and length. There is no bound on how
/// far from the training range a year may lie.
///
/// # Errors
///
/// - [`TrendError::EmptyDomain`] if `domain` is empty
pub fn predict(model: &LinearModel, domain: &[i32]) -> Result<ProjectedSeries> {
    if domain.is_empty() {
        return Err(TrendError::EmptyDomain);
    }

    Ok(ProjectedSeries::new(
        domain
            .iter()
            .map(|&year| DataPoint::new(year, model.evaluate(year)))
            .collect(),
    ))
}

/// Fit `history` and predict over `domain`.
///
/// # Example
///
/// ```rust
/// use trend_core::{project, TimeSeries};
///
/// let history = TimeSeries::from_pairs([(2000, 10.0), (2001, 12.0), (2002, 14.0)]).unwrap();
/// let forecast = project(&history, &[2003, 2004]).unwrap();
/// assert_eq!(forecast.years(), vec![2003, 2004]);
/// assert!((forecast.values()[1] - 18.0).abs() < 1e-9);
/// ```
pub fn project(history: &TimeSeries, domain: &[i32]) -> Result<ProjectedSeries> {
    let model = least_squares::fit(history)?;
    predict(&model, domain)
}

/// Ordinary least squares trend estimator
///
/// Stateless; a single instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendProjector;

impl TrendProjector {
    pub fn new() -> Self {
        Self
    }
}

impl TrendEstimator for TrendProjector {
    fn fit(&self, series: &TimeSeries) -> Result<LinearModel> {
        least_squares::fit(series)
    }

    fn predict(&self, model: &LinearModel, domain: &[i32]) -> Result<ProjectedSeries> {
        predict(model, domain)
    }

    fn name(&self) -> &str {
        "ols"
    }
}
