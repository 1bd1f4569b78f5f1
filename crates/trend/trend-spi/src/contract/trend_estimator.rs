//! Trend estimator trait

use crate::error::Result;
use crate::model::{LinearModel, ProjectedSeries, TimeSeries};

/// Fits a trend line to history and evaluates it over future years
pub trait TrendEstimator: Send + Sync {
    /// Fit a line to the historical series
    fn fit(&self, series: &TimeSeries) -> Result<LinearModel>;

    /// Evaluate a fitted line at each year of `domain`, preserving order
    fn predict(&self, model: &LinearModel, domain: &[i32]) -> Result<ProjectedSeries>;

    /// Fit then predict; errors from either step propagate unchanged
    fn project(&self, history: &TimeSeries, domain: &[i32]) -> Result<ProjectedSeries> {
        let model = self.fit(history)?;
        self.predict(&model, domain)
    }

    /// Name of this estimator
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrendError;
    use crate::model::DataPoint;

    /// Mock implementation: horizontal line through the last observation
    struct LastValueEstimator;

    impl TrendEstimator for LastValueEstimator {
        fn fit(&self, series: &TimeSeries) -> Result<LinearModel> {
            let last = series.points().last().ok_or(TrendError::InsufficientData {
                required: 1,
                actual: 0,
            })?;
            Ok(LinearModel::new(0.0, last.value))
        }

        fn predict(&self, model: &LinearModel, domain: &[i32]) -> Result<ProjectedSeries> {
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

        fn name(&self) -> &str {
            "last_value"
        }
    }

    #[test]
    fn test_default_project_composes_fit_and_predict() {
        let estimator = LastValueEstimator;
        let history = TimeSeries::from_pairs([(2000, 3.0), (2001, 4.0)]).unwrap();
        let projected = estimator.project(&history, &[2002, 2003]).unwrap();
        assert_eq!(projected.years(), vec![2002, 2003]);
        assert_eq!(projected.values(), vec![4.0, 4.0]);
    }

    #[test]
    fn test_default_project_propagates_fit_error() {
        let estimator = LastValueEstimator;
        let empty = TimeSeries::new(Vec::new()).unwrap();
        let err = estimator.project(&empty, &[2000]).unwrap_err();
        assert!(matches!(err, TrendError::InsufficientData { .. }));
    }

    #[test]
    fn test_default_project_propagates_predict_error() {
        let estimator = LastValueEstimator;
        let history = TimeSeries::from_pairs([(2000, 3.0)]).unwrap();
        assert_eq!(
            estimator.project(&history, &[]).unwrap_err(),
            TrendError::EmptyDomain
        );
    }

    #[test]
    fn test_trait_object() {
        let estimator: Box<dyn TrendEstimator> = Box::new(LastValueEstimator);
        assert_eq!(estimator.name(), "last_value");
    }
}
