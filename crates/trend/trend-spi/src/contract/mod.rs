//! Contract module containing trait definitions for trend estimation

mod trend_estimator;

pub use trend_estimator::TrendEstimator;
