//! Ordinary least squares line fitting
//!
//! Closed form over mean-centered years:
//!
//! slope = Σ(x - x̄)(y - ȳ) / Σ(x - x̄)²
//! intercept = ȳ - slope · x̄
//!
//! Centering keeps four-digit years from swamping the cross products.

use trend_spi::{DataPoint, LinearModel, Result, TimeSeries, TrendError};

/// Fewest observations that determine a line
pub const MIN_POINTS: usize = 2;

/// Fit a line to a validated series.
///
/// # Errors
///
/// - [`TrendError::InsufficientData`] with fewer than two points
///
/// # Example
///
/// ```rust
/// use trend_core::{fit, TimeSeries};
///
/// let series = TimeSeries::from_pairs([(1, 3.0), (2, 5.0), (3, 7.0)]).unwrap();
/// let model = fit(&series).unwrap();
/// assert!((model.slope - 2.0).abs() < 1e-12);
/// assert!((model.intercept - 1.0).abs() < 1e-12);
/// ```
pub fn fit(series: &TimeSeries) -> Result<LinearModel> {
    fit_points(series.points())
}

/// Fit a line to raw, unvalidated points.
///
/// Years need not be ordered or distinct here, which makes the zero-variance
/// case reachable.
///
/// # Errors
///
/// - [`TrendError::InsufficientData`] with fewer than two points
/// - [`TrendError::NonFiniteValue`] if any value is NaN or infinite
/// - [`TrendError::DegenerateInput`] if every year is the same
/// - [`TrendError::NumericalError`] if the coefficients overflow
pub fn fit_points(points: &[DataPoint]) -> Result<LinearModel> {
    if points.len() < MIN_POINTS {
        return Err(TrendError::InsufficientData {
            required: MIN_POINTS,
            actual: points.len(),
        });
    }
    if let Some(bad) = points.iter().find(|p| !p.value.is_finite()) {
        return Err(TrendError::NonFiniteValue { year: bad.year });
    }

    let x_mean = mean(points.iter().map(|p| f64::from(p.year)));
    let y_mean = mean(points.iter().map(|p| p.value));

    let (sxy, sxx) = points.iter().fold((0.0, 0.0), |(sxy, sxx), p| {
        let dx = f64::from(p.year) - x_mean;
        (sxy + dx * (p.value - y_mean), sxx + dx * dx)
    });

    if sxx <= f64::EPSILON {
        return Err(TrendError::DegenerateInput);
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    if !slope.is_finite() || !intercept.is_finite() {
        return Err(TrendError::NumericalError(
            "least squares coefficients are not finite".to_string(),
        ));
    }

    Ok(LinearModel::new(slope, intercept))
}

/// Running mean; stays finite for any finite inputs, unlike `sum / n`.
pub(crate) fn mean(values: impl Iterator<Item = f64>) -> f64 {
    values.enumerate().fold(0.0, |m, (i, v)| {
        let k = (i + 1) as f64;
        m + (v / k - m / k)
    })
}
