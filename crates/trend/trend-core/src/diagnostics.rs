//! In-sample fit diagnostics

use crate::least_squares::mean;
use trend_spi::{FitDiagnostics, LinearModel, Result, TimeSeries, TrendError};

/// Compute fitted values, residuals and R² of `model` over `series`.
///
/// R² is reported as 1.0 when the observed values have no spread.
pub fn diagnose(series: &TimeSeries, model: &LinearModel) -> Result<FitDiagnostics> {
    if series.is_empty() {
        return Err(TrendError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }

    let fitted: Vec<f64> = series.iter().map(|p| model.evaluate(p.year)).collect();
    let residuals: Vec<f64> = series
        .iter()
        .zip(fitted.iter())
        .map(|(p, &f)| p.value - f)
        .collect();

    let y_mean = mean(series.iter().map(|p| p.value));
    let ss_tot: f64 = series.iter().map(|p| (p.value - y_mean).powi(2)).sum();
    let ss_res: f64 = residuals.iter().map(|r| r * r).sum();
    let sum_sq: f64 = series.iter().map(|p| p.value * p.value).sum();

    // spread below rounding noise of the values themselves counts as none
    let r_squared = if ss_tot > f64::EPSILON * sum_sq {
        1.0 - ss_res / ss_tot
    } else {
        1.0
    };

    Ok(FitDiagnostics {
        fitted,
        residuals,
        r_squared,
        n_observations: series.len(),
    })
}
