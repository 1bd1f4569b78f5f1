//! Goodness-of-fit summary

use serde::{Deserialize, Serialize};

/// In-sample diagnostics of a fitted line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitDiagnostics {
    /// Line value at each historical year
    pub fitted: Vec<f64>,
    /// Observed minus fitted, per historical year
    pub residuals: Vec<f64>,
    /// Coefficient of determination
    pub r_squared: f64,
    /// Number of observations the diagnostics cover
    pub n_observations: usize,
}

impl FitDiagnostics {
    /// Sum of squared residuals.
    pub fn sse(&self) -> f64 {
        self.residuals.iter().map(|r| r * r).sum()
    }
}
