//! Fitted straight-line model

use serde::{Deserialize, Serialize};

/// Straight line `y = slope * x + intercept`
///
/// Produced by least squares fitting and consumed by prediction. The model
/// carries no validity range: any year can be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// Change in value per year
    pub slope: f64,
    /// Value of the line at year 0
    pub intercept: f64,
}

impl LinearModel {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Evaluate the line at `year`.
    pub fn evaluate(&self, year: i32) -> f64 {
        self.slope * f64::from(year) + self.intercept
    }
}
