//! Single (year, value) observation

use serde::{Deserialize, Serialize};

/// One observation keyed by year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Calendar year (x axis)
    pub year: i32,
    /// Observed or predicted value (y axis)
    pub value: f64,
}

impl DataPoint {
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

impl From<(i32, f64)> for DataPoint {
    fn from((year, value): (i32, f64)) -> Self {
        Self { year, value }
    }
}
