//! Bundled sample dataset

use trend_facade::{Result, TimeSeries};

/// First year of [`FERTILITY_RATE`]
pub const FERTILITY_START_YEAR: i32 = 2000;

/// Total fertility rate (births per woman), South Korea, 2000-2023
///
/// Statistics Korea annual birth statistics, rounded to two decimals.
pub const FERTILITY_RATE: [f64; 24] = [
    1.48, 1.31, 1.18, 1.19, 1.16, 1.09, 1.13, 1.26, 1.19, 1.15, 1.23, 1.24, 1.30, 1.19, 1.21,
    1.24, 1.17, 1.05, 0.98, 0.92, 0.84, 0.81, 0.78, 0.72,
];

/// The bundled fertility-rate history.
pub fn fertility_rate() -> Result<TimeSeries> {
    TimeSeries::from_start_year(FERTILITY_START_YEAR, &FERTILITY_RATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fertility_rate_spans_2000_to_2023() {
        let series = fertility_rate().unwrap();
        assert_eq!(series.len(), 24);
        assert_eq!(series.first_year(), Some(2000));
        assert_eq!(series.last_year(), Some(2023));
    }
}
