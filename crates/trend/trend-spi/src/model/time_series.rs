//! Validated historical series

use super::DataPoint;
use crate::error::{Result, TrendError};
use serde::{Deserialize, Serialize};

/// Ordered historical observations
///
/// Years are strictly increasing and every value is finite. Empty and
/// single-point series are valid values; fitting rejects them.
///
/// # Example
///
/// ```rust
/// use trend_spi::TimeSeries;
///
/// let series = TimeSeries::from_pairs([(2000, 1.47), (2001, 1.45), (2002, 1.42)]).unwrap();
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.last_year(), Some(2002));
///
/// assert!(TimeSeries::from_pairs([(2001, 1.0), (2000, 2.0)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DataPoint>", into = "Vec<DataPoint>")]
pub struct TimeSeries {
    points: Vec<DataPoint>,
}

impl TimeSeries {
    /// Validate and wrap `points`.
    pub fn new(points: Vec<DataPoint>) -> Result<Self> {
        for (index, point) in points.iter().enumerate() {
            if !point.value.is_finite() {
                return Err(TrendError::NonFiniteValue { year: point.year });
            }
            if index > 0 && point.year <= points[index - 1].year {
                return Err(TrendError::UnorderedSeries {
                    index,
                    year: point.year,
                });
            }
        }
        Ok(Self { points })
    }

    /// Build from `(year, value)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i32, f64)>,
    {
        Self::new(pairs.into_iter().map(DataPoint::from).collect())
    }

    /// Pair consecutive years starting at `start_year` with `values`.
    pub fn from_start_year(start_year: i32, values: &[f64]) -> Result<Self> {
        Self::new(
            values
                .iter()
                .zip(start_year..)
                .map(|(&value, year)| DataPoint::new(year, value))
                .collect(),
        )
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn years(&self) -> Vec<i32> {
        self.points.iter().map(|p| p.year).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_year(&self) -> Option<i32> {
        self.points.first().map(|p| p.year)
    }

    pub fn last_year(&self) -> Option<i32> {
        self.points.last().map(|p| p.year)
    }

    /// Whether `year` is one of the observed years.
    pub fn contains_year(&self, year: i32) -> bool {
        self.points.binary_search_by_key(&year, |p| p.year).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }
}

impl TryFrom<Vec<DataPoint>> for TimeSeries {
    type Error = TrendError;

    fn try_from(points: Vec<DataPoint>) -> Result<Self> {
        Self::new(points)
    }
}

impl From<TimeSeries> for Vec<DataPoint> {
    fn from(series: TimeSeries) -> Self {
        series.points
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
