//! Merging history with its projection

use std::collections::HashSet;
use trend_spi::{
    CombinedSeries, ProjectedSeries, Result, SeriesKind, SeriesPoint, TimeSeries, TrendError,
};

/// Combine `history` and `projection` into one year-ordered, labelled series.
///
/// # Errors
///
/// - [`TrendError::OverlappingDomain`] if a projected year is also a
///   historical year, or appears more than once in the projection
pub fn merge(history: &TimeSeries, projection: &ProjectedSeries) -> Result<CombinedSeries> {
    let mut seen = HashSet::with_capacity(projection.len());
    for point in projection {
        if history.contains_year(point.year) || !seen.insert(point.year) {
            return Err(TrendError::OverlappingDomain { year: point.year });
        }
    }

    let mut points: Vec<SeriesPoint> = history
        .iter()
        .map(|p| SeriesPoint {
            year: p.year,
            value: p.value,
            kind: SeriesKind::Historical,
        })
        .chain(projection.iter().map(|p| SeriesPoint {
            year: p.year,
            value: p.value,
            kind: SeriesKind::Projected,
        }))
        .collect();
    points.sort_by_key(|p| p.year);

    Ok(CombinedSeries::new(points))
}

/// The `horizon` consecutive years following the last historical year.
///
/// All `horizon` years are allocated up front; callers taking the horizon from
/// user input should bound it first.
///
/// # Errors
///
/// - [`TrendError::InsufficientData`] if `history` is empty
/// - [`TrendError::InvalidParameter`] if `horizon` is zero or runs past `i32::MAX`
pub fn future_domain(history: &TimeSeries, horizon: usize) -> Result<Vec<i32>> {
    let last = history.last_year().ok_or(TrendError::InsufficientData {
        required: 1,
        actual: 0,
    })?;
    if horizon == 0 {
        return Err(TrendError::invalid_parameter(
            "horizon",
            "must be at least 1",
        ));
    }

    let end = i32::try_from(horizon)
        .ok()
        .and_then(|h| last.checked_add(h))
        .ok_or_else(|| TrendError::invalid_parameter("horizon", "exceeds the year range"))?;

    Ok((last + 1..=end).collect())
}
