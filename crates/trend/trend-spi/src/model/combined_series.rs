//! History and projection merged into one labelled series

use serde::{Deserialize, Serialize};

/// Origin of a point in a [`CombinedSeries`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    /// Observed value
    Historical,
    /// Value predicted by the fitted line
    Projected,
}

impl std::fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesKind::Historical => write!(f, "historical"),
            SeriesKind::Projected => write!(f, "projected"),
        }
    }
}

/// A labelled point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub value: f64,
    pub kind: SeriesKind,
}

/// Year-ordered union of a history and its projection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CombinedSeries {
    points: Vec<SeriesPoint>,
}

impl CombinedSeries {
    /// Wrap already-ordered points.
    pub fn new(points: Vec<SeriesPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn historical(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.of_kind(SeriesKind::Historical)
    }

    pub fn projected(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.of_kind(SeriesKind::Projected)
    }

    fn of_kind(&self, kind: SeriesKind) -> impl Iterator<Item = &SeriesPoint> {
        self.points.iter().filter(move |p| p.kind == kind)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeriesPoint> {
        self.points.iter()
    }
}
