//! Loading historical series from CSV and JSON files

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use trend_facade::{DataPoint, TimeSeries};

/// Column selection for CSV input
#[derive(Debug, Clone, Default)]
pub struct Columns {
    /// Header name or zero-based index of the year column
    pub year: Option<String>,
    /// Header name or zero-based index of the value column
    pub value: Option<String>,
}

/// Accepted JSON layouts
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonSeries {
    Points(Vec<DataPoint>),
    Wrapped { data: Vec<DataPoint> },
}

/// Load a series, picking the format from the file extension.
pub fn load_series(path: &Path, columns: &Columns) -> Result<TimeSeries> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let points = match ext.as_str() {
        "json" => load_json(path)?,
        "csv" => load_csv(path, columns)?,
        _ => match load_csv(path, columns) {
            Ok(points) => points,
            Err(csv_err) => load_json(path).map_err(|json_err| {
                anyhow!(
                    "Could not read {} as CSV ({:#}) or as JSON ({:#})",
                    path.display(),
                    csv_err,
                    json_err
                )
            })?,
        },
    };
    tracing::debug!(path = %path.display(), points = points.len(), "loaded series");

    TimeSeries::new(points).with_context(|| format!("Invalid series in {}", path.display()))
}

fn resolve_column(headers: &csv::StringRecord, column: Option<&str>, fallback: usize) -> Result<usize> {
    match column {
        Some(col) => {
            if let Ok(idx) = col.parse::<usize>() {
                return Ok(idx);
            }
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(col))
                .with_context(|| format!("Column '{}' not found", col))
        }
        None => Ok(fallback),
    }
}

fn load_csv(path: &Path, columns: &Columns) -> Result<Vec<DataPoint>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));
    let headers = reader.headers().context("Failed to read CSV headers")?.clone();

    let default_year = headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case("year"))
        .unwrap_or(0);
    let default_value = headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case("value"))
        .unwrap_or(1);
    let year_idx = resolve_column(&headers, columns.year.as_deref(), default_year)?;
    let value_idx = resolve_column(&headers, columns.value.as_deref(), default_value)?;

    let mut points = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read CSV row {}", row + 1))?;
        let year = record.get(year_idx).map(str::trim).and_then(|v| v.parse::<i32>().ok());
        let value = record.get(value_idx).map(str::trim).and_then(|v| v.parse::<f64>().ok());
        match (year, value) {
            (Some(year), Some(value)) => points.push(DataPoint::new(year, value)),
            _ => tracing::warn!(row = row + 1, "skipping row without a numeric year and value"),
        }
    }

    if points.is_empty() {
        bail!("No numeric rows found in {}", path.display());
    }
    Ok(points)
}

fn load_json(path: &Path) -> Result<Vec<DataPoint>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let parsed: JsonSeries = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;
    Ok(match parsed {
        JsonSeries::Points(points) => points,
        JsonSeries::Wrapped { data } => data,
    })
}
