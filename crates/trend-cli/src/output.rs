//! Rendering forecast results

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use trend_facade::{FitDiagnostics, ForecastReport, LinearModel};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Aligned plain-text table
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Render a forecast report.
pub fn render_report(report: &ForecastReport, format: Format) -> Result<String> {
    match format {
        Format::Json => serde_json::to_string_pretty(report).context("Failed to serialize report"),
        Format::Table => {
            let mut out = render_summary(&report.model, &report.diagnostics);
            out.push('\n');
            out.push_str(&format!("{:>6}  {:>10}  {}\n", "year", "value", "kind"));
            for point in report.combined.iter() {
                out.push_str(&format!(
                    "{:>6}  {:>10.4}  {}\n",
                    point.year, point.value, point.kind
                ));
            }
            Ok(out)
        }
    }
}

/// Render the fitted coefficients and goodness of fit.
pub fn render_summary(model: &LinearModel, diagnostics: &FitDiagnostics) -> String {
    format!(
        "slope      {:.6}\nintercept  {:.6}\nr_squared  {:.4}\nn          {}\n",
        model.slope, model.intercept, diagnostics.r_squared, diagnostics.n_observations
    )
}

/// Write `contents` to `path`, or to stdout when no path is given.
pub fn emit(contents: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "output written");
        }
        None => print!("{contents}"),
    }
    Ok(())
}
