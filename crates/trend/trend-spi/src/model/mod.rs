//! Model module containing series and fit data structures

mod combined_series;
mod data_point;
mod fit_diagnostics;
mod linear_model;
mod projected_series;
mod time_series;

pub use combined_series::{CombinedSeries, SeriesKind, SeriesPoint};
pub use data_point::DataPoint;
pub use fit_diagnostics::FitDiagnostics;
pub use linear_model::LinearModel;
pub use projected_series::ProjectedSeries;
pub use time_series::TimeSeries;
