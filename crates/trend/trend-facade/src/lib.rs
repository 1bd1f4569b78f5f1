//! Trend Facade
//!
//! High-level API for linear trend projection. Re-exports all public types
//! from the trend stack for convenient usage.
//!
//! ```rust
//! use trend_facade::prelude::*;
//!
//! let history = TimeSeries::from_pairs([(2000, 1.47), (2001, 1.45), (2002, 1.42)])?;
//! let model = fit(&history)?;
//! let forecast = predict(&model, &[2003, 2004])?;
//! assert!(forecast.values()[0] < 1.42);
//! # Ok::<(), TrendError>(())
//! ```

// Re-export everything from API (which includes SPI and core)
pub use trend_api::*;

// Explicit re-exports for documentation
pub use trend_api::prelude;

// Re-export core modules for direct access
pub use trend_core::{diagnostics, least_squares, projection};

// Re-export SPI traits
pub use trend_spi::TrendEstimator;
