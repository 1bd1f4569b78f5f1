//! Projection configuration types.

use serde::{Deserialize, Serialize};
use trend_core::future_domain;
use trend_spi::{Result, TimeSeries, TrendError};

/// Years projected when nothing else is configured
pub const DEFAULT_HORIZON: usize = 7;

/// Most years a single configured run may project
///
/// Every projected year is materialised. Single far-away years remain
/// available through `predict`.
pub const MAX_HORIZON: usize = 1000;

/// How far to project and whether the projection is produced at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Number of years after the last observation to project
    pub horizon: usize,
    /// Last year to project, inclusive; takes precedence over `horizon`
    pub until: Option<i32>,
    /// Whether the forecast is computed and merged into the output
    pub include_forecast: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            until: None,
            include_forecast: true,
        }
    }
}

impl ProjectionConfig {
    /// Create a configuration projecting `horizon` years.
    pub fn with_horizon(horizon: usize) -> Self {
        Self {
            horizon,
            ..Self::default()
        }
    }

    /// Create a configuration projecting through `year`.
    pub fn until(year: i32) -> Self {
        Self {
            until: Some(year),
            ..Self::default()
        }
    }

    /// Check the settings that do not depend on a particular history.
    pub fn validate(&self) -> Result<()> {
        if self.until.is_none() && self.horizon == 0 {
            return Err(TrendError::invalid_parameter(
                "horizon",
                "must be at least 1",
            ));
        }
        if self.until.is_none() && self.horizon > MAX_HORIZON {
            return Err(TrendError::invalid_parameter(
                "horizon",
                format!("{} exceeds the limit of {MAX_HORIZON} years", self.horizon),
            ));
        }
        Ok(())
    }

    /// Years to project after `history`.
    pub fn domain_for(&self, history: &TimeSeries) -> Result<Vec<i32>> {
        self.validate()?;
        match self.until {
            Some(until) => {
                let last = history.last_year().ok_or(TrendError::InsufficientData {
                    required: 1,
                    actual: 0,
                })?;
                if until <= last {
                    return Err(TrendError::invalid_parameter(
                        "until",
                        format!("{until} is not after the last observed year {last}"),
                    ));
                }
                let span = i64::from(until) - i64::from(last);
                if span > MAX_HORIZON as i64 {
                    return Err(TrendError::invalid_parameter(
                        "until",
                        format!("{until} is {span} years out, the limit is {MAX_HORIZON}"),
                    ));
                }
                Ok((last + 1..=until).collect())
            }
            None => future_domain(history, self.horizon),
        }
    }
}

/// Builder for ProjectionConfig.
#[derive(Debug, Default)]
pub struct ProjectionConfigBuilder {
    horizon: Option<usize>,
    until: Option<i32>,
    include_forecast: Option<bool>,
}

impl ProjectionConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, e.g. one loaded from a file.
    pub fn from_config(config: ProjectionConfig) -> Self {
        Self {
            horizon: Some(config.horizon),
            until: config.until,
            include_forecast: Some(config.include_forecast),
        }
    }

    /// Set the horizon.
    pub fn horizon(mut self, horizon: usize) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// Set the last projected year.
    pub fn until(mut self, year: i32) -> Self {
        self.until = Some(year);
        self
    }

    /// Set whether the forecast is included.
    pub fn include_forecast(mut self, include: bool) -> Self {
        self.include_forecast = Some(include);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<ProjectionConfig> {
        let defaults = ProjectionConfig::default();
        let config = ProjectionConfig {
            horizon: self.horizon.unwrap_or(defaults.horizon),
            until: self.until,
            include_forecast: self.include_forecast.unwrap_or(defaults.include_forecast),
        };
        config.validate()?;
        Ok(config)
    }
}
