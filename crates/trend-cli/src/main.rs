//! # trendline
//!
//! Command-line interface for fitting and projecting linear trends over
//! yearly series.

mod dataset;
mod input;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use input::Columns;
use output::Format;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trend_facade::{
    diagnose, ProjectionConfig, ProjectionConfigBuilder, TimeSeries, TrendEstimator,
    TrendForecast, TrendProjector,
};

#[derive(Parser)]
#[command(name = "trendline")]
#[command(about = "Linear trend fitting and projection for yearly series", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct InputArgs {
    /// Input file (CSV or JSON); the bundled fertility-rate series when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// CSV column holding years (name or zero-based index)
    #[arg(long)]
    year_column: Option<String>,

    /// CSV column holding values (name or zero-based index)
    #[arg(long)]
    value_column: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit a trend line and print its coefficients
    Fit {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Fit a trend line and project it over future years
    Project {
        #[command(flatten)]
        input: InputArgs,

        /// Number of years to project after the last observation
        #[arg(long)]
        horizon: Option<usize>,

        /// Last year to project (inclusive); overrides --horizon
        #[arg(long)]
        until: Option<i32>,

        /// Fit only; leave the forecast out of the output
        #[arg(long)]
        hide_forecast: bool,

        /// JSON projection configuration; flags override its fields
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

fn load_history(args: &InputArgs) -> Result<TimeSeries> {
    match &args.input {
        Some(path) => {
            let columns = Columns {
                year: args.year_column.clone(),
                value: args.value_column.clone(),
            };
            input::load_series(path, &columns)
        }
        None => {
            tracing::info!("no input given, using bundled fertility-rate series");
            dataset::fertility_rate().context("Bundled dataset is invalid")
        }
    }
}

fn load_config(path: &Path) -> Result<ProjectionConfig> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse config {}", path.display()))
}

/// Merge the optional config file with command-line overrides.
fn projection_config(
    path: Option<&Path>,
    horizon: Option<usize>,
    until: Option<i32>,
    hide_forecast: bool,
) -> Result<ProjectionConfig> {
    let base = match path {
        Some(path) => load_config(path)?,
        None => ProjectionConfig::default(),
    };
    let mut builder = ProjectionConfigBuilder::from_config(base);
    if let Some(horizon) = horizon {
        builder = builder.horizon(horizon);
    }
    if let Some(until) = until {
        builder = builder.until(until);
    }
    if hide_forecast {
        builder = builder.include_forecast(false);
    }
    builder.build().context("Invalid projection configuration")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Fit { input } => {
            let history = load_history(&input)?;
            let projector = TrendProjector::new();
            let model = projector.fit(&history).context("Failed to fit trend")?;
            let diagnostics = diagnose(&history, &model)?;
            output::emit(&output::render_summary(&model, &diagnostics), None)?;
        }
        Commands::Project {
            input,
            horizon,
            until,
            hide_forecast,
            config,
            format,
            output,
        } => {
            let history = load_history(&input)?;
            let config = projection_config(config.as_deref(), horizon, until, hide_forecast)?;

            let report = TrendForecast::new(config)
                .run(&history)
                .context("Forecast failed")?;
            let rendered = output::render_report(&report, format)?;
            output::emit(&rendered, output.as_deref())?;
        }
    }

    Ok(())
}
