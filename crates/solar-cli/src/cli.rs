//! CLI argument definitions for the solar measurement explorer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use solar_model::{DAYTIME_GHI_THRESHOLD, DEFAULT_RANKING_METRIC};

#[derive(Parser)]
#[command(
    name = "solar-explorer",
    version,
    about = "Solar measurement explorer - compare cleaned station exports",
    long_about = "Explore cleaned solar measurement exports for Benin, Sierra Leone, and Togo.\n\n\
                  Loads the per-country CSV exports, combines them into one table, ranks the\n\
                  countries by average daytime irradiance, and summarizes metric distributions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Extra directory to search for cleaned exports (repeatable; searched
    /// before the default locations, first flag wins).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Vec<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Combine every country's export and rank by average daytime metric.
    Compare(CompareArgs),

    /// Summarize a single country's export.
    Country(CountryArgs),

    /// List the well-known measurement columns.
    Metrics,
}

#[derive(Parser)]
pub struct CompareArgs {
    /// Metric column to rank by.
    #[arg(long = "metric", value_name = "COLUMN", default_value = DEFAULT_RANKING_METRIC)]
    pub metric: String,

    /// Daytime threshold; rows at or below it are excluded from the ranking.
    #[arg(long = "threshold", value_name = "VALUE", default_value_t = DAYTIME_GHI_THRESHOLD)]
    pub threshold: f64,

    /// Emit machine-readable JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CountryArgs {
    /// Country name (Benin, Sierra Leone, or Togo).
    #[arg(value_name = "COUNTRY")]
    pub name: String,

    /// Number of rows to preview.
    #[arg(long = "rows", value_name = "N", default_value_t = 5)]
    pub rows: usize,

    /// Metric column to summarize.
    #[arg(long = "metric", value_name = "COLUMN", default_value = DEFAULT_RANKING_METRIC)]
    pub metric: String,

    /// Number of histogram buckets (0 disables the histogram).
    #[arg(long = "bins", value_name = "N", default_value_t = 12)]
    pub bins: usize,

    /// Emit machine-readable JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
