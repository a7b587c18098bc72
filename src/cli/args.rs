//! Command-line argument definitions for trade atlas
//!
//! This module defines the complete CLI interface using clap derive API.
//! Every data command shares [`SourceArgs`] (where the extract comes from and
//! which config file to layer) and [`LogArgs`] (verbosity).

use crate::app::models::Selection;
use crate::app::services::trade_csv_parser::normalize_period;
use crate::config::{SourceKind, ValueTransform};
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the trade atlas
///
/// Loads a UN COMTRADE extract, resolves partner countries to ISO3 codes and
/// answers per-partner trade views for a reporter, commodity and period.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "trade-atlas",
    version,
    about = "Query per-partner trade views from UN COMTRADE extracts",
    long_about = "Loads a UN COMTRADE trade-flow extract from a local CSV or a one-shot download, \
                  normalizes its columns, resolves partner country names to ISO 3166-1 alpha-3 \
                  codes and answers monthly or annual per-partner views, ready for a table or \
                  a choropleth map."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Show the per-partner view for one selection
    View(ViewArgs),
    /// Pick selections interactively from the loaded dataset
    Explore(ExploreArgs),
    /// List the reporters, commodities, periods and years in the dataset
    Options(OptionsArgs),
    /// Show the description of HS commodity codes
    Describe(DescribeArgs),
    /// Resolve country names to ISO3 codes
    Resolve(ResolveArgs),
}

/// Data source and config file options
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct SourceArgs {
    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// <config_dir>/trade-atlas/config.toml
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Where to read the extract from
    #[arg(long = "source", value_enum, value_name = "KIND")]
    pub source: Option<SourceKind>,

    /// Local CSV path (implies --source local)
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input_path: Option<PathBuf>,

    /// Download URL (implies --source remote)
    #[arg(long = "url", value_name = "URL")]
    pub remote_url: Option<String>,

    /// Directory for the download cache
    #[arg(long = "cache-dir", value_name = "PATH")]
    pub cache_dir: Option<PathBuf>,

    /// Download again even if a cached copy exists
    #[arg(long = "refresh")]
    pub refresh: bool,
}

/// Logging verbosity options
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct LogArgs {
    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors; hides progress bars
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the view command
#[derive(Debug, Clone, ClapArgs)]
pub struct ViewArgs {
    /// Reporting country, exactly as in the dataset
    #[arg(short = 'r', long = "reporter", value_name = "NAME")]
    pub reporter: String,

    /// HS commodity code
    #[arg(short = 'k', long = "commodity", value_name = "CODE")]
    pub commodity: String,

    /// Monthly selection (YYYYMM or YYYY-MM)
    #[arg(
        short = 'p',
        long = "period",
        value_name = "PERIOD",
        required_unless_present = "year",
        conflicts_with = "year"
    )]
    pub period: Option<String>,

    /// Annual selection (YYYY), values summed per partner
    #[arg(short = 'y', long = "year", value_name = "YEAR")]
    pub year: Option<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Color value transform
    #[arg(long = "transform", value_enum, value_name = "TRANSFORM")]
    pub transform: Option<ValueTransform>,

    /// Sort rows by value, largest first
    #[arg(long = "sort-by-value")]
    pub sort_by_value: bool,

    /// Also write the table to a .csv or .parquet file
    #[arg(short = 'o', long = "export", value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Also write the choropleth series as JSON
    #[arg(long = "choropleth", value_name = "FILE")]
    pub choropleth: Option<PathBuf>,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Arguments for the explore command
#[derive(Debug, Clone, ClapArgs)]
pub struct ExploreArgs {
    /// Color value transform
    #[arg(long = "transform", value_enum, value_name = "TRANSFORM")]
    pub transform: Option<ValueTransform>,

    /// Sort rows by value, largest first
    #[arg(long = "sort-by-value")]
    pub sort_by_value: bool,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Arguments for the options command
#[derive(Debug, Clone, ClapArgs)]
pub struct OptionsArgs {
    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Also print load statistics
    #[arg(long = "stats")]
    pub stats: bool,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Arguments for the describe command
#[derive(Debug, Clone, ClapArgs)]
pub struct DescribeArgs {
    /// HS codes to describe; all known codes when omitted
    #[arg(value_name = "CODE")]
    pub codes: Vec<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Arguments for the resolve command
#[derive(Debug, Clone, ClapArgs)]
pub struct ResolveArgs {
    /// Country names as they appear in the partner column
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Configuration file with extra country overrides
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Option<Commands> {
        self.command.clone()
    }
}

impl LogArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl SourceArgs {
    /// Source kind implied by the flags, if any
    pub fn implied_kind(&self) -> Option<SourceKind> {
        self.source.or(match (&self.input_path, &self.remote_url) {
            (Some(_), None) => Some(SourceKind::Local),
            (None, Some(_)) => Some(SourceKind::Remote),
            _ => None,
        })
    }

    /// Validate the source arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.source.is_none() && self.input_path.is_some() && self.remote_url.is_some() {
            return Err(Error::configuration(
                "Both --input and --url given; pick one with --source",
            ));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }
}

impl ViewArgs {
    /// Build the selection described by the flags
    pub fn selection(&self) -> Result<Selection> {
        let reporter = self.reporter.trim();
        let commodity = self.commodity.trim();
        if reporter.is_empty() || commodity.is_empty() {
            return Err(Error::configuration(
                "Reporter and commodity must not be empty",
            ));
        }

        match (&self.period, &self.year) {
            (Some(period), None) => Ok(Selection::monthly(
                reporter,
                commodity,
                normalize_period(period),
            )),
            (None, Some(year)) => Ok(Selection::annual(reporter, commodity, year.trim())),
            _ => Err(Error::configuration(
                "Exactly one of --period or --year is required",
            )),
        }
    }
}
