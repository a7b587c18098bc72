//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::app::models::{TradeView, ViewRow};
use crate::app::services::commodity_catalog::description_banner;
use crate::app::services::country_resolver::CountryResolver;
use crate::app::services::dataset_store::{DatasetStore, LoadSummary};
use crate::app::services::record_source::RecordSource;
use crate::app::services::table_export::{chart_title, display_columns};
use crate::cli::args::{LogArgs, SourceArgs};
use crate::config::{Config, DisplayConfig, SourceKind, ValueTransform};
use crate::constants::{SOURCE_CAPTION, columns};
use crate::{Error, Result};
use colored::*;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Run statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Usable records in the loaded dataset
    pub records_loaded: usize,
    /// Selections answered
    pub views_rendered: usize,
    /// Rows printed or exported
    pub rows_output: usize,
    /// Files written, with their sizes in bytes
    pub output_files: Vec<(String, u64)>,
    /// Total command time
    pub elapsed: Duration,
}

impl RunStats {
    /// Calculate total output size in bytes
    pub fn total_output_size(&self) -> u64 {
        self.output_files.iter().map(|(_, size)| size).sum()
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(log: &LogArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = log.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("trade_atlas={}", log_level)));

    let result = if log.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(source: &SourceArgs) -> Result<Config> {
    info!("Loading configuration");
    source.validate()?;

    let config_file = match &source.config_file {
        Some(path) => Some(path.clone()),
        None => Config::default_config_path()
            .ok()
            .filter(|path| path.exists()),
    };

    match &config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => info!("No config file found, using defaults and environment variables"),
    }

    let mut config = Config::load_layered(config_file.as_deref())?;
    apply_cli_overrides(&mut config, source);
    config.validate()?;

    Ok(config)
}

/// Apply source flags to configuration
pub fn apply_cli_overrides(config: &mut Config, source: &SourceArgs) {
    if let Some(kind) = source.implied_kind() {
        config.source.kind = kind;
    }
    if let Some(input_path) = &source.input_path {
        config.source.local_path = input_path.clone();
    }
    if let Some(remote_url) = &source.remote_url {
        config.source.remote_url = remote_url.clone();
    }
    if let Some(cache_dir) = &source.cache_dir {
        config.source.cache_dir = Some(cache_dir.clone());
    }
    if source.refresh {
        config.source.refresh = true;
    }
}

/// Apply presentation flags to configuration
pub fn apply_display_overrides(
    display: &mut DisplayConfig,
    transform: Option<ValueTransform>,
    sort_by_value: bool,
) {
    if let Some(transform) = transform {
        display.value_transform = transform;
    }
    if sort_by_value {
        display.sort_by_value = true;
    }
}

/// Resolver with the built-in table plus configured overrides
pub fn build_resolver(config: &Config) -> Result<Arc<CountryResolver>> {
    let resolver =
        CountryResolver::with_default_lookup().with_extra_overrides(&config.country_overrides)?;
    debug!("Country resolver ready with {} overrides", resolver.override_count());
    Ok(Arc::new(resolver))
}

/// Dataset store for the configured source
pub fn build_store(config: &Config, show_progress: bool) -> Result<DatasetStore> {
    let source = RecordSource::from_config(config)?;
    info!("Dataset source: {}", source);
    if config.source.kind == SourceKind::Remote && config.source.refresh {
        info!("Refresh requested, cached download will be replaced");
    }
    Ok(DatasetStore::new(source, build_resolver(config)?).with_progress(show_progress))
}

/// Format a trade value with thousands separators and two decimals
pub fn format_value(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (integer, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}

fn cell(row: &ViewRow, column: &str) -> String {
    match column {
        columns::COMMODITY_CODE => row.commodity_code.clone(),
        columns::PERIOD => row.period.clone().unwrap_or_default(),
        columns::REPORTER => row.reporter_name.clone(),
        columns::PARTNER => row.partner_name.clone(),
        _ => format_value(row.value),
    }
}

/// Render the display columns of a view as an aligned text table
pub fn render_table(view: &TradeView) -> Vec<String> {
    let headers = display_columns(&view.selection.granularity);
    let cells: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|row| headers.iter().map(|column| cell(row, column)).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_line = |values: Vec<String>| -> String {
        values
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (value, width))| {
                // Value column is right-aligned
                if headers[i] == columns::PRIMARY_VALUE {
                    format!("{:>width$}", value, width = width)
                } else {
                    format!("{:<width$}", value, width = width)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push(format_line(headers.iter().map(|h| h.to_string()).collect()));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(cells.into_iter().map(format_line));
    lines
}

/// Print a view the way the dashboard laid it out: title, table, captions
pub fn print_view_human(view: &TradeView, display: &DisplayConfig) {
    let title = chart_title(view, display);
    println!("\n{}", title.bright_green().bold());
    println!("{}", description_banner(&view.selection.commodity_code).dimmed());
    println!();

    if view.is_empty() {
        println!(
            "{}",
            "⚠️  No data for this selection (check period, commodity code and reporter)"
                .yellow()
                .bold()
        );
    } else {
        let mut lines = render_table(view).into_iter();
        if let Some(header) = lines.next() {
            println!("{}", header.bold());
        }
        for line in lines {
            println!("{}", line);
        }
        println!(
            "\n{} partners, total {}",
            view.len().to_string().bright_white().bold(),
            format_value(view.total_value()).bright_white().bold()
        );
    }

    println!();
    println!("{}", SOURCE_CAPTION.dimmed());
    if display.value_transform == ValueTransform::Log10 {
        println!(
            "{}",
            "Map colors use log10(primaryvalue); zero values are left uncolored".dimmed()
        );
    }
}

/// Print load statistics
pub fn print_load_summary(summary: &LoadSummary) {
    let parse = &summary.parse;
    let exclusion = &summary.exclusion;

    println!("\n{}", "Load Summary".bright_green().bold());
    println!("   • Source: {}", summary.source);
    println!("   • Rows read: {}", parse.total_rows);
    println!(
        "   • Rows retained: {}",
        exclusion.retained.to_string().bright_white().bold()
    );
    println!(
        "   • Dropped without partner code: {}",
        exclusion.dropped_unresolved
    );
    println!(
        "   • Dropped without value: {}",
        exclusion.dropped_missing_value
    );
    println!(
        "   • Override hits: {}, lookup hits: {} ({:.1}% resolved)",
        parse.override_hits,
        parse.lookup_hits,
        parse.resolution_rate()
    );
    if !parse.missing_columns.is_empty() {
        println!(
            "   • {} {}",
            "Missing columns:".yellow(),
            parse.missing_columns.join(", ")
        );
    }
    if !parse.unresolved_names.is_empty() {
        println!(
            "   • {} {}",
            "Unresolved partners:".yellow(),
            parse
                .unresolved_names
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
}

/// Print files written during a run
pub fn print_output_files(stats: &RunStats) {
    if stats.output_files.is_empty() {
        return;
    }
    println!("\n📁 Output Files:");
    for (filename, size) in &stats.output_files {
        println!("   • {}: {}", filename, RunStats::format_size(*size));
    }
}

/// Size of a written file, 0 if it cannot be read
pub fn file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|meta| meta.len()).unwrap_or(0)
}
