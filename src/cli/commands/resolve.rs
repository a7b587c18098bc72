//! Resolve command implementation for trade atlas CLI
//!
//! Runs names through the same two-tier resolver the loader uses and shows
//! which tier answered, which makes override gaps easy to spot.

use super::shared::{RunStats, build_resolver, setup_logging};
use crate::app::services::country_resolver::ResolutionSource;
use crate::cli::args::{OutputFormat, ResolveArgs};
use crate::config::Config;
use crate::Result;
use colored::*;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
struct ResolutionRow {
    name: String,
    iso3: Option<String>,
    source: &'static str,
}

fn source_label(source: ResolutionSource) -> &'static str {
    match source {
        ResolutionSource::Override => "override",
        ResolutionSource::Lookup => "lookup",
        ResolutionSource::Unresolved => "unresolved",
    }
}

/// Resolve command runner
pub fn run_resolve(args: ResolveArgs) -> Result<RunStats> {
    setup_logging(&args.log)?;

    let config = match &args.config_file {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let resolver = build_resolver(&config)?;

    let rows: Vec<ResolutionRow> = args
        .names
        .iter()
        .map(|name| {
            let (resolution, source) = resolver.resolve_with_source(name.trim());
            ResolutionRow {
                name: name.trim().to_string(),
                iso3: resolution.into_code(),
                source: source_label(source),
            }
        })
        .collect();

    match args.format {
        OutputFormat::Human => {
            for row in &rows {
                match &row.iso3 {
                    Some(code) => println!(
                        "{:<40} {} ({})",
                        row.name,
                        code.bright_white().bold(),
                        row.source.dimmed()
                    ),
                    None => println!("{:<40} {}", row.name, "unresolved".yellow()),
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Csv => {
            println!("name,iso3,source");
            for row in &rows {
                println!(
                    "\"{}\",{},{}",
                    row.name.replace('"', "\"\""),
                    row.iso3.as_deref().unwrap_or(""),
                    row.source
                );
            }
        }
    }

    let resolved = rows.iter().filter(|row| row.iso3.is_some()).count();
    info!("Resolved {}/{} names", resolved, rows.len());

    Ok(RunStats {
        rows_output: rows.len(),
        ..Default::default()
    })
}
