//! View command implementation for trade atlas CLI
//!
//! Answers one selection from flags: loads the dataset, filters it, prints
//! the table in the requested format and optionally writes the table and the
//! choropleth series to files.

use super::shared::{
    RunStats, apply_display_overrides, build_store, file_size, load_configuration,
    print_output_files, print_view_human, setup_logging,
};
use crate::app::models::TradeView;
use crate::app::services::commodity_catalog::{CommodityDescription, describe};
use crate::app::services::table_export::{ChoroplethSeries, build_series, export_view, write_csv};
use crate::cli::args::{OutputFormat, ViewArgs};
use crate::config::DisplayConfig;
use crate::{Error, Result};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Machine-readable view output
#[derive(Debug, Serialize)]
struct ViewReport<'a> {
    #[serde(flatten)]
    view: &'a TradeView,
    description: CommodityDescription,
    total_value: f64,
    choropleth: ChoroplethSeries,
}

/// View command runner
pub fn run_view(args: ViewArgs) -> Result<RunStats> {
    let start_time = Instant::now();
    setup_logging(&args.log)?;

    info!("Starting trade view");
    debug!("View arguments: {:?}", args);

    let selection = args.selection()?;
    let mut config = load_configuration(&args.source)?;
    apply_display_overrides(&mut config.display, args.transform, args.sort_by_value);

    let store = build_store(&config, args.log.show_progress())?;
    let dataset = store.get_or_load()?;

    let mut view = dataset.view(&selection);
    if view.is_empty() {
        warn!("No data for selection [{}]", selection);
    }
    if config.display.sort_by_value {
        view.sort_by_value_desc();
    }

    let mut stats = RunStats {
        records_loaded: dataset.len(),
        views_rendered: 1,
        rows_output: view.len(),
        ..Default::default()
    };

    print_view(&view, &config.display, args.format)?;

    if let Some(path) = &args.export {
        let summary = export_view(&view, config.display.value_transform, path)?;
        stats
            .output_files
            .push((summary.path.display().to_string(), summary.bytes));
    }

    if let Some(path) = &args.choropleth {
        write_choropleth(&build_series(&view, &config.display), path)?;
        stats
            .output_files
            .push((path.display().to_string(), file_size(path)));
    }

    stats.elapsed = start_time.elapsed();
    if args.format == OutputFormat::Human {
        print_output_files(&stats);
    }
    info!("View completed in {:.2?}", stats.elapsed);

    Ok(stats)
}

/// Print a view in the requested output format
pub fn print_view(view: &TradeView, display: &DisplayConfig, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => print_view_human(view, display),
        OutputFormat::Json => {
            let report = ViewReport {
                view,
                description: describe(&view.selection.commodity_code),
                total_value: view.total_value(),
                choropleth: build_series(view, display),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv => {
            write_csv(view, display.value_transform, std::io::stdout().lock())?;
        }
    }
    Ok(())
}

fn write_choropleth(series: &ChoroplethSeries, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::io(format!("Failed to create '{}'", parent.display()), e))?;
    }
    std::fs::write(path, series.to_json_pretty()?)
        .map_err(|e| Error::io(format!("Failed to write '{}'", path.display()), e))?;
    info!(
        "Wrote choropleth series with {} locations to {}",
        series.locations.len(),
        path.display()
    );
    Ok(())
}
