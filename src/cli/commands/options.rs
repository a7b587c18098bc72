//! Options command implementation for trade atlas CLI
//!
//! Lists the distinct values available for each selection field, the same
//! lists that populate the explorer's menus.

use super::shared::{RunStats, build_store, load_configuration, print_load_summary, setup_logging};
use crate::Result;
use crate::app::services::dataset_store::{LoadSummary, SelectionOptions};
use crate::cli::args::{OptionsArgs, OutputFormat};
use colored::*;
use serde::Serialize;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Serialize)]
struct OptionsReport<'a> {
    #[serde(flatten)]
    options: &'a SelectionOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    load: Option<&'a LoadSummary>,
}

/// Options command runner
pub fn run_options(args: OptionsArgs) -> Result<RunStats> {
    let start_time = Instant::now();
    setup_logging(&args.log)?;

    let config = load_configuration(&args.source)?;
    let store = build_store(&config, args.log.show_progress())?;
    let dataset = store.get_or_load()?;
    let options = dataset.options();

    match args.format {
        OutputFormat::Human => {
            print_list("Reporters", &options.reporters);
            print_list("Commodities", &options.commodities);
            print_list("Periods", &options.periods);
            print_list("Years", &options.years);
            if args.stats {
                print_load_summary(dataset.summary());
            }
        }
        OutputFormat::Json => {
            let report = OptionsReport {
                options: &options,
                load: args.stats.then(|| dataset.summary()),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv => {
            println!("field,value");
            for (field, values) in [
                ("reporter", &options.reporters),
                ("commodity", &options.commodities),
                ("period", &options.periods),
                ("year", &options.years),
            ] {
                for value in values {
                    println!("{},{}", field, csv_field(value));
                }
            }
        }
    }

    let stats = RunStats {
        records_loaded: dataset.len(),
        elapsed: start_time.elapsed(),
        ..Default::default()
    };
    info!("Listed options for {} records", stats.records_loaded);
    Ok(stats)
}

fn print_list(title: &str, values: &[String]) {
    println!(
        "\n{} ({})",
        title.bright_green().bold(),
        values.len().to_string().bright_white()
    );
    for value in values {
        println!("   • {}", value);
    }
}

/// Quote a CSV field when it contains a separator, quote or newline
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
