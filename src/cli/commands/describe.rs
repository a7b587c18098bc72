//! Describe command implementation for trade atlas CLI

use super::shared::{RunStats, setup_logging};
use crate::Result;
use crate::app::services::commodity_catalog::{
    CommodityDescription, describe, known_commodities, missing_notice,
};
use crate::cli::args::{DescribeArgs, OutputFormat};
use colored::*;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Serialize)]
struct DescriptionRow {
    code: String,
    #[serde(flatten)]
    description: CommodityDescription,
}

/// Describe command runner
pub fn run_describe(args: DescribeArgs) -> Result<RunStats> {
    setup_logging(&args.log)?;

    let rows: Vec<DescriptionRow> = if args.codes.is_empty() {
        known_commodities()
            .map(|(code, text)| DescriptionRow {
                code: code.to_string(),
                description: CommodityDescription::Known(text),
            })
            .collect()
    } else {
        args.codes
            .iter()
            .map(|code| DescriptionRow {
                code: code.trim().to_string(),
                description: describe(code),
            })
            .collect()
    };

    for row in rows.iter().filter(|row| !row.description.is_known()) {
        warn!("No description for HS code {}", row.code);
    }

    match args.format {
        OutputFormat::Human => {
            for row in &rows {
                match row.description {
                    CommodityDescription::Known(text) => {
                        println!("{}  {}", row.code.bright_white().bold(), text)
                    }
                    CommodityDescription::Missing => {
                        println!("{}", missing_notice(&row.code).yellow())
                    }
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Csv => {
            println!("code,description");
            for row in &rows {
                println!(
                    "{},\"{}\"",
                    row.code,
                    row.description.text().unwrap_or("").replace('"', "\"\"")
                );
            }
        }
    }

    Ok(RunStats {
        rows_output: rows.len(),
        ..Default::default()
    })
}
