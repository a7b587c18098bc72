//! Core trade CSV parser implementation
//!
//! Orchestrates reading the raw table, normalizing it, parsing periods and
//! values, and resolving partner countries into [`TradeRecord`]s.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::column_normalizer::{ColumnMapping, normalize_table};
use super::field_parsers::{normalize_period, parse_value};
use super::raw_table::RawTable;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::TradeRecord;
use crate::app::services::country_resolver::{
    CountryResolver, ResolutionCache, ResolutionSource,
};
use crate::constants::columns;
use crate::{Error, Result};

/// Parser for COMTRADE trade-flow extracts
///
/// Missing columns degrade gracefully: the stage that needs the column is
/// skipped and the affected field stays empty or absent. A non-numeric value
/// fails the whole parse.
#[derive(Debug, Clone)]
pub struct TradeCsvParser {
    resolver: Arc<CountryResolver>,
}

impl TradeCsvParser {
    /// Create a new parser with a country resolver dependency
    pub fn new(resolver: Arc<CountryResolver>) -> Self {
        Self { resolver }
    }

    /// Parse a CSV file from disk
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing trade CSV file: {}", file_path.display());

        let file = File::open(file_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::file_not_found(file_path.display().to_string())
            } else {
                Error::io(format!("Failed to open {}", file_path.display()), e)
            }
        })?;

        self.parse_reader(BufReader::new(file), &file_path.display().to_string())
    }

    /// Parse CSV content from any reader
    pub fn parse_reader<R: Read>(&self, reader: R, source_name: &str) -> Result<ParseResult> {
        let table = RawTable::from_reader(reader, source_name)?;
        self.parse_table(table)
    }

    /// Normalize and convert an already-read table
    pub fn parse_table(&self, mut table: RawTable) -> Result<ParseResult> {
        normalize_table(&mut table);

        let mapping = ColumnMapping::analyze(&table.headers);
        let mut stats = ParseStats::new();
        for column in &mapping.missing_columns {
            warn!("Required column '{}' missing, dependent stage skipped", column);
            stats.missing_columns.push(column.to_string());
        }

        let mut resolutions = ResolutionCache::new(&self.resolver);
        let mut records = Vec::with_capacity(table.row_count());

        for (index, row) in table.rows.iter().enumerate() {
            stats.total_rows += 1;
            let row_number = index + 1;

            let period = mapping
                .cell(row, columns::PERIOD)
                .map(normalize_period)
                .unwrap_or_default();
            let commodity_code = text_cell(&mapping, row, columns::COMMODITY_CODE);
            let reporter_name = text_cell(&mapping, row, columns::REPORTER);
            let partner_name = text_cell(&mapping, row, columns::PARTNER);

            let value = match mapping.cell(row, columns::PRIMARY_VALUE) {
                Some(raw) => parse_value(raw, row_number, columns::PRIMARY_VALUE)?,
                None => None,
            };
            if value.is_none() {
                stats.missing_values += 1;
            }

            let partner_iso3 = if mapping.has_column(columns::PARTNER) {
                let (resolution, source) = resolutions.resolve(&partner_name);
                match source {
                    ResolutionSource::Override => stats.override_hits += 1,
                    ResolutionSource::Lookup => stats.lookup_hits += 1,
                    ResolutionSource::Unresolved => {
                        stats.unresolved_rows += 1;
                        stats.unresolved_names.insert(partner_name.clone());
                    }
                }
                resolution.into_code()
            } else {
                stats.unresolved_rows += 1;
                None
            };

            records.push(TradeRecord::new(
                period,
                commodity_code,
                reporter_name,
                partner_name,
                partner_iso3,
                value,
            ));
        }

        debug!(
            "Resolved {} distinct partner names ({} unresolved)",
            resolutions.distinct_names(),
            stats.unresolved_names.len()
        );
        if !stats.unresolved_names.is_empty() {
            warn!(
                "Unresolved partner names: {}",
                stats
                    .unresolved_names
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join("; ")
            );
        }
        info!(
            "Parsed {} records ({:.1}% partners resolved)",
            records.len(),
            stats.resolution_rate()
        );

        Ok(ParseResult { records, stats })
    }
}

fn text_cell(mapping: &ColumnMapping, row: &[String], column: &str) -> String {
    mapping.cell(row, column).unwrap_or_default().to_string()
}
