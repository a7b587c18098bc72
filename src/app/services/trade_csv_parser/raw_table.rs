//! Untyped table read from a COMTRADE CSV extract
//!
//! Every cell is kept as text. Short rows are padded with empty cells so each
//! row lines up with the header.

use crate::{Error, Result};
use std::io::Read;
use tracing::debug;

/// Raw header and text rows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create a table from headers and rows
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Read a CSV stream with a header row
    pub fn from_reader<R: Read>(reader: R, source_name: &str) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(|e| {
                Error::csv_parsing(source_name, "Failed to read CSV headers", Some(e))
            })?
            .iter()
            .map(str::to_string)
            .collect();

        let width = headers.len();
        let mut rows = Vec::new();

        for (index, result) in csv_reader.records().enumerate() {
            let record = result.map_err(|e| {
                Error::csv_parsing(
                    source_name,
                    format!("Malformed CSV record {}", index + 1),
                    Some(e),
                )
            })?;

            if record.len() > width {
                return Err(Error::csv_parsing(
                    source_name,
                    format!(
                        "Record {} has {} fields but the header has {}",
                        index + 1,
                        record.len(),
                        width
                    ),
                    None,
                ));
            }

            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(width, String::new());
            rows.push(row);
        }

        debug!(
            "Read {} rows x {} columns from {}",
            rows.len(),
            width,
            source_name
        );

        Ok(Self { headers, rows })
    }

    /// Position of a column by exact header name (first occurrence)
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
