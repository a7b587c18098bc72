//! Column-name and text-cell normalization
//!
//! Header names are stripped of byte-order marks, trimmed and lowercased.
//! The text columns (period, commodity code, reporter, partner) have every
//! cell trimmed. Applying normalization twice gives the same table as once.

use super::raw_table::RawTable;
use crate::constants::{BYTE_ORDER_MARK, columns};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Normalize one header name
pub fn normalize_column_name(name: &str) -> String {
    name.replace(BYTE_ORDER_MARK, "").trim().to_lowercase()
}

/// Normalize a raw table in place
///
/// Returns the text columns that were absent and therefore skipped.
pub fn normalize_table(table: &mut RawTable) -> Vec<&'static str> {
    for header in table.headers.iter_mut() {
        *header = normalize_column_name(header);
    }

    let mut skipped = Vec::new();
    for &column in columns::TEXT_COLUMNS {
        let Some(index) = table.column_index(column) else {
            warn!("Column '{}' not present, skipping text normalization", column);
            skipped.push(column);
            continue;
        };

        for row in table.rows.iter_mut() {
            if let Some(cell) = row.get_mut(index) {
                let trimmed = cell.trim();
                if trimmed.len() != cell.len() {
                    *cell = trimmed.to_string();
                }
            }
        }
    }

    debug!(
        "Normalized {} columns, {} text columns skipped",
        table.headers.len(),
        skipped.len()
    );
    skipped
}

/// Index of the columns the record builder reads
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Column name to index mapping
    pub name_to_index: HashMap<String, usize>,

    /// Required columns absent from the table
    pub missing_columns: Vec<&'static str>,
}

impl ColumnMapping {
    /// Analyze normalized headers
    pub fn analyze(headers: &[String]) -> Self {
        let mut name_to_index = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            name_to_index.entry(header.clone()).or_insert(index);
        }

        let missing_columns = columns::REQUIRED
            .iter()
            .copied()
            .filter(|column| !name_to_index.contains_key(*column))
            .collect();

        ColumnMapping {
            name_to_index,
            missing_columns,
        }
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Cell text for a column, or `None` when the column is absent
    pub fn cell<'a>(&self, row: &'a [String], column_name: &str) -> Option<&'a str> {
        self.get_index(column_name)
            .and_then(|index| row.get(index))
            .map(String::as_str)
    }
}
