//! Load statistics and result structures for trade CSV parsing

use crate::app::models::TradeRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Parsed records with statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Every data row, normalized and resolved (possibly incomplete)
    pub records: Vec<TradeRecord>,

    pub stats: ParseStats,
}

/// Counters collected while reading, normalizing and resolving a table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Data rows read from the source
    pub total_rows: usize,

    /// Rows with an empty or NaN value
    pub missing_values: usize,

    /// Partner names answered by the override table
    pub override_hits: usize,

    /// Partner names answered by the generic lookup
    pub lookup_hits: usize,

    /// Rows whose partner did not resolve
    pub unresolved_rows: usize,

    /// Distinct partner names that did not resolve
    pub unresolved_names: BTreeSet<String>,

    /// Required columns absent from the source
    pub missing_columns: Vec<String>,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows with both a partner code and a value
    pub fn complete_rows(&self, records: &[TradeRecord]) -> usize {
        records.iter().filter(|record| record.is_complete()).count()
    }

    /// Share of rows whose partner resolved, as a percentage
    pub fn resolution_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            ((self.total_rows - self.unresolved_rows) as f64 / self.total_rows as f64) * 100.0
        }
    }
}
