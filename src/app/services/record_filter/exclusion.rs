//! Exclusion of incomplete records
//!
//! Rows without a resolved partner code or without a value never reach a
//! view. This runs once after loading, so the selection filter can assume
//! every record is complete.

use crate::app::models::{ResolvedTrade, TradeRecord};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Counts of rows dropped before filtering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionStats {
    pub input_rows: usize,
    pub retained: usize,
    /// Rows without a partner ISO3 code (value may also be missing)
    pub dropped_unresolved: usize,
    /// Rows with a partner code but no value
    pub dropped_missing_value: usize,
}

impl ExclusionStats {
    pub fn dropped(&self) -> usize {
        self.dropped_unresolved + self.dropped_missing_value
    }
}

/// Drop records lacking a partner code or a value
pub fn exclude_incomplete(records: Vec<TradeRecord>) -> (Vec<ResolvedTrade>, ExclusionStats) {
    let mut stats = ExclusionStats {
        input_rows: records.len(),
        ..Default::default()
    };

    let mut retained = Vec::with_capacity(records.len());
    for record in records {
        if record.partner_iso3.is_none() {
            stats.dropped_unresolved += 1;
            continue;
        }
        match record.into_resolved() {
            Some(resolved) => retained.push(resolved),
            None => stats.dropped_missing_value += 1,
        }
    }
    stats.retained = retained.len();

    info!(
        "Exclusion complete: {} -> {} records ({} without partner code, {} without value)",
        stats.input_rows,
        stats.retained,
        stats.dropped_unresolved,
        stats.dropped_missing_value
    );

    (retained, stats)
}
