//! The loaded, immutable trade dataset and its selection options

use crate::app::models::{ResolvedTrade, Selection, TradeView};
use crate::app::services::record_filter::{ExclusionStats, exclude_incomplete, filter_view};
use crate::app::services::trade_csv_parser::{ParseResult, ParseStats};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Complete records plus the statistics of the load that produced them
#[derive(Debug, Clone)]
pub struct TradeDataset {
    records: Vec<ResolvedTrade>,
    summary: LoadSummary,
}

/// Statistics for one load, reported by the CLI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub source: String,
    pub parse: ParseStats,
    pub exclusion: ExclusionStats,
}

/// Distinct, sorted values for each selection widget
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOptions {
    pub reporters: Vec<String>,
    pub commodities: Vec<String>,
    pub periods: Vec<String>,
    pub years: Vec<String>,
}

impl TradeDataset {
    /// Drop incomplete rows from a parse result and keep the rest
    pub fn from_parse_result(result: ParseResult, source: impl Into<String>) -> Self {
        let (records, exclusion) = exclude_incomplete(result.records);
        Self {
            records,
            summary: LoadSummary {
                source: source.into(),
                parse: result.stats,
                exclusion,
            },
        }
    }

    pub fn records(&self) -> &[ResolvedTrade] {
        &self.records
    }

    pub fn summary(&self) -> &LoadSummary {
        &self.summary
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Filtered view for one selection
    pub fn view(&self, selection: &Selection) -> TradeView {
        filter_view(&self.records, selection)
    }

    pub fn reporters(&self) -> Vec<String> {
        self.distinct(|record| &record.reporter_name)
    }

    pub fn commodities(&self) -> Vec<String> {
        self.distinct(|record| &record.commodity_code)
    }

    pub fn periods(&self) -> Vec<String> {
        self.distinct(|record| &record.period)
    }

    pub fn years(&self) -> Vec<String> {
        self.distinct(|record| &record.year)
    }

    /// All option lists at once
    pub fn options(&self) -> SelectionOptions {
        SelectionOptions {
            reporters: self.reporters(),
            commodities: self.commodities(),
            periods: self.periods(),
            years: self.years(),
        }
    }

    fn distinct<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&ResolvedTrade) -> &String,
    {
        self.records
            .iter()
            .map(field)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .cloned()
            .collect()
    }
}
