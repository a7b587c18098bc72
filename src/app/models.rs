//! Data models for trade-flow processing
//!
//! This module contains the core data structures for representing COMTRADE
//! trade records before and after country resolution, the user selection
//! that narrows them, and the per-partner views produced by the filter.

use crate::constants::YEAR_PREFIX_LEN;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Trade Record Structures
// =============================================================================

/// One normalized row of the dataset
///
/// Produced by the CSV parser after column normalization, period/value parsing
/// and country resolution. `partner_iso3` and `value` stay optional here; rows
/// missing either are dropped by [`TradeRecord::into_resolved`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Canonical period, hyphens removed (e.g. "201001")
    pub period: String,

    /// Leading four characters of `period`
    pub year: String,

    /// Harmonized System commodity code
    pub commodity_code: String,

    /// Reporting country display name
    pub reporter_name: String,

    /// Partner country display name
    pub partner_name: String,

    /// ISO 3166-1 alpha-3 code resolved from `partner_name`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_iso3: Option<String>,

    /// Trade value in the reported unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl TradeRecord {
    /// Create a record, deriving `year` from `period`
    pub fn new(
        period: String,
        commodity_code: String,
        reporter_name: String,
        partner_name: String,
        partner_iso3: Option<String>,
        value: Option<f64>,
    ) -> Self {
        let year = year_of(&period);
        Self {
            period,
            year,
            commodity_code,
            reporter_name,
            partner_name,
            partner_iso3,
            value,
        }
    }

    /// Check whether both the partner code and the value are present
    pub fn is_complete(&self) -> bool {
        self.partner_iso3.is_some() && self.value.is_some()
    }

    /// Convert into a resolved record, or `None` if a required field is absent
    pub fn into_resolved(self) -> Option<ResolvedTrade> {
        let partner_iso3 = self.partner_iso3?;
        let value = self.value?;
        Some(ResolvedTrade {
            period: self.period,
            year: self.year,
            commodity_code: self.commodity_code,
            reporter_name: self.reporter_name,
            partner_name: self.partner_name,
            partner_iso3,
            value,
        })
    }
}

/// A trade record with a resolved partner code and a parsed value
///
/// Only these records are ever filtered, charted or displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTrade {
    pub period: String,
    pub year: String,
    pub commodity_code: String,
    pub reporter_name: String,
    pub partner_name: String,
    pub partner_iso3: String,
    pub value: f64,
}

/// Derive the year from a normalized period
///
/// Takes the first four characters; shorter periods are returned whole.
pub fn year_of(period: &str) -> String {
    period.chars().take(YEAR_PREFIX_LEN).collect()
}

// =============================================================================
// Country Resolution
// =============================================================================

/// Outcome of resolving a partner display name to an ISO3 code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// A three-letter ISO 3166-1 alpha-3 code
    Resolved(String),
    /// No override and no lookup match; the row is excluded downstream
    Unresolved,
}

impl Resolution {
    /// Get the resolved code, if any
    pub fn code(&self) -> Option<&str> {
        match self {
            Resolution::Resolved(code) => Some(code),
            Resolution::Unresolved => None,
        }
    }

    /// Consume the resolution and return the code, if any
    pub fn into_code(self) -> Option<String> {
        match self {
            Resolution::Resolved(code) => Some(code),
            Resolution::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

// =============================================================================
// Selections and Views
// =============================================================================

/// Time resolution of a selection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "granularity", rename_all = "lowercase")]
pub enum Granularity {
    /// A single `YYYYMM` period, rows returned as-is
    Monthly { period: String },
    /// A `YYYY` year, rows summed per partner
    Annual { year: String },
}

impl Granularity {
    /// Label of the selected period or year
    pub fn label(&self) -> &str {
        match self {
            Granularity::Monthly { period } => period,
            Granularity::Annual { year } => year,
        }
    }

    pub fn is_annual(&self) -> bool {
        matches!(self, Granularity::Annual { .. })
    }
}

/// A dashboard-style selection: reporter, commodity and period or year
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub reporter_name: String,
    pub commodity_code: String,
    #[serde(flatten)]
    pub granularity: Granularity,
}

impl Selection {
    /// Create a monthly selection
    pub fn monthly(
        reporter_name: impl Into<String>,
        commodity_code: impl Into<String>,
        period: impl Into<String>,
    ) -> Self {
        Self {
            reporter_name: reporter_name.into(),
            commodity_code: commodity_code.into(),
            granularity: Granularity::Monthly {
                period: period.into(),
            },
        }
    }

    /// Create an annual selection
    pub fn annual(
        reporter_name: impl Into<String>,
        commodity_code: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            reporter_name: reporter_name.into(),
            commodity_code: commodity_code.into(),
            granularity: Granularity::Annual { year: year.into() },
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = match &self.granularity {
            Granularity::Monthly { period } => format!("period: {}", period),
            Granularity::Annual { year } => format!("year: {}", year),
        };
        write!(
            f,
            "{} imports of {} ({})",
            self.reporter_name, self.commodity_code, scope
        )
    }
}

/// One row of a filtered view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewRow {
    pub commodity_code: String,
    /// Present for monthly views; annual rows span the whole year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    pub year: String,
    pub reporter_name: String,
    pub partner_name: String,
    pub partner_iso3: String,
    pub value: f64,
}

/// Filtered, read-only projection of the dataset for one selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeView {
    pub selection: Selection,
    pub rows: Vec<ViewRow>,
}

impl TradeView {
    /// True when no rows match the selection ("no data for this selection")
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Sum of all row values
    pub fn total_value(&self) -> f64 {
        self.rows.iter().map(|row| row.value).sum()
    }

    /// Sort rows by value, largest first
    pub fn sort_by_value_desc(&mut self) {
        self.rows.sort_by(|a, b| b.value.total_cmp(&a.value));
    }
}
