//! Trade CSV parser for COMTRADE extracts
//!
//! Turns a raw trade-flow CSV into normalized, country-resolved
//! [`TradeRecord`](crate::app::models::TradeRecord)s.
//!
//! ## Architecture
//!
//! - [`raw_table`] - Untyped header and text rows read with the `csv` crate
//! - [`column_normalizer`] - Header and text-cell normalization, column mapping
//! - [`field_parsers`] - Period and trade-value parsing
//! - [`parser`] - Orchestration and country resolution
//! - [`stats`] - Load statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use trade_atlas::app::services::country_resolver::CountryResolver;
//! use trade_atlas::app::services::trade_csv_parser::TradeCsvParser;
//!
//! # fn example() -> trade_atlas::Result<()> {
//! let parser = TradeCsvParser::new(Arc::new(CountryResolver::default()));
//! let csv = "Period,CmdCode,ReporterDesc,PartnerDesc,PrimaryValue\n2010-01,283691,Japan,Chile,\"1,250\"\n";
//! let result = parser.parse_reader(csv.as_bytes(), "inline")?;
//!
//! assert_eq!(result.records[0].period, "201001");
//! assert_eq!(result.records[0].partner_iso3.as_deref(), Some("CHL"));
//! assert_eq!(result.records[0].value, Some(1250.0));
//! # Ok(())
//! # }
//! ```

pub mod column_normalizer;
pub mod field_parsers;
pub mod parser;
pub mod raw_table;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_normalizer::{ColumnMapping, normalize_column_name, normalize_table};
pub use field_parsers::{normalize_period, parse_value};
pub use parser::TradeCsvParser;
pub use raw_table::RawTable;
pub use stats::{ParseResult, ParseStats};
