//! Table export service
//!
//! Turns a filtered view into the two outputs the dashboard drew: a data
//! table and a choropleth. Tables go through polars so the same frame can be
//! written as CSV or Parquet.
//!
//! # Architecture
//!
//! - [`frame`]: per-mode display columns and the view-to-DataFrame conversion
//! - [`writer`]: file export by extension plus CSV to any writer
//! - [`choropleth`]: the serializable map series

pub mod choropleth;
pub mod frame;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use choropleth::{ChoroplethSeries, build_series, chart_title};
pub use frame::{COLOR_COLUMN, ISO3_COLUMN, color_values, display_columns, view_to_dataframe};
pub use writer::{ExportFormat, ExportSummary, export_view, write_csv};
