//! Trade Atlas Library
//!
//! A Rust library for turning UN COMTRADE trade-flow extracts into a clean,
//! queryable in-memory dataset of bilateral trade records.
//!
//! This library provides tools for:
//! - Loading the raw CSV extract from a local file or a one-shot remote download
//! - Normalizing column names and text cells (trim, lowercase, byte-order marks)
//! - Parsing periods, years and comma-separated trade values
//! - Resolving partner country names to ISO 3166-1 alpha-3 codes
//! - Filtering per-partner views by monthly period or annual aggregate
//! - Exporting views as tables and choropleth series

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod commodity_catalog;
        pub mod country_resolver;
        pub mod dataset_store;
        pub mod record_filter;
        pub mod record_source;
        pub mod table_export;
        pub mod trade_csv_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{Granularity, Resolution, Selection, TradeRecord, TradeView};
pub use config::Config;

/// Result type alias for the trade atlas
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for loading, resolving and exporting trade data
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in '{source_name}': {message}")]
    CsvParsing {
        source_name: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Trade value could not be parsed as a number
    #[error("Invalid trade value at row {row} of column '{column}': '{value}'")]
    ValueParse {
        row: usize,
        column: String,
        value: String,
    },

    /// Remote download failed
    #[error("Download failed for {url}: {message}")]
    Download {
        url: String,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Table export error
    #[error("Table export error: {message}")]
    TableExport {
        message: String,
        #[source]
        source: Option<polars::error::PolarsError>,
    },

    /// Serialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        source_name: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            source_name: source_name.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a value parse error for a specific data row
    pub fn value_parse(row: usize, column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ValueParse {
            row,
            column: column.into(),
            value: value.into(),
        }
    }

    /// Create a download error
    pub fn download(
        url: impl Into<String>,
        message: impl Into<String>,
        source: Option<reqwest::Error>,
    ) -> Self {
        Self::Download {
            url: url.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a table export error
    pub fn table_export(
        message: impl Into<String>,
        source: Option<polars::error::PolarsError>,
    ) -> Self {
        Self::TableExport {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Whether this error came from reading or fetching the raw dataset
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Self::Io { .. }
                | Self::CsvParsing { .. }
                | Self::ValueParse { .. }
                | Self::Download { .. }
                | Self::FileNotFound { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            source_name: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        let url = error
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        Self::Download {
            url,
            message: "HTTP request failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<polars::error::PolarsError> for Error {
    fn from(error: polars::error::PolarsError) -> Self {
        Self::TableExport {
            message: "Polars operation failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {}", error),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid TOML configuration: {}", error),
        }
    }
}
