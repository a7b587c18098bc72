//! CSV and Parquet export of views

use super::frame::view_to_dataframe;
use crate::app::models::TradeView;
use crate::config::ValueTransform;
use crate::{Error, Result};
use polars::prelude::*;
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Supported export file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Parquet,
}

impl ExportFormat {
    /// Pick the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("parquet") => Ok(Self::Parquet),
            _ => Err(Error::table_export(
                format!(
                    "Cannot infer export format from '{}' (use .csv or .parquet)",
                    path.display()
                ),
                None,
            )),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "CSV"),
            Self::Parquet => write!(f, "Parquet"),
        }
    }
}

/// What an export produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub rows: usize,
    pub bytes: u64,
}

/// Write a view to `path`, choosing CSV or Parquet by extension
pub fn export_view(view: &TradeView, transform: ValueTransform, path: &Path) -> Result<ExportSummary> {
    let format = ExportFormat::from_path(path)?;
    let mut df = view_to_dataframe(view, transform)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            Error::io(format!("Failed to create '{}'", parent.display()), e)
        })?;
    }

    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create '{}'", path.display()), e))?;

    match format {
        ExportFormat::Csv => {
            CsvWriter::new(file)
                .include_header(true)
                .finish(&mut df)
                .map_err(|e| Error::table_export("Failed to write CSV", Some(e)))?;
        }
        ExportFormat::Parquet => {
            ParquetWriter::new(file)
                .with_compression(ParquetCompression::Snappy)
                .finish(&mut df)
                .map_err(|e| Error::table_export("Failed to write Parquet", Some(e)))?;
        }
    }

    let bytes = std::fs::metadata(path).map(|meta| meta.len()).unwrap_or(0);
    info!(
        "Exported {} rows to {} ({})",
        df.height(),
        path.display(),
        format
    );

    Ok(ExportSummary {
        path: path.to_path_buf(),
        format,
        rows: df.height(),
        bytes,
    })
}

/// Write a view as CSV to any writer (used for stdout output)
pub fn write_csv<W: Write>(view: &TradeView, transform: ValueTransform, writer: W) -> Result<()> {
    let mut df = view_to_dataframe(view, transform)?;
    CsvWriter::new(writer)
        .include_header(true)
        .finish(&mut df)
        .map_err(|e| Error::table_export("Failed to write CSV", Some(e)))?;
    debug!("Wrote {} CSV rows", df.height());
    Ok(())
}
