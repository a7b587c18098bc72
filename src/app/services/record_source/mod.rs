//! Raw record source service
//!
//! Locates the raw COMTRADE extract on disk. A local source is used as-is; a
//! remote source is downloaded once into the cache directory and reused on
//! later runs unless a refresh is requested.
//!
//! # Architecture
//!
//! - [`RecordSource`]: local path or remote URL, built from [`Config`]
//! - `download`: single-attempt HTTP fetch with a progress bar

use crate::config::{Config, SourceKind};
use crate::constants::{DEFAULT_DATASET_FILE, DOWNLOAD_TIMEOUT_SECS};
use crate::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

pub mod download;

#[cfg(test)]
pub mod tests;

pub use download::download_to;

/// Where the raw table is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    /// A CSV already on disk
    Local { path: PathBuf },
    /// A URL fetched into `cache_path`
    Remote {
        url: String,
        cache_path: PathBuf,
        refresh: bool,
    },
}

impl RecordSource {
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self::Local { path: path.into() }
    }

    /// Build the source described by the configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.source.kind {
            SourceKind::Local => Ok(Self::local(config.source.local_path.clone())),
            SourceKind::Remote => Ok(Self::Remote {
                url: config.source.remote_url.clone(),
                cache_path: config.cache_dir()?.join(DEFAULT_DATASET_FILE),
                refresh: config.source.refresh,
            }),
        }
    }

    /// Make the raw CSV available on disk and return its path
    ///
    /// Remote sources hit the network only when no cached copy exists or a
    /// refresh was requested.
    pub fn materialize(&self, show_progress: bool) -> Result<PathBuf> {
        match self {
            Self::Local { path } => {
                if !path.is_file() {
                    return Err(Error::file_not_found(path.display().to_string()));
                }
                debug!("Using local dataset {}", path.display());
                Ok(path.clone())
            }
            Self::Remote {
                url,
                cache_path,
                refresh,
            } => {
                if !refresh && is_cached(cache_path) {
                    info!("Using cached download {}", cache_path.display());
                    return Ok(cache_path.clone());
                }
                download_to(
                    url,
                    cache_path,
                    Duration::from_secs(DOWNLOAD_TIMEOUT_SECS),
                    show_progress,
                )?;
                Ok(cache_path.clone())
            }
        }
    }
}

impl fmt::Display for RecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local { path } => write!(f, "local file {}", path.display()),
            Self::Remote { url, .. } => write!(f, "remote {}", url),
        }
    }
}

/// A cached download counts only if it is a non-empty file
fn is_cached(path: &Path) -> bool {
    path.metadata()
        .map(|meta| meta.is_file() && meta.len() > 0)
        .unwrap_or(false)
}
