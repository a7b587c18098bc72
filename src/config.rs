//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `TRADE_ATLAS_*` environment variables, then command-line flags (applied by
//! the CLI). [`Config::validate`] runs once after all layers are merged.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_COLOR_SCALE, DEFAULT_DATASET_FILE, DEFAULT_REMOTE_URL,
    ENV_PREFIX,
};
use crate::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Where the raw extract comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// A CSV on the local filesystem
    #[default]
    Local,
    /// A one-shot HTTP download, cached on disk
    Remote,
}

impl FromStr for SourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            other => Err(Error::configuration(format!(
                "Unknown source kind '{}' (expected 'local' or 'remote')",
                other
            ))),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

/// Transform applied to trade values before they become map colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValueTransform {
    /// Color by the raw value
    #[default]
    Identity,
    /// Color by `log10(value)`; zero and negative values get no color
    Log10,
}

impl ValueTransform {
    /// Map a trade value to its color value
    pub fn apply(&self, value: f64) -> Option<f64> {
        match self {
            Self::Identity => value.is_finite().then_some(value),
            Self::Log10 => (value > 0.0 && value.is_finite()).then(|| value.log10()),
        }
    }

    /// Colorbar title for a value column
    pub fn colorbar_title(&self, column: &str) -> String {
        match self {
            Self::Identity => column.to_string(),
            Self::Log10 => format!("log10({})", column),
        }
    }
}

impl FromStr for ValueTransform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "identity" | "linear" => Ok(Self::Identity),
            "log10" | "log" => Ok(Self::Log10),
            other => Err(Error::configuration(format!(
                "Unknown value transform '{}' (expected 'identity' or 'log10')",
                other
            ))),
        }
    }
}

/// Raw data source settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: SourceKind,

    /// CSV path used when `kind` is local
    pub local_path: PathBuf,

    /// Download URL used when `kind` is remote
    pub remote_url: String,

    /// Directory for the download cache; platform cache dir when unset
    pub cache_dir: Option<PathBuf>,

    /// Ignore a cached download and fetch again
    pub refresh: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Local,
            local_path: PathBuf::from(DEFAULT_DATASET_FILE),
            remote_url: DEFAULT_REMOTE_URL.to_string(),
            cache_dir: None,
            refresh: false,
        }
    }
}

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub value_transform: ValueTransform,
    pub color_scale: String,
    /// Order table rows by value, largest first
    pub sort_by_value: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            value_transform: ValueTransform::Identity,
            color_scale: DEFAULT_COLOR_SCALE.to_string(),
            sort_by_value: false,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub display: DisplayConfig,

    /// Extra partner-name overrides, applied on top of the built-in table
    pub country_overrides: BTreeMap<String, String>,
}

impl Config {
    /// Default config file location: `<config_dir>/trade-atlas/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine config directory"))
    }

    /// Read a TOML config file; absent keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::file_not_found(path.display().to_string())
            } else {
                Error::io(format!("Failed to read config file '{}'", path.display()), e)
            }
        })?;
        let config: Self = toml::from_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Defaults, then the config file (if any), then the process environment
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides_from(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `TRADE_ATLAS_*` overrides read through `lookup`
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(kind) = var("SOURCE") {
            self.source.kind = kind.parse()?;
            debug!("Environment override: source kind = {}", self.source.kind);
        }
        if let Some(path) = var("LOCAL_PATH") {
            self.source.local_path = PathBuf::from(path);
        }
        if let Some(url) = var("REMOTE_URL") {
            self.source.remote_url = url;
        }
        if let Some(transform) = var("VALUE_TRANSFORM") {
            self.display.value_transform = transform.parse()?;
        }
        Ok(())
    }

    /// Check the merged configuration
    pub fn validate(&self) -> Result<()> {
        match self.source.kind {
            SourceKind::Local => {
                if self.source.local_path.as_os_str().is_empty() {
                    return Err(Error::configuration("Local source path is empty"));
                }
            }
            SourceKind::Remote => {
                let url = self.source.remote_url.trim();
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(Error::configuration(format!(
                        "Remote URL must be http(s), got '{}'",
                        url
                    )));
                }
            }
        }

        if self.display.color_scale.trim().is_empty() {
            return Err(Error::configuration("Color scale must not be empty"));
        }

        for (name, code) in &self.country_overrides {
            if name.trim().is_empty() {
                return Err(Error::configuration(format!(
                    "Country override for code '{}' has an empty name",
                    code
                )));
            }
        }

        Ok(())
    }

    /// Directory holding the download cache
    pub fn cache_dir(&self) -> Result<PathBuf> {
        match &self.source.cache_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::cache_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or_else(|| Error::configuration("Could not determine cache directory")),
        }
    }
}
