//! Process-lifetime memoization of the raw load

use super::dataset::TradeDataset;
use crate::Result;
use crate::app::services::country_resolver::CountryResolver;
use crate::app::services::record_source::RecordSource;
use crate::app::services::trade_csv_parser::TradeCsvParser;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Loads the dataset on first use and hands out the same copy afterwards
#[derive(Debug)]
pub struct DatasetStore {
    source: RecordSource,
    resolver: Arc<CountryResolver>,
    show_progress: bool,
    dataset: OnceLock<Arc<TradeDataset>>,
}

impl DatasetStore {
    pub fn new(source: RecordSource, resolver: Arc<CountryResolver>) -> Self {
        Self {
            source,
            resolver,
            show_progress: true,
            dataset: OnceLock::new(),
        }
    }

    /// Enable or hide the download progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn source(&self) -> &RecordSource {
        &self.source
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.get().is_some()
    }

    /// Return the memoized dataset, loading it on the first call
    ///
    /// A failed load is not memoized; the next call tries again.
    pub fn get_or_load(&self) -> Result<Arc<TradeDataset>> {
        if let Some(dataset) = self.dataset.get() {
            debug!("Dataset already loaded, reusing memoized copy");
            return Ok(Arc::clone(dataset));
        }

        let path = self.source.materialize(self.show_progress)?;
        let loaded = Arc::new(load_dataset(&path, Arc::clone(&self.resolver))?);
        Ok(Arc::clone(self.dataset.get_or_init(|| loaded)))
    }
}

/// Parse, resolve and clean a CSV file into a dataset
pub fn load_dataset(path: &Path, resolver: Arc<CountryResolver>) -> Result<TradeDataset> {
    let start = Instant::now();
    let parser = TradeCsvParser::new(resolver);
    let result = parser.parse_file(path)?;

    let dataset = TradeDataset::from_parse_result(result, path.display().to_string());
    let summary = dataset.summary();

    if !summary.parse.unresolved_names.is_empty() {
        warn!(
            "{} partner names could not be resolved to ISO3 codes",
            summary.parse.unresolved_names.len()
        );
    }
    info!(
        "Loaded {} usable records from {} rows in {:.2?}",
        dataset.len(),
        summary.parse.total_rows,
        start.elapsed()
    );

    Ok(dataset)
}
