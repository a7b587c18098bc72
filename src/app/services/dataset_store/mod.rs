//! Dataset store service
//!
//! Owns the one loaded copy of the trade dataset. The raw file is read,
//! normalized, resolved and cleaned once per process; every selection after
//! that is answered from memory.
//!
//! # Architecture
//!
//! - [`TradeDataset`]: complete records, option lists and per-selection views
//! - [`DatasetStore`]: `OnceLock`-backed memoization over a [`RecordSource`]
//!
//! [`RecordSource`]: crate::app::services::record_source::RecordSource

pub mod dataset;
pub mod store;

#[cfg(test)]
pub mod tests;

pub use dataset::{LoadSummary, SelectionOptions, TradeDataset};
pub use store::{DatasetStore, load_dataset};
