//! Record filtering for trade views
//!
//! Two stages, mirroring how the dashboard prepared its map:
//!
//! 1. [`exclusion`] - drop records without a partner ISO3 code or a value
//! 2. [`filter`] - narrow to a selection, summing per partner for annual views
//!
//! Both are pure functions over the immutable loaded dataset; a view is
//! recomputed from scratch for every selection.

pub mod exclusion;
pub mod filter;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use exclusion::{ExclusionStats, exclude_incomplete};
pub use filter::{filter_view, matches_selection};
