//! Filter pipeline for monthly time-series tables
//!
//! This module turns a raw [`TimeSeriesTable`](crate::TimeSeriesTable) and
//! a set of [`FilterCriteria`](crate::FilterCriteria) into a clean,
//! gap-free numeric frame ready for plotting or regression analysis.
//!
//! # Pipeline
//!
//! The algorithm applies eight steps in a fixed order, each narrowing the
//! result of the previous one:
//!
//! 1. **Month filter** (when enabled) - keep records of one calendar month
//! 2. **Region filter** (when the table has regions) - keep one region
//! 3. **Locality filter** (when the table has localities) - keep one
//!    locality
//! 4. **Column selection** - project to the active numeric columns
//! 5. **Gap reconciliation** - re-expand to a complete monthly grid,
//!    marking absent months as missing
//! 6. **Missing-value resolution** - linear interpolation along the time
//!    axis, dropping boundary records interpolation cannot reach
//! 7. **Year-range filter** - keep records inside the inclusive year range
//! 8. **Empty-result check** - fail when nothing is left
//!
//! Step ordering is significant: reconciliation and interpolation run
//! *before* the year-range filter so edge interpolation can use
//! neighbouring data that the year range later excludes, and so the range
//! is applied to an already-complete monthly grid.
//!
//! Every step is a pure transformation over an explicit selection or
//! frame value; the source table is never mutated and the pipeline keeps
//! no state between invocations, so concurrent calls with different
//! criteria cannot cross-contaminate.
//!
//! The module is organized into logical components:
//! - [`pipeline`] - orchestration and the public `filter` entry points
//! - [`selection`] - month/region/locality filters and column projection
//! - [`reindex`] - monthly-grid gap reconciliation
//! - [`interpolate`] - missing-value resolution
//! - [`regression`] - the single-column regression entry point
//! - [`stats`] - per-stage record accounting

pub mod interpolate;
pub mod pipeline;
pub mod regression;
pub mod reindex;
pub mod selection;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use pipeline::{filter, filter_with_stats};
pub use regression::compute_regression;
pub use stats::FilterStats;
