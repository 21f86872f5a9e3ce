//! Data models for climate time-series analysis
//!
//! This module contains the value objects shared by the dataset, filter
//! pipeline and statistics services: filter criteria supplied by callers,
//! the inclusive year range and the monthly numeric frame flowing through
//! the pipeline.

use crate::{Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// =============================================================================
// Filter Criteria
// =============================================================================

/// Inclusive year range `[start, end]` used to narrow a monthly series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    /// First year included in the range
    pub start: i32,
    /// Last year included in the range
    pub end: i32,
}

impl YearRange {
    /// Create a new year range without validating the bounds
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Check that the range is well formed (`start <= end`)
    pub fn validate(&self) -> Result<()> {
        if self.start > self.end {
            return Err(Error::validation(
                "time range",
                format!("range [{}, {}] is inverted", self.start, self.end),
            ));
        }
        Ok(())
    }

    /// Whether the given year falls inside the inclusive range
    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }
}

impl std::fmt::Display for YearRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Filter criteria supplied by a caller (e.g. the CLI layer).
///
/// The fields must be internally consistent with the table variant in use:
/// the region filter is only meaningful when the table has a region
/// dimension, the locality filter when it has a locality dimension. The
/// pipeline validates each field at its own stage and reports which
/// criterion was rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Canonical month name, one of twelve; checked only when the month
    /// filter is enabled
    pub month_name: String,

    /// Whether to narrow the series to a single calendar month
    pub month_filter_enabled: bool,

    /// Locality to select; validated against the table's locality list
    pub locality: String,

    /// Region to select; validated against the table's region list
    pub region: String,

    /// Inclusive year range applied after gap reconciliation
    pub year_range: YearRange,

    /// Numeric columns to project; must be non-empty
    pub active_columns: Vec<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            month_name: String::new(),
            month_filter_enabled: true,
            locality: String::new(),
            region: String::new(),
            year_range: YearRange::new(0, 0),
            active_columns: Vec::new(),
        }
    }
}

// =============================================================================
// Monthly Frame
// =============================================================================

/// A single named numeric column, cell-aligned with a frame's time index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameColumn {
    /// Column name as it appears in the source dataset
    pub name: String,
    /// One cell per index entry; `None` marks a missing value
    pub values: Vec<Option<f64>>,
}

impl FrameColumn {
    /// Create a new column
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Number of cells still missing in this column
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }
}

/// An ordered sequence of month-stamped records over a fixed set of
/// numeric columns.
///
/// Intermediate pipeline frames may contain missing cells; the pipeline's
/// final output is gap-free (uniform monthly cadence) and dense (no
/// missing cells). Frames are ephemeral values owned by the caller; every
/// transformation returns a new frame and never mutates the source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyFrame {
    index: Vec<NaiveDate>,
    columns: Vec<FrameColumn>,
}

impl MonthlyFrame {
    /// Create a frame, checking that every column is cell-aligned with
    /// the time index
    pub fn new(index: Vec<NaiveDate>, columns: Vec<FrameColumn>) -> Result<Self> {
        for column in &columns {
            if column.values.len() != index.len() {
                return Err(Error::configuration(format!(
                    "column '{}' has {} cells for {} index entries",
                    column.name,
                    column.values.len(),
                    index.len()
                )));
            }
        }
        Ok(Self { index, columns })
    }

    /// Number of records in the frame
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the frame holds no records
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The month timestamps, in record order
    pub fn index(&self) -> &[NaiveDate] {
        &self.index
    }

    /// All columns, in projection order
    pub fn columns(&self) -> &[FrameColumn] {
        &self.columns
    }

    /// Column names, in projection order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&FrameColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Total number of cells across all columns
    pub fn total_cells(&self) -> usize {
        self.index.len() * self.columns.len()
    }

    /// Number of missing cells across all columns
    pub fn missing_cells(&self) -> usize {
        self.columns.iter().map(|c| c.missing_count()).sum()
    }

    /// Whether every cell holds a value
    pub fn is_dense(&self) -> bool {
        self.missing_cells() == 0
    }

    /// Build a new frame keeping only the records for which `keep`
    /// returns true. The source frame is left untouched.
    pub fn retain_records<F>(&self, keep: F) -> MonthlyFrame
    where
        F: Fn(usize, NaiveDate) -> bool,
    {
        let kept: Vec<usize> = self
            .index
            .iter()
            .enumerate()
            .filter(|(row, date)| keep(*row, **date))
            .map(|(row, _)| row)
            .collect();

        let index = kept.iter().map(|&row| self.index[row]).collect();
        let columns = self
            .columns
            .iter()
            .map(|c| FrameColumn::new(c.name.clone(), kept.iter().map(|&row| c.values[row]).collect()))
            .collect();

        // Alignment held on the way in, so it holds on the way out
        MonthlyFrame { index, columns }
    }

    /// Years spanned by the frame index, inclusive
    pub fn year_span(&self) -> Option<YearRange> {
        let first = self.index.iter().map(|d| d.year()).min()?;
        let last = self.index.iter().map(|d| d.year()).max()?;
        Some(YearRange::new(first, last))
    }
}
