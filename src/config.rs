//! Per-dataset analysis options
//!
//! Holds the user-adjustable analysis state for one dataset and derives
//! sensible defaults from the dataset's schema: the full available year
//! range and the first numeric column active. Callers (the CLI layer
//! here, a widget layer elsewhere) mutate their own copy and turn it
//! into [`FilterCriteria`] per invocation; the core itself keeps no
//! option state.

use crate::app::models::{FilterCriteria, YearRange};
use crate::app::services::dataset::TimeSeriesTable;
use serde::{Deserialize, Serialize};

/// Analysis options for one dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Whether the month filter is active
    pub month_filter_enabled: bool,

    /// Canonical month name used when the month filter is active
    pub month_name: String,

    /// Selected locality (full-variant datasets)
    pub locality: String,

    /// Selected region (datasets with a region dimension)
    pub region: String,

    /// Regions queued for regression-line comparison
    pub comparison_regions: Vec<String>,

    /// Year span the dataset covers; bounds for the analysis range
    pub available_time_range: YearRange,

    /// Year span the analysis is narrowed to
    pub analysis_time_range: YearRange,

    /// Numeric columns the dataset offers
    pub available_columns: Vec<String>,

    /// Numeric columns selected for analysis
    pub active_columns: Vec<String>,

    /// Whether to fit and display a regression line
    pub show_regression_line: bool,
}

impl AnalysisOptions {
    /// Default options for a dataset: full year range, first numeric
    /// column active, month filter armed but without a month selected
    pub fn for_table(table: &TimeSeriesTable) -> Self {
        let years = table.time_range_years();
        let available_columns = table.numeric_columns().to_vec();
        let active_columns = available_columns.first().cloned().into_iter().collect();

        Self {
            month_filter_enabled: true,
            month_name: String::new(),
            locality: String::new(),
            region: String::new(),
            comparison_regions: Vec::new(),
            available_time_range: years,
            analysis_time_range: years,
            available_columns,
            active_columns,
            show_regression_line: false,
        }
    }

    /// Snapshot the options into filter criteria for one invocation
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            month_name: self.month_name.clone(),
            month_filter_enabled: self.month_filter_enabled,
            locality: self.locality.clone(),
            region: self.region.clone(),
            year_range: self.analysis_time_range,
            active_columns: self.active_columns.clone(),
        }
    }
}
