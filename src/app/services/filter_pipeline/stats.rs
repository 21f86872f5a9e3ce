//! Per-stage record accounting for filter operations

use serde::{Deserialize, Serialize};

/// Record counts observed at each stage of one filter invocation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterStats {
    /// Records in the source table
    pub total_input: usize,
    /// Records surviving the month filter
    pub after_month_filter: usize,
    /// Records surviving the region filter
    pub after_region_filter: usize,
    /// Records surviving the locality filter
    pub after_locality_filter: usize,
    /// Missing months inserted by gap reconciliation
    pub gaps_inserted: usize,
    /// Missing cells detected before interpolation
    pub missing_cells_detected: usize,
    /// Boundary records dropped because interpolation cannot extrapolate
    pub edge_records_dropped: usize,
    /// Records in the final cleaned frame
    pub final_output: usize,
}

impl FilterStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of the source table surviving into the final frame
    pub fn selectivity(&self) -> f64 {
        if self.total_input == 0 {
            0.0
        } else {
            self.final_output as f64 / self.total_input as f64
        }
    }

    /// One-line summary of the filter invocation
    pub fn summary(&self) -> String {
        format!(
            "Filter summary: {} -> {} records | month: {} | region: {} | locality: {} | \
             gaps inserted: {} | missing cells: {} | edges dropped: {}",
            self.total_input,
            self.final_output,
            self.after_month_filter,
            self.after_region_filter,
            self.after_locality_filter,
            self.gaps_inserted,
            self.missing_cells_detected,
            self.edge_records_dropped
        )
    }
}
