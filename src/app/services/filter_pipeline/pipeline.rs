//! Pipeline orchestration
//!
//! Applies the eight filter steps in their fixed order and accounts for
//! record counts along the way. See the module documentation of
//! [`super`] for the ordering rationale.

use crate::app::models::{FilterCriteria, MonthlyFrame};
use crate::app::services::dataset::TimeSeriesTable;
use crate::{Error, Result};
use chrono::Datelike;
use tracing::{debug, info};

use super::{
    interpolate::resolve_missing,
    reindex::reconcile_gaps,
    selection::{apply_locality_filter, apply_month_filter, apply_region_filter, project_columns},
    stats::FilterStats,
};

/// Filter the table down to a clean, gap-free numeric frame
pub fn filter(table: &TimeSeriesTable, criteria: &FilterCriteria) -> Result<MonthlyFrame> {
    filter_with_stats(table, criteria).map(|(frame, _)| frame)
}

/// Filter the table, additionally reporting per-stage record counts
pub fn filter_with_stats(
    table: &TimeSeriesTable,
    criteria: &FilterCriteria,
) -> Result<(MonthlyFrame, FilterStats)> {
    let mut stats = FilterStats::new();
    stats.total_input = table.len();

    debug!(
        "Filtering dataset '{}' ({} records) with criteria {:?}",
        table.name(),
        table.len(),
        criteria
    );

    // Steps 1-3: narrow the record selection
    let rows: Vec<usize> = (0..table.len()).collect();
    let rows = apply_month_filter(table, criteria, rows)?;
    stats.after_month_filter = rows.len();

    let rows = apply_region_filter(table, criteria, rows)?;
    stats.after_region_filter = rows.len();

    let rows = apply_locality_filter(table, criteria, rows)?;
    stats.after_locality_filter = rows.len();

    // Step 4: project onto the active columns
    let frame = project_columns(table, &rows, &criteria.active_columns)?;
    if frame.is_empty() {
        return Err(Error::no_data("filtering"));
    }

    // Step 5: gap reconciliation onto the complete monthly grid
    let selected = frame.len();
    let frame = reconcile_gaps(frame)?;
    stats.gaps_inserted = frame.len() - selected;
    stats.missing_cells_detected = frame.missing_cells();

    // Step 6: missing-value resolution
    let reconciled = frame.len();
    let frame = resolve_missing(frame)?;
    stats.edge_records_dropped = reconciled - frame.len();

    // Step 7: inclusive year-range narrowing
    criteria.year_range.validate()?;
    let frame = frame.retain_records(|_, date| criteria.year_range.contains(date.year()));

    // Step 8: nothing left means the criteria describe no data
    if frame.is_empty() {
        return Err(Error::no_data("year-range filtering"));
    }
    stats.final_output = frame.len();

    info!(
        "Filtered '{}': {} -> {} records",
        table.name(),
        stats.total_input,
        stats.final_output
    );

    Ok((frame, stats))
}
