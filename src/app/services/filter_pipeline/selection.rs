//! Record selection and column projection
//!
//! The first four pipeline steps: narrowing the table's records by month,
//! region and locality, then projecting the survivors onto the active
//! numeric columns. Selections are row-index sets into the immutable
//! table; the frame is only materialized at projection time.
//!
//! Each filter distinguishes an empty criterion from an unknown value in
//! its error message, so a caller can tell "fill in the field" apart from
//! "pick something that exists".

use crate::app::models::{FilterCriteria, FrameColumn, MonthlyFrame};
use crate::app::services::dataset::TimeSeriesTable;
use crate::constants::month_number;
use crate::{Error, Result};
use chrono::Datelike;

/// Keep only records whose month component matches the criteria month.
///
/// A no-op when the month filter is disabled. The month name must be one
/// of the twelve canonical names.
pub fn apply_month_filter(
    table: &TimeSeriesTable,
    criteria: &FilterCriteria,
    rows: Vec<usize>,
) -> Result<Vec<usize>> {
    if !criteria.month_filter_enabled {
        return Ok(rows);
    }

    if criteria.month_name.is_empty() {
        return Err(Error::validation("month", "month name is empty"));
    }
    let month = month_number(&criteria.month_name).ok_or_else(|| {
        Error::validation(
            "month",
            format!("'{}' is not a canonical month name", criteria.month_name),
        )
    })?;

    let index = table.index();
    Ok(rows
        .into_iter()
        .filter(|&row| index[row].month() == month)
        .collect())
}

/// Keep only records belonging to the criteria region.
///
/// A no-op when the table has no region dimension. The region must be
/// non-empty and present in the table's region list.
pub fn apply_region_filter(
    table: &TimeSeriesTable,
    criteria: &FilterCriteria,
    rows: Vec<usize>,
) -> Result<Vec<usize>> {
    let Some(region_list) = table.region_list() else {
        return Ok(rows);
    };

    if criteria.region.is_empty() {
        return Err(Error::validation("region", "region field is empty"));
    }
    if !region_list.iter().any(|r| *r == criteria.region) {
        return Err(Error::validation(
            "region",
            format!("region '{}' does not exist", criteria.region),
        ));
    }

    let Some(regions) = table.region_values() else {
        return Ok(rows);
    };
    Ok(rows
        .into_iter()
        .filter(|&row| regions[row] == criteria.region)
        .collect())
}

/// Keep only records belonging to the criteria locality.
///
/// A no-op when the table has no locality dimension. The locality must
/// be non-empty and present in the table's locality list.
pub fn apply_locality_filter(
    table: &TimeSeriesTable,
    criteria: &FilterCriteria,
    rows: Vec<usize>,
) -> Result<Vec<usize>> {
    let Some(locality_list) = table.locality_list() else {
        return Ok(rows);
    };

    if criteria.locality.is_empty() {
        return Err(Error::validation("locality", "locality field is empty"));
    }
    if !locality_list.iter().any(|l| *l == criteria.locality) {
        return Err(Error::validation(
            "locality",
            format!("locality '{}' does not exist", criteria.locality),
        ));
    }

    let Some(localities) = table.locality_values() else {
        return Ok(rows);
    };
    Ok(rows
        .into_iter()
        .filter(|&row| localities[row] == criteria.locality)
        .collect())
}

/// Project the selected records onto the active columns, materializing
/// the working frame.
///
/// The active column list must be non-empty and every name must be a
/// numeric column of the table.
pub fn project_columns(
    table: &TimeSeriesTable,
    rows: &[usize],
    active_columns: &[String],
) -> Result<MonthlyFrame> {
    if active_columns.is_empty() {
        return Err(Error::validation("columns", "no column selected"));
    }

    let mut columns = Vec::with_capacity(active_columns.len());
    for name in active_columns {
        let column = table.numeric_column(name).ok_or_else(|| {
            Error::validation(
                "columns",
                format!("column '{}' does not exist", name),
            )
        })?;
        columns.push(FrameColumn::new(
            name.clone(),
            rows.iter().map(|&row| column.values[row]).collect(),
        ));
    }

    let index = rows.iter().map(|&row| table.index()[row]).collect();
    MonthlyFrame::new(index, columns)
}
