//! Tests for the filter pipeline
//!
//! Stage-level tests exercise each transformation in isolation with
//! small synthetic tables; pipeline tests cover the full eight-step
//! flow, its ordering guarantees and the regression entry point.

pub mod interpolate_tests;

// Test fixtures shared across the stage and pipeline tests
use crate::app::models::{FilterCriteria, FrameColumn, YearRange};
use crate::app::services::dataset::TimeSeriesTable;
use chrono::{Datelike, Months, NaiveDate};

pub fn date(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

/// Deterministic measurement, linear in elapsed months since Jan-2000
pub fn linear_value(d: NaiveDate) -> f64 {
    ((d.year() - 2000) * 12 + d.month() as i32 - 1) as f64
}

/// A locality-less table with two regions spanning Jan-2000..Dec-2010:
/// region "X" follows a clean linear trend but is missing its Mar-2006
/// record entirely; region "Y" is complete with alternating noise on top
/// of the same trend.
pub fn scenario_table() -> TimeSeriesTable {
    let mut index = Vec::new();
    let mut regions = Vec::new();
    let mut temp = Vec::new();
    let mut uncertainty = Vec::new();

    for (region, noisy) in [("X", false), ("Y", true)] {
        let mut current = date(2000, 1);
        let mut row = 0;
        while current <= date(2010, 12) {
            if region == "X" && current == date(2006, 3) {
                current = current.checked_add_months(Months::new(1)).unwrap();
                continue;
            }

            let mut value = linear_value(current);
            if noisy {
                value += if row % 2 == 0 { 5.0 } else { -5.0 };
            }

            index.push(current);
            regions.push(region.to_string());
            temp.push(Some(value));
            uncertainty.push(Some(0.5 * linear_value(current)));

            row += 1;
            current = current.checked_add_months(Months::new(1)).unwrap();
        }
    }

    TimeSeriesTable::new(
        "scenario.csv",
        index,
        Some(regions),
        None,
        vec![
            FrameColumn::new("Temp", temp),
            FrameColumn::new("Uncertainty", uncertainty),
        ],
    )
    .unwrap()
}

/// A small full-variant table: two localities in "North", one in
/// "South", three months each
pub fn locality_table() -> TimeSeriesTable {
    let mut index = Vec::new();
    let mut regions = Vec::new();
    let mut localities = Vec::new();
    let mut temp = Vec::new();

    for (region, locality, offset) in [
        ("North", "Aberdeen", 0.0),
        ("North", "Berwick", 10.0),
        ("South", "Candover", 20.0),
    ] {
        for month in 1..=3 {
            index.push(date(2000, month));
            regions.push(region.to_string());
            localities.push(locality.to_string());
            temp.push(Some(offset + month as f64));
        }
    }

    TimeSeriesTable::new(
        "localities.csv",
        index,
        Some(regions),
        Some(localities),
        vec![FrameColumn::new("Temp", temp)],
    )
    .unwrap()
}

/// Criteria selecting the whole of region "X" on the Temp column
pub fn base_criteria() -> FilterCriteria {
    FilterCriteria {
        month_name: String::new(),
        month_filter_enabled: false,
        locality: String::new(),
        region: "X".to_string(),
        year_range: YearRange::new(2000, 2010),
        active_columns: vec!["Temp".to_string()],
    }
}

/// All row indices of a table, the pipeline's starting selection
pub fn all_rows(table: &TimeSeriesTable) -> Vec<usize> {
    (0..table.len()).collect()
}
