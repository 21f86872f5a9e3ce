//! Monthly-grid gap reconciliation
//!
//! A filtered series must have uniform monthly cadence before any
//! regression against elapsed time is meaningful. This step computes the
//! complete month-start sequence spanning the narrowed records and, when
//! months are absent, re-expands the frame onto that grid with missing
//! placeholders.

use crate::app::models::{FrameColumn, MonthlyFrame};
use crate::Result;
use chrono::{Months, NaiveDate};
use std::collections::BTreeMap;
use tracing::debug;

/// The complete sequence of months from `start` to `end` inclusive,
/// stepped at one-month intervals
pub fn month_grid(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut months = Vec::new();
    let mut current = start;
    while current <= end {
        months.push(current);
        match current.checked_add_months(Months::new(1)) {
            Some(next) => current = next,
            None => break,
        }
    }
    months
}

/// Re-expand the frame onto the complete monthly grid spanning its
/// records, marking absent months as missing.
///
/// When the record count already matches the expected grid the frame is
/// returned unchanged.
pub fn reconcile_gaps(frame: MonthlyFrame) -> Result<MonthlyFrame> {
    let (start, end) = match (frame.index().iter().min(), frame.index().iter().max()) {
        (Some(start), Some(end)) => (*start, *end),
        _ => return Ok(frame),
    };
    let expected = month_grid(start, end);

    if frame.len() == expected.len() {
        return Ok(frame);
    }

    debug!(
        "Detected {} missing record(s), reindexing onto {} month grid",
        expected.len().saturating_sub(frame.len()),
        expected.len()
    );

    // First occurrence wins when a month appears twice in the input
    let mut row_by_month: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for (row, date) in frame.index().iter().enumerate() {
        row_by_month.entry(*date).or_insert(row);
    }

    let columns = frame
        .columns()
        .iter()
        .map(|column| {
            let values = expected
                .iter()
                .map(|month| {
                    row_by_month
                        .get(month)
                        .and_then(|&row| column.values[row])
                })
                .collect();
            FrameColumn::new(column.name.clone(), values)
        })
        .collect();

    MonthlyFrame::new(expected, columns)
}
