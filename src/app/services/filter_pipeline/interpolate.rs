//! Missing-value resolution
//!
//! After gap reconciliation a frame may carry missing cells. Interior
//! gaps are filled by linear interpolation along the time axis, per
//! column. Interpolation cannot extrapolate, so records at the sequence
//! edges that remain missing afterwards are dropped entirely.
//!
//! Resolution is idempotent: a frame without missing cells passes
//! through unchanged.

use crate::app::models::{FrameColumn, MonthlyFrame};
use crate::{Error, Result};
use tracing::debug;

/// Linearly interpolate interior missing runs between known neighbours.
///
/// Values are evenly spaced on the monthly grid, so interpolation by
/// position is interpolation along the time axis. Leading and trailing
/// missing values are left untouched.
pub fn interpolate_linear(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut output = values.to_vec();

    let mut previous_known: Option<usize> = None;
    for position in 0..output.len() {
        if output[position].is_some() {
            if let Some(known) = previous_known {
                if position - known > 1 {
                    fill_between(&mut output, known, position);
                }
            }
            previous_known = Some(position);
        }
    }

    output
}

/// Fill the open interval between two known positions
fn fill_between(values: &mut [Option<f64>], left: usize, right: usize) {
    let (Some(left_value), Some(right_value)) = (values[left], values[right]) else {
        return;
    };
    let span = (right - left) as f64;
    for position in left + 1..right {
        let fraction = (position - left) as f64 / span;
        values[position] = Some(left_value + (right_value - left_value) * fraction);
    }
}

/// Resolve every missing cell in the frame.
///
/// Fails with a no-data error when the frame contains nothing but
/// missing cells. Otherwise interior gaps are interpolated per column
/// and any record still carrying a missing cell afterwards (necessarily
/// at the sequence edges) is dropped.
pub fn resolve_missing(frame: MonthlyFrame) -> Result<MonthlyFrame> {
    let missing = frame.missing_cells();
    if !frame.is_empty() && missing == frame.total_cells() {
        return Err(Error::no_data("missing-value resolution"));
    }
    if missing == 0 {
        return Ok(frame);
    }

    debug!("Detected {} missing cell(s), interpolating", missing);

    let columns: Vec<FrameColumn> = frame
        .columns()
        .iter()
        .map(|column| FrameColumn::new(column.name.clone(), interpolate_linear(&column.values)))
        .collect();
    let interpolated = MonthlyFrame::new(frame.index().to_vec(), columns)?;

    if interpolated.is_dense() {
        return Ok(interpolated);
    }

    // Whatever interpolation could not reach sits at the edges
    let resolved = interpolated.retain_records(|row, _| {
        interpolated
            .columns()
            .iter()
            .all(|column| column.values[row].is_some())
    });

    debug!(
        "Dropped {} boundary record(s) interpolation could not reach",
        interpolated.len() - resolved.len()
    );

    Ok(resolved)
}
