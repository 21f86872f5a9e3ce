//! Regression entry point over a cleaned frame
//!
//! Converts the frame's time index to numeric ordinals (seconds since
//! the Unix epoch) to form the independent sample, and the single active
//! column to the dependent sample.

use crate::app::models::MonthlyFrame;
use crate::app::services::statistics::{RegressionLine, Sample};
use crate::{Error, Result};
use chrono::NaiveTime;

/// Fit a univariate regression line to the frame's single column.
///
/// Regression is single-variable only: the frame must carry exactly one
/// active column, and every cell must hold a value (the pipeline's
/// output always does).
pub fn compute_regression(frame: &MonthlyFrame, name: &str) -> Result<RegressionLine> {
    if frame.columns().len() != 1 {
        return Err(Error::validation(
            "columns",
            format!(
                "regression requires exactly one active column, {} selected",
                frame.columns().len()
            ),
        ));
    }
    let column = &frame.columns()[0];

    let mut observations_x = Vec::with_capacity(frame.len());
    let mut observations_y = Vec::with_capacity(frame.len());
    for (row, date) in frame.index().iter().enumerate() {
        let value = column.values[row].ok_or_else(|| {
            Error::validation(
                "values",
                format!("column '{}' is missing a value at {}", column.name, date),
            )
        })?;
        let ordinal = date.and_time(NaiveTime::MIN).and_utc().timestamp() as f64;
        observations_x.push(ordinal);
        observations_y.push(value);
    }

    RegressionLine::new(name, Sample::new(observations_x)?, Sample::new(observations_y)?)
}
