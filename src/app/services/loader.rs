//! Dataset file loading
//!
//! Parses one monthly CSV dataset file into an immutable
//! [`TimeSeriesTable`]. The first column of the file is the time index
//! (`YYYY-MM-DD`, one record per calendar month, normalized to month
//! start); the optional "Region" and "Locality" columns select the table
//! variant; every other numeric-typed column becomes a measurement
//! column. Non-numeric extra columns are ignored.

use crate::app::models::FrameColumn;
use crate::app::services::dataset::TimeSeriesTable;
use crate::constants::{LOCALITY_COLUMN, REGION_COLUMN, TIME_FORMAT};
use crate::{Error, Result};
use chrono::{Datelike, NaiveDate};
use polars::prelude::*;
use std::path::Path;
use tracing::debug;

/// Load a dataset file into a time-series table
pub fn load_table(path: &Path) -> Result<TimeSeriesTable> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    debug!("Reading dataset file '{}'", path.display());

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let columns = df.get_columns();
    if columns.len() < 2 {
        return Err(Error::dataset_format(
            &name,
            "expected a time column followed by at least one data column",
        ));
    }

    // First column is the time index, whatever its header says
    let time_column = columns[0].as_materialized_series();
    let time_name = time_column.name().to_string();
    let index = parse_time_index(&name, time_column)?;

    let has_region = df.column(REGION_COLUMN).is_ok();
    let region = if has_region {
        Some(string_cells(
            &name,
            df.column(REGION_COLUMN)?.as_materialized_series(),
        )?)
    } else {
        None
    };

    // A locality column without a region column is ignored; the variant
    // set is closed around {none, region, region+locality}
    let locality = if has_region && df.column(LOCALITY_COLUMN).is_ok() {
        Some(string_cells(
            &name,
            df.column(LOCALITY_COLUMN)?.as_materialized_series(),
        )?)
    } else {
        None
    };

    let mut numeric = Vec::new();
    for column in columns {
        let series = column.as_materialized_series();
        let column_name = series.name().as_str();
        if column_name == time_name
            || column_name == REGION_COLUMN
            || column_name == LOCALITY_COLUMN
        {
            continue;
        }
        if !is_numeric_dtype(series.dtype()) {
            debug!("Skipping non-numeric column '{}' in '{}'", column_name, name);
            continue;
        }

        let cells: Vec<Option<f64>> = series
            .cast(&DataType::Float64)?
            .f64()?
            .into_iter()
            .collect();
        numeric.push(FrameColumn::new(column_name, cells));
    }

    TimeSeriesTable::new(name, index, region, locality, numeric)
}

/// Parse the time index column, normalizing each date to month start
fn parse_time_index(name: &str, series: &Series) -> Result<Vec<NaiveDate>> {
    let values = series.str().map_err(|_| {
        Error::dataset_format(
            name,
            format!(
                "time column '{}' must contain '{}' dates",
                series.name(),
                TIME_FORMAT
            ),
        )
    })?;

    let mut index = Vec::with_capacity(series.len());
    for value in values {
        let raw = value.ok_or_else(|| {
            Error::dataset_format(name, format!("missing value in time column at record {}", index.len()))
        })?;
        let date = NaiveDate::parse_from_str(raw, TIME_FORMAT)
            .map_err(|e| Error::date_parsing(format!("invalid time value '{}' in '{}'", raw, name), e))?;
        index.push(date.with_day(1).unwrap_or(date));
    }
    Ok(index)
}

/// String cells of a grouping column; missing cells become empty strings
fn string_cells(name: &str, series: &Series) -> Result<Vec<String>> {
    let values = series.str().map_err(|_| {
        Error::dataset_format(
            name,
            format!("grouping column '{}' must contain strings", series.name()),
        )
    })?;
    Ok(values
        .into_iter()
        .map(|v| v.unwrap_or("").to_string())
        .collect())
}

fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}
