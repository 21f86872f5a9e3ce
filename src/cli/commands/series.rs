//! Series command: filter one dataset and summarize the cleaned series

use super::build_criteria;
use crate::app::services::dataset::DatasetRegistry;
use crate::app::services::filter_pipeline::{compute_regression, filter_with_stats};
use crate::cli::args::SeriesArgs;
use crate::Result;
use colored::*;

/// Filter the named dataset and print the cleaned series summary
pub fn run(registry: &DatasetRegistry, args: &SeriesArgs) -> Result<()> {
    let table = registry.get(&args.dataset)?;
    let criteria = build_criteria(
        &table,
        args.column.as_deref(),
        args.region.as_deref(),
        args.locality.as_deref(),
        args.month.as_deref(),
        args.start_year,
        args.end_year,
    );

    let (frame, stats) = filter_with_stats(&table, &criteria)?;

    println!("{}", stats.summary());
    println!();

    let first = frame.index()[0];
    let last = frame.index()[frame.len() - 1];
    println!(
        "Cleaned series: {} monthly record(s), {} to {}",
        frame.len().to_string().bold(),
        first,
        last
    );
    for column in frame.columns() {
        let head = column.values[0].unwrap_or_default();
        let tail = column.values[frame.len() - 1].unwrap_or_default();
        println!("  {:<20} first {:>10.3}, last {:>10.3}", column.name, head, tail);
    }

    if args.regression {
        let line = compute_regression(&frame, table.name())?;
        println!();
        println!("Regression line for '{}':", line.name());
        println!("  slope      {:>14.6e} per second", line.slope());
        println!("  intercept  {:>14.6}", line.intercept());
        println!("  R²         {:>14.6}", line.coefficient_of_determination());
    }

    Ok(())
}
