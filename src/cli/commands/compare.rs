//! Compare command: rank regions of a dataset by regression fit
//!
//! For each requested region the dataset is filtered with the same
//! month/column/year criteria, a regression line is fitted against
//! elapsed time, and the resulting lines are ranked by coefficient of
//! determination.

use super::build_criteria;
use crate::app::services::dataset::DatasetRegistry;
use crate::app::services::filter_pipeline::{compute_regression, filter};
use crate::app::services::statistics::rank_regression_lines;
use crate::cli::args::CompareArgs;
use crate::{Error, Result};
use colored::*;
use tracing::info;

/// Fit one regression line per region and print the ranking
pub fn run(registry: &DatasetRegistry, args: &CompareArgs) -> Result<()> {
    if args.regions.len() < 2 {
        return Err(Error::validation(
            "regions",
            "specify at least two regions to compare",
        ));
    }

    let table = registry.get(&args.dataset)?;

    let mut lines = Vec::with_capacity(args.regions.len());
    for region in &args.regions {
        let criteria = build_criteria(
            &table,
            args.column.as_deref(),
            Some(region),
            None,
            args.month.as_deref(),
            args.start_year,
            args.end_year,
        );

        let frame = filter(&table, &criteria)?;
        // a single surviving record cannot carry a trend
        if frame.len() == 1 {
            return Err(Error::validation(
                "region",
                format!("region '{}' narrows to a single record", region),
            ));
        }

        info!("Fitted {} record(s) for region '{}'", frame.len(), region);
        lines.push(compute_regression(&frame, region)?);
    }

    let ranking = rank_regression_lines(&lines)?;

    match args.month.as_deref() {
        Some(month) => println!(
            "Regression line rank ({} - {})\n",
            month,
            args.dataset.bold()
        ),
        None => println!(
            "Regression line rank (every month - {})\n",
            args.dataset.bold()
        ),
    }

    let worst = ranking.worst().name.clone();
    for entry in ranking.entries() {
        let label = format!(
            "{}° {:<25} R²: {:.6}",
            entry.rank,
            entry.name.to_uppercase(),
            entry.r_squared
        );
        if entry.rank == 1 {
            println!("{}", label.green());
        } else if entry.name == worst {
            println!("{}", label.red());
        } else {
            println!("{}", label);
        }
    }
    println!(
        "\n{} has the worst regression line",
        worst.to_uppercase().red().bold()
    );

    Ok(())
}
