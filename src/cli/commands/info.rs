//! Info command: schema details for one dataset

use crate::app::services::dataset::DatasetRegistry;
use crate::cli::args::InfoArgs;
use crate::Result;
use colored::*;

/// Print schema information for the named dataset
pub fn run(registry: &DatasetRegistry, args: &InfoArgs) -> Result<()> {
    let table = registry.get(&args.dataset)?;
    let years = table.time_range_years();
    let capabilities = table.capabilities();

    println!("Dataset:         {}", table.name().bold());
    println!("Records:         {}", table.len());
    println!("Time range:      {} - {}", years.start, years.end);
    println!("Numeric columns: {}", table.numeric_columns().join(", "));

    let grouping = match (capabilities.has_region, capabilities.has_locality) {
        (true, true) => "region + locality",
        (true, false) => "region",
        _ => "none",
    };
    println!("Grouping:        {}", grouping);

    if let Some(regions) = table.region_list() {
        println!("Regions:         {}", regions.len());
    }
    if let Some(localities) = table.locality_list() {
        println!("Localities:      {}", localities.len());
    }

    Ok(())
}
