//! List command: enumerate the datasets in the data directory

use crate::app::services::dataset::DatasetRegistry;
use crate::Result;
use colored::*;

/// Print one line per loaded dataset
pub fn run(registry: &DatasetRegistry) -> Result<()> {
    println!(
        "{} dataset(s) in '{}':\n",
        registry.len(),
        registry.data_dir().display()
    );

    for name in registry.dataset_names() {
        let table = registry.get(&name)?;
        let years = table.time_range_years();
        println!(
            "  {}  {} records, {} numeric column(s), {}-{}",
            name.bold(),
            table.len(),
            table.numeric_columns().len(),
            years.start,
            years.end
        );
    }

    Ok(())
}
