//! Command implementations for the climate trends CLI
//!
//! Each subcommand is a thin caller of the library: it loads the dataset
//! registry, derives filter criteria from defaults plus flags and prints
//! what the engine returns.

use crate::app::models::FilterCriteria;
use crate::app::services::dataset::{DatasetRegistry, TimeSeriesTable};
use crate::cli::args::{Args, Commands};
use crate::config::AnalysisOptions;
use crate::Result;
use tracing::debug;

pub mod compare;
pub mod info;
pub mod list;
pub mod series;

/// Run the parsed command line
pub fn run(args: Args) -> Result<()> {
    setup_logging(args.verbose);

    let registry = DatasetRegistry::load_from_dir(&args.data_dir)?;

    match args.command {
        None | Some(Commands::List) => list::run(&registry),
        Some(Commands::Info(info_args)) => info::run(&registry, &info_args),
        Some(Commands::Series(series_args)) => series::run(&registry, &series_args),
        Some(Commands::Compare(compare_args)) => compare::run(&registry, &compare_args),
    }
}

/// Set up structured logging on stderr
fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("climate_trends={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", level);
}

/// Build filter criteria for a table from the dataset defaults plus any
/// command-line overrides.
///
/// Regions and localities default to the first entry of the relevant
/// list so that grouped datasets stay usable without flags; validation
/// of the final values is the pipeline's job.
#[allow(clippy::too_many_arguments)]
pub(crate) fn build_criteria(
    table: &TimeSeriesTable,
    column: Option<&str>,
    region: Option<&str>,
    locality: Option<&str>,
    month: Option<&str>,
    start_year: Option<i32>,
    end_year: Option<i32>,
) -> FilterCriteria {
    let options = AnalysisOptions::for_table(table);
    let mut criteria = options.criteria();

    criteria.month_filter_enabled = month.is_some();
    if let Some(name) = month {
        criteria.month_name = name.to_string();
    }

    if let Some(name) = column {
        criteria.active_columns = vec![name.to_string()];
    }

    criteria.region = match region {
        Some(name) => name.to_string(),
        None => table
            .region_list()
            .and_then(|regions| regions.first().cloned())
            .unwrap_or_default(),
    };

    criteria.locality = match locality {
        Some(name) => name.to_string(),
        None => table
            .localities_in_region(&criteria.region)
            .and_then(|localities| localities.first().cloned())
            .unwrap_or_default(),
    };

    if let Some(year) = start_year {
        criteria.year_range.start = year;
    }
    if let Some(year) = end_year {
        criteria.year_range.end = year;
    }

    criteria
}
