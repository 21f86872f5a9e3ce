//! Command-line argument definitions
//!
//! This module defines the CLI interface using the clap derive API. The
//! CLI is a thin caller of the library: it discovers datasets, builds
//! filter criteria from flags and prints what the engine returns.

use crate::constants::DEFAULT_DATA_DIR;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the climate trends explorer
#[derive(Debug, Clone, Parser)]
#[command(
    name = "climate-trends",
    version,
    about = "Explore monthly climate datasets: filter, clean and rank regional trends",
    long_about = "Explores monthly climate observation datasets. Filters a time-indexed \
                  table by month, region, locality, column set and year range, reconciles \
                  gaps onto a complete monthly grid, interpolates missing values and \
                  computes univariate regression statistics over the cleaned series."
)]
pub struct Args {
    /// Directory containing dataset CSV files
    #[arg(
        short = 'd',
        long = "data-dir",
        value_name = "PATH",
        default_value = DEFAULT_DATA_DIR
    )]
    pub data_dir: PathBuf,

    /// Enable debug-level logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List the available datasets
    List,
    /// Show schema information for one dataset
    Info(InfoArgs),
    /// Filter one dataset and summarize the cleaned series
    Series(SeriesArgs),
    /// Rank regions of one dataset by regression fit
    Compare(CompareArgs),
}

/// Arguments for the info command
#[derive(Debug, Clone, Parser)]
pub struct InfoArgs {
    /// Dataset file name as reported by `list`
    pub dataset: String,
}

/// Arguments for the series command
#[derive(Debug, Clone, Parser)]
pub struct SeriesArgs {
    /// Dataset file name as reported by `list`
    pub dataset: String,

    /// Numeric column to analyze (default: first numeric column)
    #[arg(short, long, value_name = "NAME")]
    pub column: Option<String>,

    /// Region to select (default: first region, when the dataset has
    /// regions)
    #[arg(short, long, value_name = "NAME")]
    pub region: Option<String>,

    /// Locality to select (default: first locality of the region, when
    /// the dataset has localities)
    #[arg(short, long, value_name = "NAME")]
    pub locality: Option<String>,

    /// Narrow to one calendar month (canonical name, e.g. "June")
    #[arg(short, long, value_name = "MONTH")]
    pub month: Option<String>,

    /// First year of the analysis range (default: dataset minimum)
    #[arg(long, value_name = "YEAR")]
    pub start_year: Option<i32>,

    /// Last year of the analysis range (default: dataset maximum)
    #[arg(long, value_name = "YEAR")]
    pub end_year: Option<i32>,

    /// Fit and report a regression line over the series
    #[arg(long)]
    pub regression: bool,
}

/// Arguments for the compare command
#[derive(Debug, Clone, Parser)]
pub struct CompareArgs {
    /// Dataset file name as reported by `list`
    pub dataset: String,

    /// Regions to compare, comma separated (at least two)
    #[arg(
        short = 'R',
        long,
        value_name = "LIST",
        value_delimiter = ',',
        required = true
    )]
    pub regions: Vec<String>,

    /// Numeric column to analyze (default: first numeric column)
    #[arg(short, long, value_name = "NAME")]
    pub column: Option<String>,

    /// Narrow to one calendar month (canonical name, e.g. "June")
    #[arg(short, long, value_name = "MONTH")]
    pub month: Option<String>,

    /// First year of the analysis range (default: dataset minimum)
    #[arg(long, value_name = "YEAR")]
    pub start_year: Option<i32>,

    /// Last year of the analysis range (default: dataset maximum)
    #[arg(long, value_name = "YEAR")]
    pub end_year: Option<i32>,
}
