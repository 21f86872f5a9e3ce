//! Climate Trends Library
//!
//! A Rust library for exploring monthly climate observation datasets:
//! filtering a time-indexed table down to a clean, gap-free numeric series
//! and computing univariate regression statistics over it.
//!
//! This library provides tools for:
//! - Loading monthly CSV datasets into immutable time-series tables
//! - Schema introspection (numeric columns, time span, grouping dimensions)
//! - Region/locality lookups with lazily built, memoized indices
//! - An eight-step filter pipeline: month, region, locality and column
//!   selection, gap reconciliation, interpolation and year-range narrowing
//! - Univariate regression lines and R²-based ranking across regions

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod dataset;
        pub mod filter_pipeline;
        pub mod loader;
        pub mod statistics;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FilterCriteria, MonthlyFrame, YearRange};
pub use app::services::dataset::{DatasetRegistry, TimeSeriesTable};
pub use app::services::filter_pipeline::{compute_regression, filter, filter_with_stats};
pub use app::services::statistics::{rank_regression_lines, RegressionLine, Sample};

/// Result type alias for climate trends operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for dataset loading, filtering and regression analysis
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV ingestion error from polars
    #[error("CSV reading error: {0}")]
    Csv(#[from] polars::error::PolarsError),

    /// Dataset file is structurally unusable
    #[error("Dataset format error in '{dataset}': {message}")]
    DatasetFormat { dataset: String, message: String },

    /// Date/time parsing error
    #[error("Date parsing error: {message}")]
    DateParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Requested dataset is not in the registry
    #[error("Dataset not found: {name}")]
    DatasetNotFound { name: String },

    /// Data directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Filter criteria rejected at a pipeline stage
    #[error("Invalid '{criterion}' criterion: {message}")]
    Validation { criterion: String, message: String },

    /// A pipeline stage produced an empty result
    #[error("No data left after {stage}")]
    NoData { stage: String },

    /// Mathematically undefined statistical operation
    #[error("Statistics domain error: {message}")]
    Domain { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a dataset format error
    pub fn dataset_format(dataset: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DatasetFormat {
            dataset: dataset.into(),
            message: message.into(),
        }
    }

    /// Create a date parsing error
    pub fn date_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a dataset-not-found error
    pub fn dataset_not_found(name: impl Into<String>) -> Self {
        Self::DatasetNotFound { name: name.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a validation error naming the offending criterion
    pub fn validation(criterion: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            criterion: criterion.into(),
            message: message.into(),
        }
    }

    /// Create an empty-result error naming the pipeline stage
    pub fn no_data(stage: impl Into<String>) -> Self {
        Self::NoData {
            stage: stage.into(),
        }
    }

    /// Create a domain error for an undefined statistical operation
    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain {
            message: message.into(),
        }
    }

    /// Whether the failure is scoped to one request and recoverable by
    /// adjusting the inputs, as opposed to an environmental failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::NoData { .. }
                | Self::Domain { .. }
                | Self::DatasetNotFound { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: "Date parsing failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}
