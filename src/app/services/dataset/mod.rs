//! Immutable time-series tables with capability-based grouping variants
//!
//! This module provides the read-only view over a loaded monthly dataset:
//! - [`TimeSeriesTable`] - row-aligned columnar storage for the time index,
//!   optional grouping columns and numeric measurement columns
//! - [`query`] - schema introspection and memoized region/locality lookups
//! - [`registry`] - discovery and ownership of one table per dataset file
//!
//! # Variants
//!
//! A table comes in one of three closed variants, selected at load time
//! from which optional grouping columns the file carries:
//!
//! 1. **Full**: both "Region" and "Locality" columns present
//! 2. **Locality-less**: "Region" only; locality queries return `None`
//! 3. **Region-less**: neither column; region and locality queries return
//!    `None`
//!
//! The variant is a [`Capabilities`] flag pair rather than a type
//! hierarchy, so query methods branch on the flags and the variant set
//! stays closed. A "Locality" column without a "Region" column is ignored
//! at load time and yields the region-less variant.

use crate::app::models::FrameColumn;
use crate::{Error, Result};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Mutex;

pub mod query;
pub mod registry;

// Re-export key types for convenience
pub use registry::DatasetRegistry;

/// Which optional grouping dimensions a loaded table carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Table has a "Region" column
    pub has_region: bool,
    /// Table has both "Region" and "Locality" columns
    pub has_locality: bool,
}

/// Lazily built region/locality indices, populated on first use per key.
///
/// The table itself is immutable, so cached entries never invalidate.
#[derive(Debug, Default)]
pub(crate) struct LookupCache {
    pub(crate) region_list: Option<Vec<String>>,
    pub(crate) locality_list: Option<Vec<String>>,
    pub(crate) localities_by_region: HashMap<String, Vec<String>>,
    pub(crate) region_by_locality: HashMap<String, String>,
}

/// Immutable view over one loaded monthly dataset.
///
/// Records are stored column-wise, cell-aligned with the time index. The
/// time span and the numeric column list are derived once at construction
/// and never change. The only interior mutability is the lookup cache,
/// guarded by a single mutex scoped to this table instance.
#[derive(Debug)]
pub struct TimeSeriesTable {
    name: String,
    index: Vec<NaiveDate>,
    region: Option<Vec<String>>,
    locality: Option<Vec<String>>,
    numeric: Vec<FrameColumn>,
    capabilities: Capabilities,
    time_range: (NaiveDate, NaiveDate),
    numeric_column_names: Vec<String>,
    cache: Mutex<LookupCache>,
}

impl TimeSeriesTable {
    /// Create a table from already-parsed columns.
    ///
    /// The index carries one month-granularity timestamp per record;
    /// grouping columns, when present, must be cell-aligned with it. A
    /// locality column is only accepted alongside a region column.
    pub fn new(
        name: impl Into<String>,
        index: Vec<NaiveDate>,
        region: Option<Vec<String>>,
        locality: Option<Vec<String>>,
        numeric: Vec<FrameColumn>,
    ) -> Result<Self> {
        let name = name.into();

        if index.is_empty() {
            return Err(Error::dataset_format(&name, "dataset has no records"));
        }
        if numeric.is_empty() {
            return Err(Error::dataset_format(&name, "dataset has no numeric columns"));
        }
        if locality.is_some() && region.is_none() {
            return Err(Error::dataset_format(
                &name,
                "locality column requires a region column",
            ));
        }

        for (label, column) in [("region", &region), ("locality", &locality)] {
            if let Some(values) = column {
                if values.len() != index.len() {
                    return Err(Error::dataset_format(
                        &name,
                        format!(
                            "{} column has {} cells for {} records",
                            label,
                            values.len(),
                            index.len()
                        ),
                    ));
                }
            }
        }
        for column in &numeric {
            if column.values.len() != index.len() {
                return Err(Error::dataset_format(
                    &name,
                    format!(
                        "column '{}' has {} cells for {} records",
                        column.name,
                        column.values.len(),
                        index.len()
                    ),
                ));
            }
        }

        // Derived once here; immutable afterwards
        let mut min = index[0];
        let mut max = index[0];
        for date in &index {
            min = min.min(*date);
            max = max.max(*date);
        }
        let numeric_column_names = numeric.iter().map(|c| c.name.clone()).collect();
        let capabilities = Capabilities {
            has_region: region.is_some(),
            has_locality: locality.is_some(),
        };

        Ok(Self {
            name,
            index,
            region,
            locality,
            numeric,
            capabilities,
            time_range: (min, max),
            numeric_column_names,
            cache: Mutex::new(LookupCache::default()),
        })
    }

    /// Dataset name, typically the source file name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of records in the table
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// A constructed table always has records; provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Which grouping dimensions this table carries
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// The month timestamps, in record order
    pub fn index(&self) -> &[NaiveDate] {
        &self.index
    }

    /// Region cell per record, when the table has a region dimension
    pub fn region_values(&self) -> Option<&[String]> {
        self.region.as_deref()
    }

    /// Locality cell per record, when the table has a locality dimension
    pub fn locality_values(&self) -> Option<&[String]> {
        self.locality.as_deref()
    }

    /// All numeric columns, in file order
    pub fn numeric_columns_data(&self) -> &[FrameColumn] {
        &self.numeric
    }

    /// Look up a numeric column by name
    pub fn numeric_column(&self, name: &str) -> Option<&FrameColumn> {
        self.numeric.iter().find(|c| c.name == name)
    }
}
