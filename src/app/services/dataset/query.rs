//! Schema introspection and memoized region/locality lookups
//!
//! Query methods branch on the table's capability flags: a query against a
//! dimension the variant lacks returns `None`, never an error. Lookup
//! results are cached per key on first access; concurrent first accesses
//! may duplicate the computation but the cache stays consistent because
//! recomputation is idempotent over an immutable table.

use super::TimeSeriesTable;
use crate::app::models::YearRange;
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;
use std::sync::PoisonError;

/// Collect unique values preserving first-appearance order
fn unique_in_order(values: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut output = Vec::new();
    for value in values {
        if seen.insert(value.as_str()) {
            output.push(value.clone());
        }
    }
    output
}

impl TimeSeriesTable {
    /// Names of the numeric columns, in file order
    pub fn numeric_columns(&self) -> &[String] {
        &self.numeric_column_names
    }

    /// Inclusive time span of the table, derived at load time
    pub fn time_range(&self) -> (NaiveDate, NaiveDate) {
        self.time_range
    }

    /// Inclusive `[minYear, maxYear]` span of the table
    pub fn time_range_years(&self) -> YearRange {
        YearRange::new(self.time_range.0.year(), self.time_range.1.year())
    }

    /// All regions in the table, in first-appearance order.
    ///
    /// Returns `None` when the table has no region dimension.
    pub fn region_list(&self) -> Option<Vec<String>> {
        let regions = self.region_values()?;

        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if cache.region_list.is_none() {
            cache.region_list = Some(unique_in_order(regions));
        }
        cache.region_list.clone()
    }

    /// All localities in the table, in first-appearance order.
    ///
    /// Returns `None` when the table has no locality dimension.
    pub fn locality_list(&self) -> Option<Vec<String>> {
        let localities = self.locality_values()?;

        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if cache.locality_list.is_none() {
            cache.locality_list = Some(unique_in_order(localities));
        }
        cache.locality_list.clone()
    }

    /// Localities belonging to the given region, in first-appearance order.
    ///
    /// Returns `None` when the table has no locality dimension, or when
    /// the region is empty or unknown.
    pub fn localities_in_region(&self, region: &str) -> Option<Vec<String>> {
        if region.is_empty() || !self.region_list()?.iter().any(|r| r == region) {
            return None;
        }
        let localities = self.locality_values()?;
        let regions = self.region_values()?;

        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = cache.localities_by_region.get(region) {
            return Some(cached.clone());
        }

        let matching: Vec<String> = {
            let mut seen = HashSet::new();
            let mut output = Vec::new();
            for (row, row_region) in regions.iter().enumerate() {
                if row_region == region && seen.insert(localities[row].as_str()) {
                    output.push(localities[row].clone());
                }
            }
            output
        };

        cache
            .localities_by_region
            .insert(region.to_string(), matching.clone());
        Some(matching)
    }

    /// The region a given locality belongs to.
    ///
    /// Returns `None` when the table has no locality dimension, or when
    /// the locality is empty or unknown.
    pub fn region_of_locality(&self, locality: &str) -> Option<String> {
        if locality.is_empty() || !self.locality_list()?.iter().any(|l| l == locality) {
            return None;
        }
        let localities = self.locality_values()?;
        let regions = self.region_values()?;

        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = cache.region_by_locality.get(locality) {
            return Some(cached.clone());
        }

        let region = localities
            .iter()
            .position(|l| l == locality)
            .map(|row| regions[row].clone())?;

        cache
            .region_by_locality
            .insert(locality.to_string(), region.clone());
        Some(region)
    }
}
