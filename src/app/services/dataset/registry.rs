//! Dataset discovery and registry
//!
//! Discovers dataset files in a data directory and holds one immutable
//! [`TimeSeriesTable`] per file for the lifetime of the process. Tables
//! are keyed by file name and shared read-only between callers.

use super::TimeSeriesTable;
use crate::app::services::loader;
use crate::constants::DATASET_EXTENSION;
use crate::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Registry of loaded datasets, keyed by file name
#[derive(Debug)]
pub struct DatasetRegistry {
    tables: HashMap<String, Arc<TimeSeriesTable>>,
    data_dir: PathBuf,
}

impl DatasetRegistry {
    /// Discover and load every dataset file in the given directory.
    ///
    /// Only files carrying the dataset extension directly inside the
    /// directory are considered. Fails when the directory yields no
    /// datasets at all; a directory of unreadable files would otherwise
    /// masquerade as an empty application.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        let files = discover_dataset_files(data_dir)?;
        if files.is_empty() {
            return Err(Error::configuration(format!(
                "no .{} datasets found in '{}'",
                DATASET_EXTENSION,
                data_dir.display()
            )));
        }

        info!(
            "Loading {} dataset file(s) from '{}'",
            files.len(),
            data_dir.display()
        );

        let mut tables = HashMap::new();
        for file in files {
            let table = loader::load_table(&file)?;
            debug!(
                "Loaded dataset '{}': {} records, {} numeric columns",
                table.name(),
                table.len(),
                table.numeric_columns().len()
            );
            tables.insert(table.name().to_string(), Arc::new(table));
        }

        Ok(Self {
            tables,
            data_dir: data_dir.to_path_buf(),
        })
    }

    /// Directory the registry was loaded from
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Names of all loaded datasets, sorted
    pub fn dataset_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.keys().cloned().collect();
        names.sort();
        names
    }

    /// Look up a dataset by name
    pub fn get(&self, name: &str) -> Result<Arc<TimeSeriesTable>> {
        self.tables
            .get(name)
            .cloned()
            .ok_or_else(|| Error::dataset_not_found(name))
    }

    /// Number of loaded datasets
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the registry holds no datasets
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// List dataset files directly inside the data directory, sorted by name
fn discover_dataset_files(data_dir: &Path) -> Result<Vec<PathBuf>> {
    if !data_dir.exists() {
        return Err(Error::configuration(format!(
            "data directory '{}' does not exist",
            data_dir.display()
        )));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(data_dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file()
            && path
                .extension()
                .map(|ext| ext == DATASET_EXTENSION)
                .unwrap_or(false)
        {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}
