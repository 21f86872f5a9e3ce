//! Integration tests for the full dataset flow
//!
//! Writes real CSV files to a temporary data directory, loads them
//! through the registry and drives the filter pipeline and regression
//! ranking end to end, the way the CLI layer does.

use climate_trends::app::services::filter_pipeline::{compute_regression, filter};
use climate_trends::app::services::statistics::rank_regression_lines;
use climate_trends::cli::args::CompareArgs;
use climate_trends::cli::commands::compare;
use climate_trends::config::AnalysisOptions;
use climate_trends::{DatasetRegistry, Error, FilterCriteria, YearRange};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write a full-variant dataset: two regions, one locality each,
/// monthly Jan-2000..Dec-2009, with a hole at Jun-2004 in Northland
fn write_regional_dataset(dir: &Path) {
    let mut body = String::from("Time,Temp,Locality,Region\n");
    for (region, locality, offset, wobble) in [
        ("Northland", "Aber", 0.0, 0.0),
        ("Southland", "Cand", 5.0, 3.0),
    ] {
        for year in 2000..=2009 {
            for month in 1..=12 {
                if region == "Northland" && year == 2004 && month == 6 {
                    continue;
                }
                let elapsed = ((year - 2000) * 12 + month - 1) as f64;
                let noise = if wobble > 0.0 && month % 2 == 0 {
                    wobble
                } else {
                    0.0
                };
                writeln!(
                    body,
                    "{:04}-{:02}-01,{},{},{}",
                    year,
                    month,
                    offset + elapsed * 0.1 + noise,
                    locality,
                    region
                )
                .unwrap();
            }
        }
    }
    fs::write(dir.join("regional.csv"), body).unwrap();
}

/// Write a region-less dataset: one global series, two years monthly
fn write_global_dataset(dir: &Path) {
    let mut body = String::from("dt,LandAverageTemperature\n");
    for year in 1990..=1991 {
        for month in 1..=12 {
            writeln!(body, "{:04}-{:02}-01,{}", year, month, 10.0 + month as f64).unwrap();
        }
    }
    fs::write(dir.join("global.csv"), body).unwrap();
}

fn load_registry(dir: &TempDir) -> DatasetRegistry {
    write_regional_dataset(dir.path());
    write_global_dataset(dir.path());
    DatasetRegistry::load_from_dir(dir.path()).unwrap()
}

fn regional_criteria(region: &str, years: YearRange) -> FilterCriteria {
    FilterCriteria {
        month_name: String::new(),
        month_filter_enabled: false,
        locality: "".to_string(),
        region: region.to_string(),
        year_range: years,
        active_columns: vec!["Temp".to_string()],
    }
}

#[test]
fn test_registry_discovers_both_variants() {
    let dir = TempDir::new().unwrap();
    let registry = load_registry(&dir);

    assert_eq!(
        registry.dataset_names(),
        vec!["global.csv".to_string(), "regional.csv".to_string()]
    );

    let regional = registry.get("regional.csv").unwrap();
    assert!(regional.capabilities().has_region);
    assert!(regional.capabilities().has_locality);
    assert_eq!(
        regional.region_list(),
        Some(vec!["Northland".to_string(), "Southland".to_string()])
    );
    assert_eq!(
        regional.localities_in_region("Northland"),
        Some(vec!["Aber".to_string()])
    );
    assert_eq!(regional.region_of_locality("Cand"), Some("Southland".to_string()));

    let global = registry.get("global.csv").unwrap();
    assert!(!global.capabilities().has_region);
    assert_eq!(global.region_list(), None);
    assert_eq!(global.time_range_years(), YearRange::new(1990, 1991));
}

#[test]
fn test_filtered_series_is_complete_and_dense() {
    let dir = TempDir::new().unwrap();
    let registry = load_registry(&dir);
    let table = registry.get("regional.csv").unwrap();

    let mut criteria = regional_criteria("Northland", YearRange::new(2003, 2005));
    criteria.locality = "Aber".to_string();

    let frame = filter(&table, &criteria).unwrap();
    assert_eq!(frame.len(), 36);
    assert!(frame.is_dense());

    // the missing Jun-2004 record came back interpolated
    let june = chrono::NaiveDate::from_ymd_opt(2004, 6, 1).unwrap();
    assert!(frame.index().contains(&june));
}

#[test]
fn test_default_options_drive_the_pipeline() {
    let dir = TempDir::new().unwrap();
    let registry = load_registry(&dir);
    let table = registry.get("global.csv").unwrap();

    let mut options = AnalysisOptions::for_table(&table);
    options.month_filter_enabled = false;

    let frame = filter(&table, &options.criteria()).unwrap();
    assert_eq!(frame.len(), 24);
    assert_eq!(frame.column_names(), vec!["LandAverageTemperature"]);
}

#[test]
fn test_regional_regression_ranking() {
    let dir = TempDir::new().unwrap();
    let registry = load_registry(&dir);
    let table = registry.get("regional.csv").unwrap();

    let mut lines = Vec::new();
    for region in ["Northland", "Southland"] {
        let mut criteria = regional_criteria(region, YearRange::new(2000, 2009));
        criteria.locality = if region == "Northland" { "Aber" } else { "Cand" }.to_string();
        let frame = filter(&table, &criteria).unwrap();
        lines.push(compute_regression(&frame, region).unwrap());
    }

    let ranking = rank_regression_lines(&lines).unwrap();
    // Northland is a clean trend, Southland wobbles around it
    assert_eq!(ranking.entries()[0].name, "Northland");
    assert_eq!(ranking.worst().name, "Southland");
}

#[test]
fn test_compare_requires_two_regions() {
    let dir = TempDir::new().unwrap();
    let registry = load_registry(&dir);

    let args = CompareArgs {
        dataset: "regional.csv".to_string(),
        regions: vec!["Northland".to_string()],
        column: None,
        month: None,
        start_year: None,
        end_year: None,
    };

    let error = compare::run(&registry, &args).unwrap_err();
    assert!(matches!(error, Error::Validation { .. }));
}

#[test]
fn test_compare_rejects_single_record_series() {
    // a region whose whole series is one record has no trend to rank
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("sparse.csv"),
        "Time,Temp,Region\n2000-06-01,1.0,A\n2000-06-01,2.0,B\n",
    )
    .unwrap();
    let registry = DatasetRegistry::load_from_dir(dir.path()).unwrap();

    let args = CompareArgs {
        dataset: "sparse.csv".to_string(),
        regions: vec!["A".to_string(), "B".to_string()],
        column: None,
        month: None,
        start_year: None,
        end_year: None,
    };

    let error = compare::run(&registry, &args).unwrap_err();
    assert!(matches!(error, Error::Validation { .. }));
}

#[test]
fn test_unknown_region_is_a_recoverable_validation_error() {
    let dir = TempDir::new().unwrap();
    let registry = load_registry(&dir);
    let table = registry.get("regional.csv").unwrap();

    let mut criteria = regional_criteria("Atlantis", YearRange::new(2000, 2009));
    criteria.locality = "Aber".to_string();

    let error = filter(&table, &criteria).unwrap_err();
    assert!(matches!(error, Error::Validation { .. }));
    assert!(error.is_recoverable());
}
