//! Descriptive and regression statistics over numeric samples
//!
//! This module provides the statistical leaf types of the analysis engine:
//! - [`sample`] - A finite numeric sample with memoized mean and unbiased
//!   variance, plus pairwise covariance
//! - [`regression`] - Univariate regression lines (slope, intercept, fitted
//!   values, TSS/ESS, R²) and R²-based ranking of named lines
//!
//! All computations are pure functions of the input observations; the only
//! interior mutability is the per-sample memoization of mean and variance.

pub mod regression;
pub mod sample;

// Re-export main types for easy access
pub use regression::{rank_regression_lines, RankedLine, RegressionLine, RegressionRanking};
pub use sample::Sample;
