//! Univariate regression lines and R²-based ranking
//!
//! A regression line is computed eagerly at construction from two
//! equal-sized samples (independent X, dependent Y) and is immutable
//! afterwards. A collection of named lines can be ranked by coefficient
//! of determination to compare how well a linear trend explains each
//! series.

use super::sample::Sample;
use crate::{Error, Result};

/// A fitted univariate regression line `ŷ = intercept + slope·x`.
///
/// Construction fails when the samples differ in size, hold fewer than two
/// observations, X has zero variance (slope undefined) or Y is constant
/// (TSS = 0, so R² is undefined and the line is not comparable).
#[derive(Debug, Clone)]
pub struct RegressionLine {
    name: String,
    sample_x: Sample,
    sample_y: Sample,
    slope: f64,
    intercept: f64,
    fitted_values: Vec<f64>,
    tss: f64,
    ess: f64,
    coefficient_of_determination: f64,
}

impl RegressionLine {
    /// Fit a regression line of `sample_y` against `sample_x`
    pub fn new(name: impl Into<String>, sample_x: Sample, sample_y: Sample) -> Result<Self> {
        let name = name.into();

        if sample_x.len() != sample_y.len() {
            return Err(Error::validation(
                "samples",
                format!(
                    "regression samples must be equal size ({} != {})",
                    sample_x.len(),
                    sample_y.len()
                ),
            ));
        }
        if sample_x.len() < 2 {
            return Err(Error::domain(format!(
                "regression requires at least 2 observations, got {}",
                sample_x.len()
            )));
        }

        let variance_x = sample_x.unbiased_variance()?;
        if variance_x == 0.0 {
            return Err(Error::domain(format!(
                "slope of '{}' is undefined: independent sample has zero variance",
                name
            )));
        }

        let covariance = Sample::covariance(&sample_x, &sample_y)?;
        let slope = covariance / variance_x;
        let intercept = sample_y.mean() - slope * sample_x.mean();

        let fitted_values: Vec<f64> = sample_x
            .observations()
            .iter()
            .map(|x| intercept + slope * x)
            .collect();

        let mean_y = sample_y.mean();
        let tss: f64 = sample_y
            .observations()
            .iter()
            .map(|y| (y - mean_y).powi(2))
            .sum();
        if tss == 0.0 {
            return Err(Error::domain(format!(
                "R² of '{}' is undefined: dependent sample is constant (TSS = 0)",
                name
            )));
        }

        let ess: f64 = fitted_values.iter().map(|y| (y - mean_y).powi(2)).sum();

        Ok(Self {
            name,
            sample_x,
            sample_y,
            slope,
            intercept,
            fitted_values,
            tss,
            ess,
            coefficient_of_determination: ess / tss,
        })
    }

    /// Name identifying this line (typically the region it was fitted for)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of observation pairs the line was fitted on
    pub fn len(&self) -> usize {
        self.sample_x.len()
    }

    /// A fitted line always has at least two points
    pub fn is_empty(&self) -> bool {
        self.sample_x.is_empty()
    }

    /// Independent sample the line was fitted on
    pub fn sample_x(&self) -> &Sample {
        &self.sample_x
    }

    /// Dependent sample the line was fitted on
    pub fn sample_y(&self) -> &Sample {
        &self.sample_y
    }

    /// Slope of the fitted line
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Intercept of the fitted line
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Fitted value `intercept + slope·xᵢ` for every input x
    pub fn fitted_values(&self) -> &[f64] {
        &self.fitted_values
    }

    /// Total Sum of Squares `Σ(yᵢ − ȳ)²`
    pub fn tss(&self) -> f64 {
        self.tss
    }

    /// Explained Sum of Squares `Σ(ŷᵢ − ȳ)²`
    pub fn ess(&self) -> f64 {
        self.ess
    }

    /// Coefficient of determination `R² = ESS / TSS`
    pub fn coefficient_of_determination(&self) -> f64 {
        self.coefficient_of_determination
    }
}

// =============================================================================
// Ranking
// =============================================================================

/// One entry of a regression-line ranking
#[derive(Debug, Clone, PartialEq)]
pub struct RankedLine {
    /// 1-based rank, best fit first
    pub rank: usize,
    /// Name of the ranked line
    pub name: String,
    /// Coefficient of determination the rank is based on
    pub r_squared: f64,
}

/// Ordered ranking of named regression lines, best fit first
#[derive(Debug, Clone)]
pub struct RegressionRanking {
    entries: Vec<RankedLine>,
}

impl RegressionRanking {
    /// Ranked entries, best fit first
    pub fn entries(&self) -> &[RankedLine] {
        &self.entries
    }

    /// The line with the lowest R², flagged as the worst fit
    pub fn worst(&self) -> &RankedLine {
        // ranking is only constructed with >= 2 entries
        &self.entries[self.entries.len() - 1]
    }

    /// Multi-line human-readable ranking report
    pub fn summary(&self) -> String {
        let mut lines: Vec<String> = self
            .entries
            .iter()
            .map(|entry| {
                format!(
                    "{}° {:<25} R²: {:.6}",
                    entry.rank,
                    entry.name.to_uppercase(),
                    entry.r_squared
                )
            })
            .collect();
        lines.push(format!(
            "\n{} has the worst regression line",
            self.worst().name.to_uppercase()
        ));
        lines.join("\n")
    }
}

/// Rank regression lines by descending coefficient of determination.
///
/// The sort is stable and descending: lines with equal R² keep their
/// original relative order. Ranking needs at least two lines to be a
/// comparison at all.
pub fn rank_regression_lines(lines: &[RegressionLine]) -> Result<RegressionRanking> {
    if lines.len() < 2 {
        return Err(Error::domain(format!(
            "ranking requires at least 2 regression lines, got {}",
            lines.len()
        )));
    }

    let mut ordered: Vec<&RegressionLine> = lines.iter().collect();
    ordered.sort_by(|a, b| {
        b.coefficient_of_determination()
            .total_cmp(&a.coefficient_of_determination())
    });

    let entries = ordered
        .iter()
        .enumerate()
        .map(|(position, line)| RankedLine {
            rank: position + 1,
            name: line.name().to_string(),
            r_squared: line.coefficient_of_determination(),
        })
        .collect();

    Ok(RegressionRanking { entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, xs: Vec<f64>, ys: Vec<f64>) -> RegressionLine {
        RegressionLine::new(
            name,
            Sample::new(xs).unwrap(),
            Sample::new(ys).unwrap(),
        )
        .unwrap()
    }

    /// Build a line with a known R² by mixing a perfect trend with one
    /// off-trend point of controlled magnitude.
    fn line_with_noise(name: &str, noise: f64) -> RegressionLine {
        let xs = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = vec![1.0, 2.0, 3.0 + noise, 4.0, 5.0];
        RegressionLine::new(
            name,
            Sample::new(xs).unwrap(),
            Sample::new(ys).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_perfect_fit() {
        let fitted = line("perfect", vec![1.0, 2.0, 3.0, 4.0], vec![3.0, 5.0, 7.0, 9.0]);

        // y = 2x + 1 exactly
        assert!((fitted.slope() - 2.0).abs() < 1e-12);
        assert!((fitted.intercept() - 1.0).abs() < 1e-12);
        assert!((fitted.coefficient_of_determination() - 1.0).abs() < 1e-12);
        assert_eq!(fitted.fitted_values(), &[3.0, 5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_r_squared_stays_in_unit_interval() {
        for noise in [0.1, 0.5, 2.0, 10.0] {
            let fitted = line_with_noise("noisy", noise);
            let r2 = fitted.coefficient_of_determination();
            assert!((0.0..=1.0).contains(&r2), "R² {} out of range", r2);
            assert!(r2 < 1.0);
        }
    }

    #[test]
    fn test_zero_variance_x_rejected() {
        let x = Sample::new(vec![2.0, 2.0, 2.0]).unwrap();
        let y = Sample::new(vec![1.0, 2.0, 3.0]).unwrap();
        assert!(RegressionLine::new("flat-x", x, y).is_err());
    }

    #[test]
    fn test_constant_y_rejected() {
        let x = Sample::new(vec![1.0, 2.0, 3.0]).unwrap();
        let y = Sample::new(vec![5.0, 5.0, 5.0]).unwrap();
        assert!(RegressionLine::new("flat-y", x, y).is_err());
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let x = Sample::new(vec![1.0, 2.0, 3.0]).unwrap();
        let y = Sample::new(vec![1.0, 2.0]).unwrap();
        assert!(RegressionLine::new("mismatch", x, y).is_err());
    }

    #[test]
    fn test_single_point_rejected() {
        let x = Sample::new(vec![1.0]).unwrap();
        let y = Sample::new(vec![2.0]).unwrap();
        assert!(RegressionLine::new("point", x, y).is_err());
    }

    #[test]
    fn test_ranking_orders_by_r_squared() {
        // noise magnitudes chosen so R²(A) > R²(C) > R²(B)
        let lines = vec![
            line_with_noise("A", 0.1),
            line_with_noise("B", 3.0),
            line_with_noise("C", 1.0),
        ];

        let ranking = rank_regression_lines(&lines).unwrap();
        let names: Vec<&str> = ranking.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "B"]);
        assert_eq!(ranking.entries()[0].rank, 1);
        assert_eq!(ranking.entries()[2].rank, 3);
        assert_eq!(ranking.worst().name, "B");
    }

    #[test]
    fn test_ranking_ties_keep_insertion_order() {
        let lines = vec![
            line_with_noise("first", 0.5),
            line_with_noise("second", 0.5),
        ];

        let ranking = rank_regression_lines(&lines).unwrap();
        assert_eq!(ranking.entries()[0].name, "first");
        assert_eq!(ranking.entries()[1].name, "second");
    }

    #[test]
    fn test_ranking_requires_two_lines() {
        let lines = vec![line_with_noise("solo", 0.5)];
        assert!(rank_regression_lines(&lines).is_err());
    }
}
