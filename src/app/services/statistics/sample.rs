//! Simple random sample with memoized descriptive statistics

use crate::{Error, Result};
use std::sync::OnceLock;

/// A finite ordered sample of real-valued observations.
///
/// The sample mean and the unbiased sample variance are computed on first
/// request and memoized for the lifetime of the sample. A sample is
/// immutable after construction, so memoized values never invalidate.
#[derive(Debug, Clone)]
pub struct Sample {
    observations: Vec<f64>,
    mean: OnceLock<f64>,
    unbiased_variance: OnceLock<f64>,
}

impl Sample {
    /// Create a sample from a non-empty sequence of observations
    pub fn new(observations: Vec<f64>) -> Result<Self> {
        if observations.is_empty() {
            return Err(Error::domain("sample must contain at least one observation"));
        }
        Ok(Self {
            observations,
            mean: OnceLock::new(),
            unbiased_variance: OnceLock::new(),
        })
    }

    /// Number of observations in the sample
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// A sample is never empty; provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The raw observations, in input order
    pub fn observations(&self) -> &[f64] {
        &self.observations
    }

    /// Sample mean, memoized on first call
    pub fn mean(&self) -> f64 {
        *self.mean.get_or_init(|| {
            let sum: f64 = self.observations.iter().sum();
            sum / self.observations.len() as f64
        })
    }

    /// Unbiased sample variance `Σ(xᵢ − x̄)² / (n − 1)`, memoized.
    ///
    /// Requires at least two observations; the n − 1 denominator is
    /// undefined otherwise.
    pub fn unbiased_variance(&self) -> Result<f64> {
        if self.observations.len() < 2 {
            return Err(Error::domain(format!(
                "unbiased variance requires at least 2 observations, sample has {}",
                self.observations.len()
            )));
        }

        let mean = self.mean();
        Ok(*self.unbiased_variance.get_or_init(|| {
            let sum_of_squares: f64 = self
                .observations
                .iter()
                .map(|value| (value - mean).powi(2))
                .sum();
            sum_of_squares / (self.observations.len() - 1) as f64
        }))
    }

    /// Pairwise sample covariance `Σ(xᵢ − x̄)(yᵢ − ȳ) / (n − 1)` of two
    /// equal-sized samples
    pub fn covariance(sample_x: &Sample, sample_y: &Sample) -> Result<f64> {
        if sample_x.len() != sample_y.len() {
            return Err(Error::validation(
                "samples",
                format!(
                    "covariance requires equal sizes ({} != {})",
                    sample_x.len(),
                    sample_y.len()
                ),
            ));
        }
        if sample_x.len() < 2 {
            return Err(Error::domain(
                "covariance requires at least 2 observations per sample",
            ));
        }

        let mean_x = sample_x.mean();
        let mean_y = sample_y.mean();

        let cross_sum: f64 = sample_x
            .observations
            .iter()
            .zip(&sample_y.observations)
            .map(|(x, y)| (x - mean_x) * (y - mean_y))
            .sum();

        Ok(cross_sum / (sample_x.len() - 1) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample_rejected() {
        assert!(Sample::new(Vec::new()).is_err());
    }

    #[test]
    fn test_mean() {
        let sample = Sample::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((sample.mean() - 2.5).abs() < 1e-12);
        // memoized value stays stable across calls
        assert!((sample.mean() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_unbiased_variance() {
        let sample = Sample::new(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        // population variance of this classic sample is 4.0; the unbiased
        // estimator divides by n - 1 instead
        let expected = 32.0 / 7.0;
        assert!((sample.unbiased_variance().unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_variance_requires_two_observations() {
        let sample = Sample::new(vec![1.0]).unwrap();
        assert!(sample.unbiased_variance().is_err());
    }

    #[test]
    fn test_covariance() {
        let x = Sample::new(vec![1.0, 2.0, 3.0]).unwrap();
        let y = Sample::new(vec![2.0, 4.0, 6.0]).unwrap();
        // cov(X, 2X) = 2 * var(X) = 2.0
        assert!((Sample::covariance(&x, &y).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_covariance_rejects_size_mismatch() {
        let x = Sample::new(vec![1.0, 2.0, 3.0]).unwrap();
        let y = Sample::new(vec![1.0, 2.0]).unwrap();
        assert!(Sample::covariance(&x, &y).is_err());
    }
}
