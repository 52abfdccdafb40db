//! Asymptotic confidence intervals based on theoretical distributions
//!
//! This is the estimator-driven path: any [`StandardErrorEstimator`] can be
//! paired with a normal or t reference distribution. For the mean and the
//! proportion it reproduces the direct formulas in [`crate::mean`] and
//! [`crate::proportion`].

use crate::{ConfidenceInterval, ConfidenceIntervalEstimator, ReferenceDistribution};
use clt_core::{Error, Estimator, Result, SampleSummary};

/// Asymptotic confidence interval estimator
///
/// This estimator uses theoretical asymptotic distributions to construct
/// confidence intervals. It assumes the estimator is asymptotically normal
/// with a known or estimable standard error.
#[derive(Debug, Clone)]
pub struct AsymptoticCI {
    /// Confidence level
    confidence_level: f64,
    /// Whether to use t-distribution (true) or normal (false)
    use_t_distribution: bool,
}

impl AsymptoticCI {
    /// Create a new asymptotic CI estimator using normal distribution
    ///
    /// # Panics
    /// Panics if the confidence level is not in (0, 1)
    pub fn normal(confidence_level: f64) -> Self {
        assert!(
            confidence_level > 0.0 && confidence_level < 1.0,
            "Confidence level must be in (0, 1)"
        );

        Self {
            confidence_level,
            use_t_distribution: false,
        }
    }

    /// Create a new asymptotic CI estimator using t-distribution
    ///
    /// # Panics
    /// Panics if the confidence level is not in (0, 1)
    pub fn students_t(confidence_level: f64) -> Self {
        assert!(
            confidence_level > 0.0 && confidence_level < 1.0,
            "Confidence level must be in (0, 1)"
        );

        Self {
            confidence_level,
            use_t_distribution: true,
        }
    }

    fn reference(&self, n: usize) -> Result<ReferenceDistribution> {
        if !self.use_t_distribution {
            return Ok(ReferenceDistribution::Normal);
        }
        // t-distribution with n-1 degrees of freedom
        if n < 2 {
            return Err(Error::InvalidInput(
                "Not enough data for t-distribution".to_string(),
            ));
        }
        Ok(ReferenceDistribution::StudentsT {
            df: (n - 1) as f64,
        })
    }
}

/// Trait for estimators that can provide their standard error
pub trait StandardErrorEstimator: Estimator {
    /// Calculate the standard error of the estimate
    fn standard_error(&self, sample: &[f64]) -> Result<f64>;
}

impl<E> ConfidenceIntervalEstimator<E> for AsymptoticCI
where
    E: StandardErrorEstimator,
{
    fn confidence_interval(&self, sample: &[f64], estimator: &E) -> Result<ConfidenceInterval> {
        let estimate = estimator.estimate(sample)?;
        let std_error = estimator.standard_error(sample)?;

        // A zero standard error gives a degenerate interval
        if !(std_error.is_finite() && std_error >= 0.0) {
            return Err(Error::Computation(format!(
                "Standard error {std_error} of {} is not a non-negative number",
                estimator.name()
            )));
        }

        let critical_value = self
            .reference(sample.len())?
            .critical_value(self.confidence_level)?;

        Ok(ConfidenceInterval::symmetric(
            estimate,
            critical_value * std_error,
            self.confidence_level,
        ))
    }

    fn confidence_level(&self) -> f64 {
        self.confidence_level
    }
}

/// Sample mean with the `s / √n` standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanWithSE;

impl Estimator for MeanWithSE {
    fn estimate(&self, sample: &[f64]) -> Result<f64> {
        if sample.is_empty() {
            return Err(Error::empty_input());
        }
        Ok(sample.iter().sum::<f64>() / sample.len() as f64)
    }

    fn name(&self) -> &str {
        "mean"
    }
}

impl StandardErrorEstimator for MeanWithSE {
    fn standard_error(&self, sample: &[f64]) -> Result<f64> {
        Ok(SampleSummary::from_sample(sample)?.standard_error())
    }
}

/// Sample proportion over a 0/1 indicator sample
#[derive(Debug, Clone, Copy, Default)]
pub struct ProportionWithSE;

impl ProportionWithSE {
    fn validate(sample: &[f64]) -> Result<()> {
        if sample.is_empty() {
            return Err(Error::empty_input());
        }
        if let Some(bad) = sample.iter().find(|&&x| x != 0.0 && x != 1.0) {
            return Err(Error::InvalidInput(format!(
                "Indicator sample must contain only 0 and 1, found {bad}"
            )));
        }
        Ok(())
    }
}

impl Estimator for ProportionWithSE {
    fn estimate(&self, sample: &[f64]) -> Result<f64> {
        Self::validate(sample)?;
        Ok(sample.iter().sum::<f64>() / sample.len() as f64)
    }

    fn name(&self) -> &str {
        "proportion"
    }
}

impl StandardErrorEstimator for ProportionWithSE {
    fn standard_error(&self, sample: &[f64]) -> Result<f64> {
        let p = self.estimate(sample)?;
        Ok((p * (1.0 - p) / sample.len() as f64).sqrt())
    }
}
