//! Core trait for confidence interval estimation
//!
//! The estimator producing the point estimate is passed as a parameter
//! rather than stored, so one interval method can serve several statistics.

use crate::types::ConfidenceInterval;
use clt_core::{Estimator, Result};

/// Parameterized confidence interval estimator trait
pub trait ConfidenceIntervalEstimator<E>
where
    E: Estimator,
{
    /// Calculate confidence interval for the given sample
    ///
    /// # Arguments
    /// * `sample` - Data sample
    /// * `estimator` - The estimator to use for the underlying property
    fn confidence_interval(&self, sample: &[f64], estimator: &E) -> Result<ConfidenceInterval>;

    /// Get the confidence level
    fn confidence_level(&self) -> f64;
}
