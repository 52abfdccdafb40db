//! Core estimator trait
//!
//! Interval methods in `clt-confidence` are generic over the estimator that
//! produces the point estimate, so the same asymptotic machinery serves the
//! mean and the proportion.

use crate::Result;

/// A statistic computed from a single sample
pub trait Estimator {
    /// Estimate the statistic from the given sample
    fn estimate(&self, sample: &[f64]) -> Result<f64>;

    /// Human-readable name of the estimator
    fn name(&self) -> &str;
}

impl<E: Estimator + ?Sized> Estimator for &E {
    fn estimate(&self, sample: &[f64]) -> Result<f64> {
        (**self).estimate(sample)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
