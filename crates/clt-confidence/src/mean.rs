//! t-based confidence interval for a population mean
//!
//! `x̄ ± t*·s/√n` with `t*` taken from Student's t with `n - 1` degrees of
//! freedom.

use crate::{critical::t_critical, z_critical, ConfidenceInterval};
use clt_core::{Error, Result, SampleSummary};
use tracing::debug;

/// Confidence interval for the mean of a complete sample
///
/// Fails with `InsufficientData` when fewer than two observations are
/// present, since the sample standard deviation is then undefined.
///
/// # Example
/// ```rust
/// use clt_confidence::mean_confidence_interval;
///
/// let hours = [3.0, 4.0, 2.5, 5.0, 3.5, 4.5];
/// let ci = mean_confidence_interval(&hours, 0.95).unwrap();
/// assert!(ci.contains(3.75));
/// ```
pub fn mean_confidence_interval(sample: &[f64], confidence_level: f64) -> Result<ConfidenceInterval> {
    let summary = SampleSummary::from_sample(sample)?;
    mean_interval_from_summary(&summary, confidence_level)
}

/// Confidence interval for the mean of a column with missing entries
pub fn mean_confidence_interval_observed<I>(
    observations: I,
    confidence_level: f64,
) -> Result<ConfidenceInterval>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let summary = SampleSummary::from_observations(observations)?;
    mean_interval_from_summary(&summary, confidence_level)
}

/// Confidence interval for the mean from reported summary statistics
pub fn mean_interval_from_summary(
    summary: &SampleSummary,
    confidence_level: f64,
) -> Result<ConfidenceInterval> {
    let t = t_critical(confidence_level, summary.degrees_of_freedom())?;
    let margin = t * summary.standard_error();
    debug!(
        "Mean interval: n={}, mean={:.4}, s={:.4}, t*={:.4}, margin={:.4}",
        summary.n, summary.mean, summary.std_dev, t, margin
    );
    Ok(ConfidenceInterval::symmetric(
        summary.mean,
        margin,
        confidence_level,
    ))
}

/// z-based interval for the mean when the population σ is known
pub fn mean_interval_known_sigma(
    summary: &SampleSummary,
    sigma: f64,
    confidence_level: f64,
) -> Result<ConfidenceInterval> {
    if !(sigma.is_finite() && sigma > 0.0) {
        return Err(Error::InvalidParameter(format!(
            "Population standard deviation {sigma} must be positive"
        )));
    }
    let z = z_critical(confidence_level)?;
    let margin = z * sigma / (summary.n as f64).sqrt();
    Ok(ConfidenceInterval::symmetric(
        summary.mean,
        margin,
        confidence_level,
    ))
}
