//! Normal-approximation confidence interval for a population proportion

use crate::{z_critical, ConfidenceInterval};
use clt_core::{ProportionSummary, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Construction used for a proportion interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProportionMethod {
    /// `p̂ ± z*·√(p̂(1−p̂)/n)`
    #[default]
    Wald,
    /// Wilson score interval
    Wilson,
    /// Wilson score interval with Yates' continuity correction, as reported
    /// by R's `prop.test` with its default `correct = TRUE`
    WilsonCorrected,
}

impl ProportionMethod {
    /// Get the name of this method
    pub fn name(&self) -> &'static str {
        match self {
            Self::Wald => "wald",
            Self::Wilson => "wilson",
            Self::WilsonCorrected => "wilson_corrected",
        }
    }
}

/// Wald confidence interval for a proportion from raw counts
///
/// The success-failure condition is not checked here; see
/// [`crate::conditions::success_failure`]. Bounds are not clamped to
/// `[0, 1]`.
///
/// # Example
/// ```rust
/// use clt_confidence::proportion_confidence_interval;
///
/// let ci = proportion_confidence_interval(470, 1000, 0.90).unwrap();
/// assert!(ci.contains(0.47));
/// ```
pub fn proportion_confidence_interval(
    successes: usize,
    n: usize,
    confidence_level: f64,
) -> Result<ConfidenceInterval> {
    let summary = ProportionSummary::new(successes, n)?;
    proportion_interval(&summary, confidence_level, ProportionMethod::Wald)
}

/// Confidence interval for a proportion using the requested construction
pub fn proportion_interval(
    summary: &ProportionSummary,
    confidence_level: f64,
    method: ProportionMethod,
) -> Result<ConfidenceInterval> {
    let z = z_critical(confidence_level)?;
    let p = summary.p_hat();
    let n = summary.n as f64;

    let ci = match method {
        ProportionMethod::Wald => {
            ConfidenceInterval::symmetric(p, z * summary.standard_error(), confidence_level)
        }
        ProportionMethod::Wilson => score_interval(summary, z, 0.0, confidence_level),
        ProportionMethod::WilsonCorrected => {
            // The correction shrinks when the count is within half a unit of n/2
            let correction = 0.5f64.min((summary.successes as f64 - n / 2.0).abs());
            score_interval(summary, z, correction, confidence_level)
        }
    };

    debug!(
        "Proportion interval ({}): successes={}, n={}, p_hat={:.4}, z*={:.4}, [{:.4}, {:.4}]",
        method.name(),
        summary.successes,
        summary.n,
        p,
        z,
        ci.lower,
        ci.upper
    );
    Ok(ci)
}

// Score interval with the observed proportion shifted by `correction / n`
// toward each bound. Bounds are held at 0 and 1 once the shift crosses them.
fn score_interval(
    summary: &ProportionSummary,
    z: f64,
    correction: f64,
    confidence_level: f64,
) -> ConfidenceInterval {
    let p = summary.p_hat();
    let n = summary.n as f64;
    let z22n = z * z / (2.0 * n);
    let denominator = 1.0 + 2.0 * z22n;
    let spread = |q: f64| z * (q * (1.0 - q) / n + z22n / (2.0 * n)).sqrt();

    let shifted_up = p + correction / n;
    let upper = if shifted_up >= 1.0 {
        1.0
    } else {
        (shifted_up + z22n + spread(shifted_up)) / denominator
    };
    let shifted_down = p - correction / n;
    let lower = if shifted_down <= 0.0 {
        0.0
    } else {
        (shifted_down + z22n - spread(shifted_down)) / denominator
    };

    ConfidenceInterval::new(lower, upper, p, confidence_level)
}
