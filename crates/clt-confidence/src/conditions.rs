//! Validity conditions for the normal approximation
//!
//! Violations are caveats on the result, never errors. Each check logs a
//! warning and hands the numbers back so the caller can report them.

use clt_core::{ProportionSummary, SampleSummary};
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Minimum expected count of successes and of failures
pub const SUCCESS_FAILURE_THRESHOLD: f64 = 10.0;

/// Sample size above which the t interval is trusted without a normality check
pub const LARGE_SAMPLE_THRESHOLD: usize = 30;

/// Outcome of the success-failure condition `n·p̂ ≥ 10` and `n·(1−p̂) ≥ 10`
///
/// `n·p̂` and `n·(1−p̂)` are the observed success and failure counts, so both
/// are carried exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SuccessFailureCheck {
    /// `n·p̂`
    pub expected_successes: f64,
    /// `n·(1−p̂)`
    pub expected_failures: f64,
}

impl SuccessFailureCheck {
    pub fn is_satisfied(&self) -> bool {
        self.expected_successes >= SUCCESS_FAILURE_THRESHOLD
            && self.expected_failures >= SUCCESS_FAILURE_THRESHOLD
    }
}

/// A reason the normal approximation may be unreliable
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Caveat {
    /// Too few expected successes or failures
    SuccessFailure(SuccessFailureCheck),
    /// Fewer than [`LARGE_SAMPLE_THRESHOLD`] observations behind a mean
    SmallSample { n: usize },
}

impl fmt::Display for Caveat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SuccessFailure(check) => write!(
                f,
                "success-failure condition not met (n·p̂ = {:.1}, n·(1−p̂) = {:.1}, need ≥ {})",
                check.expected_successes, check.expected_failures, SUCCESS_FAILURE_THRESHOLD
            ),
            Self::SmallSample { n } => write!(
                f,
                "small sample (n = {n} < {LARGE_SAMPLE_THRESHOLD}); check the data for strong skew or outliers"
            ),
        }
    }
}

/// Evaluate the success-failure condition for an observed proportion
pub fn success_failure(summary: &ProportionSummary) -> SuccessFailureCheck {
    SuccessFailureCheck {
        expected_successes: summary.successes as f64,
        expected_failures: summary.failures() as f64,
    }
}

/// Caveats attached to a proportion interval
pub fn proportion_caveats(summary: &ProportionSummary) -> Vec<Caveat> {
    let check = success_failure(summary);
    if check.is_satisfied() {
        return Vec::new();
    }
    warn!(
        "Success-failure condition violated: n·p̂ = {:.1}, n·(1−p̂) = {:.1}",
        check.expected_successes, check.expected_failures
    );
    vec![Caveat::SuccessFailure(check)]
}

/// Caveats attached to a mean interval
pub fn mean_caveats(summary: &SampleSummary) -> Vec<Caveat> {
    if summary.n >= LARGE_SAMPLE_THRESHOLD {
        return Vec::new();
    }
    warn!("Small sample for t interval: n = {}", summary.n);
    vec![Caveat::SmallSample { n: summary.n }]
}
