//! CLT-based confidence interval estimation
//!
//! This crate provides the two large-sample intervals taught alongside the
//! Central Limit Theorem:
//!
//! - **Mean**: `x̄ ± t*·s/√n` with `t*` from Student's t with `n − 1` degrees
//!   of freedom
//! - **Proportion**: `p̂ ± z*·√(p̂(1−p̂)/n)` with `z*` from the standard normal
//!
//! plus the supporting pieces: critical values, the success-failure and
//! sample size caveats, an estimator-driven asymptotic path, sample size
//! planning and a coverage simulation.
//!
//! # Examples
//!
//! ## Mean from reported summary statistics
//!
//! ```rust
//! use clt_confidence::mean_interval_from_summary;
//! use clt_core::SampleSummary;
//!
//! let summary = SampleSummary::new(1154, 3.68, 2.6).unwrap();
//! let ci = mean_interval_from_summary(&summary, 0.95).unwrap();
//! println!("95% CI for mean hours: [{:.2}, {:.2}]", ci.lower, ci.upper);
//! ```
//!
//! ## Proportion from counts
//!
//! ```rust
//! use clt_confidence::{conditions, proportion_confidence_interval};
//! use clt_core::ProportionSummary;
//!
//! let ci = proportion_confidence_interval(470, 1000, 0.90).unwrap();
//! let check = conditions::success_failure(&ProportionSummary::new(470, 1000).unwrap());
//! assert!(check.is_satisfied());
//! println!("{ci}");
//! ```

mod asymptotic;
pub mod conditions;
mod coverage;
mod critical;
mod mean;
pub mod planning;
mod proportion;
mod traits;
mod types;

// Re-exports
pub use asymptotic::{AsymptoticCI, MeanWithSE, ProportionWithSE, StandardErrorEstimator};
pub use conditions::{Caveat, SuccessFailureCheck};
pub use coverage::{CoverageResult, CoverageSimulation, Population};
pub use critical::{t_critical, z_critical, ReferenceDistribution};
pub use mean::{
    mean_confidence_interval, mean_confidence_interval_observed, mean_interval_from_summary,
    mean_interval_known_sigma,
};
pub use planning::{required_sample_size_mean, required_sample_size_proportion};
pub use proportion::{proportion_confidence_interval, proportion_interval, ProportionMethod};
pub use traits::ConfidenceIntervalEstimator;
pub use types::{ConfidenceInterval, ConfidenceLevel};
