//! Critical values of the reference distributions
//!
//! `z*` comes from the standard normal and `t*` from Student's t with the
//! given degrees of freedom. Both are two-sided: the quantile at
//! `1 - alpha / 2`.

use crate::ConfidenceLevel;
use clt_core::{Error, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};
use tracing::debug;

/// Reference distribution used to scale a standard error
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReferenceDistribution {
    /// Standard normal
    Normal,
    /// Student's t with the given degrees of freedom
    StudentsT { df: f64 },
}

impl ReferenceDistribution {
    /// Two-sided critical value at the given confidence level
    pub fn critical_value(&self, confidence_level: f64) -> Result<f64> {
        match *self {
            Self::Normal => z_critical(confidence_level),
            Self::StudentsT { df } => t_critical(confidence_level, df),
        }
    }
}

/// Two-sided standard normal critical value `z*`
///
/// # Example
/// ```rust
/// use clt_confidence::z_critical;
///
/// let z = z_critical(0.95).unwrap();
/// assert!((z - 1.959964).abs() < 1e-6);
/// ```
pub fn z_critical(confidence_level: f64) -> Result<f64> {
    let level = ConfidenceLevel::try_new(confidence_level)?;
    let normal = Normal::new(0.0, 1.0).map_err(|e| {
        Error::Computation(format!("Failed to create normal distribution: {}", e))
    })?;
    let z = normal.inverse_cdf(1.0 - level.tail_probability());
    debug!("z* at {} = {:.6}", level, z);
    Ok(z)
}

/// Degrees of freedom above which `t*` comes from the Cornish-Fisher
/// expansion around `z*` instead of the t quantile function
const EXPANSION_DF: f64 = 1_000.0;

/// Two-sided Student's t critical value `t*` with `df` degrees of freedom
///
/// Never smaller than `z*` at the same level.
pub fn t_critical(confidence_level: f64, df: f64) -> Result<f64> {
    let level = ConfidenceLevel::try_new(confidence_level)?;
    if !(df.is_finite() && df > 0.0) {
        return Err(Error::InvalidParameter(format!(
            "Degrees of freedom {df} must be positive"
        )));
    }
    let z = z_critical(confidence_level)?;

    let t = if df > EXPANSION_DF {
        cornish_fisher_t(z, df)
    } else {
        let t_dist = StudentsT::new(0.0, 1.0, df).map_err(|e| {
            Error::Computation(format!("Failed to create t-distribution: {}", e))
        })?;
        t_dist.inverse_cdf(1.0 - level.tail_probability())
    };
    if !t.is_finite() {
        return Err(Error::non_finite("t critical value"));
    }
    let t = t.max(z);
    debug!("t* at {} with df={} = {:.6}", level, df, t);
    Ok(t)
}

// Abramowitz & Stegun 26.7.5: t quantile as a series in 1/df around the
// normal quantile. The truncation error is O(df^-5).
fn cornish_fisher_t(z: f64, df: f64) -> f64 {
    let z2 = z * z;
    let z3 = z2 * z;
    let z5 = z3 * z2;
    let z7 = z5 * z2;
    let z9 = z7 * z2;

    let g1 = (z3 + z) / 4.0;
    let g2 = (5.0 * z5 + 16.0 * z3 + 3.0 * z) / 96.0;
    let g3 = (3.0 * z7 + 19.0 * z5 + 17.0 * z3 - 15.0 * z) / 384.0;
    let g4 = (79.0 * z9 + 776.0 * z7 + 1482.0 * z5 - 1920.0 * z3 - 945.0 * z) / 92160.0;

    let v = 1.0 / df;
    z + v * (g1 + v * (g2 + v * (g3 + v * g4)))
}
