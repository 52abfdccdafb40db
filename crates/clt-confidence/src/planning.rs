//! Sample size planning for a target margin of error

use crate::z_critical;
use clt_core::{Error, Result};

fn validate_margin(margin: f64) -> Result<()> {
    if margin.is_finite() && margin > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!(
            "Margin of error {margin} must be positive"
        )))
    }
}

/// Smallest `n` with `z*·σ/√n ≤ margin`
pub fn required_sample_size_mean(sigma: f64, margin: f64, confidence_level: f64) -> Result<usize> {
    validate_margin(margin)?;
    if !(sigma.is_finite() && sigma > 0.0) {
        return Err(Error::InvalidParameter(format!(
            "Standard deviation {sigma} must be positive"
        )));
    }
    let z = z_critical(confidence_level)?;
    Ok(((z * sigma / margin).powi(2)).ceil() as usize)
}

/// Smallest `n` with `z*·√(p(1−p)/n) ≤ margin`
///
/// Pass `p_guess = 0.5` when nothing is known about the proportion; it gives
/// the largest, most conservative `n`.
pub fn required_sample_size_proportion(
    p_guess: f64,
    margin: f64,
    confidence_level: f64,
) -> Result<usize> {
    validate_margin(margin)?;
    if !(0.0..=1.0).contains(&p_guess) {
        return Err(Error::InvalidParameter(format!(
            "Proportion guess {p_guess} must be in [0, 1]"
        )));
    }
    let z = z_critical(confidence_level)?;
    let n = (z * z * p_guess * (1.0 - p_guess) / (margin * margin)).ceil() as usize;
    Ok(n.max(1))
}
