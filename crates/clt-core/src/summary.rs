//! Sample summaries feeding the interval formulas
//!
//! A summary is the transient scalar state between loading a column and
//! applying an interval formula: the sample size, the point estimate and its
//! spread. Missing observations are dropped before anything is counted.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Summary statistics of a numeric sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    /// Number of non-missing observations
    pub n: usize,
    /// Sample mean
    pub mean: f64,
    /// Sample standard deviation (`n - 1` denominator)
    pub std_dev: f64,
}

impl SampleSummary {
    /// Minimum sample size for which the standard deviation is defined
    pub const MIN_OBSERVATIONS: usize = 2;

    /// Create a summary from already reported statistics
    pub fn new(n: usize, mean: f64, std_dev: f64) -> Result<Self> {
        if n < Self::MIN_OBSERVATIONS {
            return Err(Error::insufficient(Self::MIN_OBSERVATIONS, n));
        }
        if !mean.is_finite() || !std_dev.is_finite() {
            return Err(Error::non_finite("summary statistics"));
        }
        if std_dev < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "Standard deviation {std_dev} must be non-negative"
            )));
        }
        Ok(Self { n, mean, std_dev })
    }

    /// Summarise a complete sample
    ///
    /// Every value must be finite; use [`SampleSummary::from_observations`]
    /// when the column may contain missing entries.
    pub fn from_sample(sample: &[f64]) -> Result<Self> {
        if sample.iter().any(|x| !x.is_finite()) {
            return Err(Error::non_finite("sample"));
        }
        Self::summarise(sample)
    }

    /// Summarise a column that may contain missing entries
    ///
    /// `None` and NaN are both treated as missing and dropped.
    pub fn from_observations<I>(observations: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let mut total = 0usize;
        let present: Vec<f64> = observations
            .into_iter()
            .inspect(|_| total += 1)
            .flatten()
            .filter(|x| !x.is_nan())
            .collect();

        debug!(
            "Dropped {} missing observations out of {}",
            total - present.len(),
            total
        );

        if present.iter().any(|x| x.is_infinite()) {
            return Err(Error::non_finite("column"));
        }
        Self::summarise(&present)
    }

    fn summarise(sample: &[f64]) -> Result<Self> {
        let n = sample.len();
        if n < Self::MIN_OBSERVATIONS {
            return Err(Error::insufficient(Self::MIN_OBSERVATIONS, n));
        }

        let mean = sample.iter().sum::<f64>() / n as f64;
        let variance = sample.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        if !(mean.is_finite() && variance.is_finite()) {
            return Err(Error::Computation(format!(
                "Summary of {n} observations overflowed (mean {mean}, variance {variance})"
            )));
        }

        Ok(Self {
            n,
            mean,
            std_dev: variance.sqrt(),
        })
    }

    /// Sample variance
    pub fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }

    /// Standard error of the mean, `s / sqrt(n)`
    pub fn standard_error(&self) -> f64 {
        self.std_dev / (self.n as f64).sqrt()
    }

    /// Degrees of freedom for the t reference distribution
    pub fn degrees_of_freedom(&self) -> f64 {
        (self.n - 1) as f64
    }
}

/// Count summary of a binary outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProportionSummary {
    /// Number of observations equal to the success outcome
    pub successes: usize,
    /// Number of non-missing observations
    pub n: usize,
}

impl ProportionSummary {
    /// Create a summary from counts
    pub fn new(successes: usize, n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::empty_input());
        }
        if successes > n {
            return Err(Error::InvalidInput(format!(
                "Successes ({successes}) exceed number of observations ({n})"
            )));
        }
        Ok(Self { successes, n })
    }

    /// Count successes in a sequence of binary outcomes
    pub fn from_indicators<I>(outcomes: I) -> Result<Self>
    where
        I: IntoIterator<Item = bool>,
    {
        let (successes, n) = outcomes
            .into_iter()
            .fold((0, 0), |(s, n), hit| (s + usize::from(hit), n + 1));
        Self::new(successes, n)
    }

    /// Count how many labels equal `success`, dropping missing labels
    pub fn from_labels<'a, I>(labels: I, success: &str) -> Result<Self>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        Self::from_indicators(labels.into_iter().flatten().map(|label| label == success))
    }

    /// Sample proportion `p̂`
    pub fn p_hat(&self) -> f64 {
        self.successes as f64 / self.n as f64
    }

    /// Number of non-success observations
    pub fn failures(&self) -> usize {
        self.n - self.successes
    }

    /// Plug-in standard error `sqrt(p̂(1 - p̂) / n)`
    pub fn standard_error(&self) -> f64 {
        let p = self.p_hat();
        (p * (1.0 - p) / self.n as f64).sqrt()
    }
}
