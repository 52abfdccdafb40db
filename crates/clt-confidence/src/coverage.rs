//! Coverage simulation for CLT-based intervals
//!
//! Repeatedly samples from a known population, builds an interval from each
//! sample and counts how often the interval covers the true parameter. With
//! a sound approximation the coverage sits near the nominal level.

use crate::{mean_confidence_interval, proportion_interval, ConfidenceLevel, ProportionMethod};
use clt_core::{Error, ProportionSummary, Result};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Bernoulli, Exp, Normal};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Population the simulation draws from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Population {
    /// Normal with the given mean and standard deviation
    Normal { mean: f64, std_dev: f64 },
    /// Exponential with the given rate (right-skewed)
    Exponential { rate: f64 },
    /// Binary outcome with success probability `p`
    Bernoulli { p: f64 },
}

impl Population {
    /// The parameter an interval should cover
    pub fn true_parameter(&self) -> f64 {
        match *self {
            Self::Normal { mean, .. } => mean,
            Self::Exponential { rate } => 1.0 / rate,
            Self::Bernoulli { p } => p,
        }
    }

    fn draw<R: Rng>(&self, rng: &mut R, n: usize) -> Result<Vec<f64>> {
        let sample: Vec<f64> = match *self {
            Self::Normal { mean, std_dev } => {
                let dist = Normal::new(mean, std_dev)
                    .map_err(|e| Error::InvalidParameter(format!("Invalid normal population: {e}")))?;
                dist.sample_iter(rng).take(n).collect()
            }
            Self::Exponential { rate } => {
                let dist = Exp::new(rate).map_err(|e| {
                    Error::InvalidParameter(format!("Invalid exponential population: {e}"))
                })?;
                dist.sample_iter(rng).take(n).collect()
            }
            Self::Bernoulli { p } => {
                let dist = Bernoulli::new(p).map_err(|e| {
                    Error::InvalidParameter(format!("Invalid Bernoulli population: {e}"))
                })?;
                dist.sample_iter(rng).take(n).map(|hit| if hit { 1.0 } else { 0.0 }).collect()
            }
        };
        Ok(sample)
    }
}

/// Result of a coverage simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageResult {
    /// Number of simulated samples
    pub replicates: usize,
    /// Number of intervals containing the true parameter
    pub covered: usize,
    /// Nominal confidence level
    pub confidence_level: f64,
    /// Average interval width
    pub mean_width: f64,
}

impl CoverageResult {
    /// Observed coverage fraction
    pub fn coverage(&self) -> f64 {
        self.covered as f64 / self.replicates as f64
    }
}

/// Repeated-sampling check of interval coverage
///
/// # Example
/// ```rust
/// use clt_confidence::{CoverageSimulation, Population};
///
/// let result = CoverageSimulation::new(Population::Normal { mean: 10.0, std_dev: 2.0 }, 40)
///     .with_replicates(200)
///     .with_seed(7)
///     .run()
///     .unwrap();
/// assert!(result.coverage() > 0.8);
/// ```
#[derive(Debug, Clone)]
pub struct CoverageSimulation {
    population: Population,
    sample_size: usize,
    replicates: usize,
    confidence_level: f64,
    seed: Option<u64>,
}

impl CoverageSimulation {
    /// Create a new simulation drawing samples of `sample_size`
    pub fn new(population: Population, sample_size: usize) -> Self {
        Self {
            population,
            sample_size,
            replicates: 1000,       // Default
            confidence_level: 0.95, // Default
            seed: None,
        }
    }

    /// Set the number of simulated samples
    pub fn with_replicates(mut self, replicates: usize) -> Self {
        self.replicates = replicates;
        self
    }

    /// Set the nominal confidence level
    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run the simulation
    #[instrument(skip(self), fields(population = ?self.population, n = self.sample_size))]
    pub fn run(&self) -> Result<CoverageResult> {
        ConfidenceLevel::try_new(self.confidence_level)?;
        if self.sample_size < 2 {
            return Err(Error::insufficient(2, self.sample_size));
        }
        if self.replicates == 0 {
            return Err(Error::InvalidParameter(
                "Number of replicates must be positive".to_string(),
            ));
        }

        let seed = self.seed.unwrap_or_else(|| thread_rng().gen());
        debug!("Running {} replicates with seed {}", self.replicates, seed);

        let outcomes = self.replicate_all(seed)?;
        let covered = outcomes.iter().filter(|(hit, _)| *hit).count();
        let mean_width = outcomes.iter().map(|(_, w)| w).sum::<f64>() / outcomes.len() as f64;

        Ok(CoverageResult {
            replicates: self.replicates,
            covered,
            confidence_level: self.confidence_level,
            mean_width,
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn replicate_all(&self, seed: u64) -> Result<Vec<(bool, f64)>> {
        (0..self.replicates)
            .map(|i| self.replicate(seed, i as u64))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn replicate_all(&self, seed: u64) -> Result<Vec<(bool, f64)>> {
        (0..self.replicates)
            .into_par_iter()
            .map(|i| self.replicate(seed, i as u64))
            .collect()
    }

    // Each replicate owns its own ChaCha stream, so results do not depend on
    // scheduling order.
    fn replicate(&self, seed: u64, stream: u64) -> Result<(bool, f64)> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(stream);

        let sample = self.population.draw(&mut rng, self.sample_size)?;
        let ci = match self.population {
            Population::Bernoulli { .. } => {
                let summary = ProportionSummary::from_indicators(sample.iter().map(|&x| x == 1.0))?;
                proportion_interval(&summary, self.confidence_level, ProportionMethod::Wald)?
            }
            _ => mean_confidence_interval(&sample, self.confidence_level)?,
        };

        Ok((ci.contains(self.population.true_parameter()), ci.width()))
    }
}
