//! Running configured analyses and rendering their results

use crate::config::{Analysis, AnalysisKind, ReportConfig};
use anyhow::{Context, Result};
use clt_confidence::{conditions, t_critical, z_critical, Caveat, ConfidenceInterval};
use clt_polars::{load_csv, CltIntervalsExt};
use polars::prelude::DataFrame;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

/// Summary line of an analysis: the statistics the interval was built from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "statistic", rename_all = "snake_case")]
pub enum Evidence {
    Mean { n: usize, mean: f64, std_dev: f64, df: f64 },
    Proportion { n: usize, successes: usize, p_hat: f64 },
}

/// Result of one analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisOutcome {
    pub name: String,
    pub evidence: Evidence,
    pub critical_value: f64,
    pub interval: ConfidenceInterval,
    pub caveats: Vec<Caveat>,
}

impl fmt::Display for AnalysisOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.name)?;
        match self.evidence {
            Evidence::Mean { n, mean, std_dev, df } => {
                writeln!(f, "n = {n}, x̄ = {mean:.4}, s = {std_dev:.4}")?;
                writeln!(f, "t* (df = {df}) = {:.4}", self.critical_value)?;
            }
            Evidence::Proportion { n, successes, p_hat } => {
                writeln!(f, "n = {n}, successes = {successes}, p̂ = {p_hat:.4}")?;
                writeln!(f, "z* = {:.4}", self.critical_value)?;
            }
        }
        writeln!(f, "{}", self.interval)?;
        for caveat in &self.caveats {
            writeln!(f, "caveat: {caveat}")?;
        }
        Ok(())
    }
}

/// Runs analyses, reading each input file once
#[derive(Default)]
pub struct Report {
    datasets: HashMap<PathBuf, DataFrame>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every analysis in the configuration, stopping at the first failure
    pub fn run(&mut self, config: &ReportConfig) -> Result<Vec<AnalysisOutcome>> {
        config
            .analyses
            .iter()
            .map(|analysis| {
                self.run_analysis(analysis)
                    .with_context(|| format!("analysis '{}'", analysis.name))
            })
            .collect()
    }

    fn dataset(&mut self, path: &Path) -> Result<&DataFrame> {
        if !self.datasets.contains_key(path) {
            let df = load_csv(path).with_context(|| format!("loading {}", path.display()))?;
            info!("Loaded {} ({} rows)", path.display(), df.height());
            self.datasets.insert(path.to_path_buf(), df);
        }
        self.datasets
            .get(path)
            .with_context(|| format!("dataset {} missing after load", path.display()))
    }

    /// Run a single analysis
    pub fn run_analysis(&mut self, analysis: &Analysis) -> Result<AnalysisOutcome> {
        let level = analysis.confidence_level;
        let df = self.dataset(&analysis.path)?;

        let outcome = match &analysis.kind {
            AnalysisKind::Mean { column } => {
                let summary = df.sample_summary(column)?;
                let interval = df.mean_interval(column, level)?;
                AnalysisOutcome {
                    name: analysis.name.clone(),
                    evidence: Evidence::Mean {
                        n: summary.n,
                        mean: summary.mean,
                        std_dev: summary.std_dev,
                        df: summary.degrees_of_freedom(),
                    },
                    critical_value: t_critical(level, summary.degrees_of_freedom())?,
                    interval,
                    caveats: conditions::mean_caveats(&summary),
                }
            }
            AnalysisKind::Proportion {
                column,
                success,
                method,
            } => {
                let summary = df.proportion_summary(column, success)?;
                let interval = df.proportion_interval(column, success, level, *method)?;
                AnalysisOutcome {
                    name: analysis.name.clone(),
                    evidence: Evidence::Proportion {
                        n: summary.n,
                        successes: summary.successes,
                        p_hat: summary.p_hat(),
                    },
                    critical_value: z_critical(level)?,
                    interval,
                    caveats: conditions::proportion_caveats(&summary),
                }
            }
        };

        Ok(outcome)
    }
}
