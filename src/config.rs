//! Report configuration
//!
//! A report is a list of analyses, each naming a CSV file, the computation
//! to run on one of its columns and a confidence level. Configurations are
//! read from JSON.

use anyhow::{Context, Result};
use clt_polars::ProportionMethod;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_confidence_level() -> f64 {
    0.95
}

/// What to compute for an analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisKind {
    /// t interval for the mean of a numeric column
    Mean { column: String },
    /// Interval for the share of `success` in a categorical column
    Proportion {
        column: String,
        success: String,
        #[serde(default)]
        method: ProportionMethod,
    },
}

/// One computation in the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Heading printed above the result
    pub name: String,
    /// CSV file holding the data
    pub path: PathBuf,
    #[serde(flatten)]
    pub kind: AnalysisKind,
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,
}

/// Full report configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub analyses: Vec<Analysis>,
}

impl ReportConfig {
    /// Read a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Parse a configuration from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// The lecture's analyses over whichever datasets are supplied
    ///
    /// The survey gives a mean interval for daily hours of relaxation and a
    /// 90% interval for the share answering that hard work gets people
    /// ahead; the seismic table gives a mean interval for event depth.
    pub fn lecture(survey: Option<PathBuf>, quakes: Option<PathBuf>) -> Self {
        let mut analyses = Vec::new();

        if let Some(survey) = survey {
            analyses.push(Analysis {
                name: "Hours of relaxation per day".to_string(),
                path: survey.clone(),
                kind: AnalysisKind::Mean {
                    column: "hrsrelax".to_string(),
                },
                confidence_level: 0.95,
            });
            analyses.push(Analysis {
                name: "Share who say hard work gets you ahead".to_string(),
                path: survey,
                kind: AnalysisKind::Proportion {
                    column: "getahead".to_string(),
                    success: "Hard work".to_string(),
                    method: ProportionMethod::Wald,
                },
                confidence_level: 0.90,
            });
        }

        if let Some(quakes) = quakes {
            analyses.push(Analysis {
                name: "Seismic event depth (km)".to_string(),
                path: quakes,
                kind: AnalysisKind::Mean {
                    column: "depth".to_string(),
                },
                confidence_level: 0.95,
            });
        }

        Self { analyses }
    }
}
