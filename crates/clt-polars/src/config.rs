//! Configuration types for interval methods

use serde::{Deserialize, Serialize};

pub use clt_confidence::ProportionMethod;

/// Reference distribution for mean intervals over DataFrame columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceMethod {
    /// Student's t with `n - 1` degrees of freedom
    #[default]
    StudentsT,

    /// Standard normal; the large-sample z interval
    Normal,
}

impl ConfidenceMethod {
    /// Get the name of this method
    pub fn name(&self) -> &'static str {
        match self {
            Self::StudentsT => "t",
            Self::Normal => "z",
        }
    }
}
