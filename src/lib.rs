//! Confidence intervals from the Central Limit Theorem
//!
//! Umbrella crate over the workspace:
//!
//! - [`clt_core`]: sample summaries, errors and the estimator trait
//! - [`clt_confidence`]: critical values, mean and proportion intervals,
//!   caveats, sample size planning and coverage simulation
//! - [`clt_polars`]: the same intervals over DataFrame columns
//!
//! It also holds the report runner behind the `clt-report` binary.
//!
//! ```rust
//! use clt_stats::clt_confidence::proportion_confidence_interval;
//!
//! let ci = proportion_confidence_interval(1003, 1534, 0.90).unwrap();
//! assert!(ci.contains(0.65));
//! ```

pub mod config;
pub mod report;

pub use clt_confidence;
pub use clt_core;
pub use clt_polars;

pub use config::{Analysis, AnalysisKind, ReportConfig};
pub use report::{AnalysisOutcome, Evidence, Report};
