//! Extension trait for CLT-based intervals on Polars DataFrames

use crate::{ConfidenceMethod, ProportionMethod, Result};
use clt_confidence::ConfidenceInterval;
use clt_core::{ProportionSummary, SampleSummary};
use polars::prelude::*;

/// Extension trait for interval operations on Polars DataFrames
pub trait CltIntervalsExt {
    /// Summarise a numeric column, dropping nulls and NaN
    fn sample_summary(&self, column: &str) -> Result<SampleSummary>;

    /// Count non-null entries of `column` equal to `success`
    ///
    /// String columns are compared directly; integer and boolean columns
    /// are compared through their string form.
    fn proportion_summary(&self, column: &str, success: &str) -> Result<ProportionSummary>;

    /// t interval for the mean of a numeric column
    fn mean_interval(&self, column: &str, level: f64) -> Result<ConfidenceInterval>;

    /// Interval for the proportion of `success` in a categorical column
    fn proportion_interval(
        &self,
        column: &str,
        success: &str,
        level: f64,
        method: ProportionMethod,
    ) -> Result<ConfidenceInterval>;

    /// Compute mean intervals for several columns
    ///
    /// # Returns
    /// One-row DataFrame with columns `{column}_n`, `{column}_mean`,
    /// `{column}_lower` and `{column}_upper`. An empty `columns` slice is an
    /// `InvalidParameter` error.
    fn confidence_intervals(
        &self,
        columns: &[&str],
        level: f64,
        method: ConfidenceMethod,
    ) -> Result<DataFrame>;
}
