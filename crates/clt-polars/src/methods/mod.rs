//! `CltIntervalsExt` implementation for `DataFrame`

mod mean;
mod proportion;

use crate::{CltIntervalsExt, ConfidenceMethod, Error, ProportionMethod, Result};
use clt_confidence::ConfidenceInterval;
use clt_core::{ProportionSummary, SampleSummary};
use polars::prelude::*;

fn lookup<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| Error::InvalidColumn(name.to_string()))
}

impl CltIntervalsExt for DataFrame {
    fn sample_summary(&self, column: &str) -> Result<SampleSummary> {
        mean::summarise(lookup(self, column)?)
    }

    fn proportion_summary(&self, column: &str, success: &str) -> Result<ProportionSummary> {
        proportion::summarise(lookup(self, column)?, success)
    }

    fn mean_interval(&self, column: &str, level: f64) -> Result<ConfidenceInterval> {
        let summary = self.sample_summary(column)?;
        mean::interval(&summary, level, ConfidenceMethod::StudentsT)
    }

    fn proportion_interval(
        &self,
        column: &str,
        success: &str,
        level: f64,
        method: ProportionMethod,
    ) -> Result<ConfidenceInterval> {
        let summary = self.proportion_summary(column, success)?;
        Ok(clt_confidence::proportion_interval(&summary, level, method)?)
    }

    fn confidence_intervals(
        &self,
        columns: &[&str],
        level: f64,
        method: ConfidenceMethod,
    ) -> Result<DataFrame> {
        if columns.is_empty() {
            return Err(Error::InvalidParameter(
                "At least one column is required".to_string(),
            ));
        }

        let mut result_columns: Vec<Column> = Vec::with_capacity(columns.len() * 4);

        for col_name in columns {
            let summary = self.sample_summary(col_name)?;
            let ci = mean::interval(&summary, level, method)?;

            result_columns.push(Series::new(format!("{col_name}_n").into(), vec![summary.n as u64]).into());
            result_columns.push(Series::new(format!("{col_name}_mean").into(), vec![summary.mean]).into());
            result_columns.push(Series::new(format!("{col_name}_lower").into(), vec![ci.lower]).into());
            result_columns.push(Series::new(format!("{col_name}_upper").into(), vec![ci.upper]).into());
        }

        Ok(DataFrame::new(result_columns)?)
    }
}
