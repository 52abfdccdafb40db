//! Numeric column summaries and mean intervals

use crate::{ConfidenceMethod, Error, Result};
use clt_confidence::{mean_interval_from_summary, z_critical, ConfidenceInterval};
use clt_core::SampleSummary;
use polars::prelude::*;
use tracing::debug;

pub(super) fn summarise(column: &Column) -> Result<SampleSummary> {
    let values = match column.dtype() {
        DataType::Float64 => column.clone(),
        DataType::Float32 | DataType::Int64 | DataType::Int32 | DataType::UInt64 | DataType::UInt32 => {
            // Convert to f64 for computation
            column.cast(&DataType::Float64)?
        }
        // An entirely missing column may be inferred as null or string
        DataType::Null | DataType::String if column.null_count() == column.len() => {
            column.cast(&DataType::Float64)?
        }
        dt => {
            return Err(Error::TypeMismatch {
                column: column.name().to_string(),
                expected: "numeric".to_string(),
                got: format!("{:?}", dt),
            });
        }
    };

    let ca = values.f64()?;
    debug!("Column {}: {} rows, {} null", column.name(), ca.len(), ca.null_count());
    Ok(SampleSummary::from_observations(ca.into_iter())?)
}

pub(super) fn interval(
    summary: &SampleSummary,
    level: f64,
    method: ConfidenceMethod,
) -> Result<ConfidenceInterval> {
    let ci = match method {
        ConfidenceMethod::StudentsT => mean_interval_from_summary(summary, level)?,
        ConfidenceMethod::Normal => {
            let z = z_critical(level)?;
            ConfidenceInterval::symmetric(summary.mean, z * summary.standard_error(), level)
        }
    };
    Ok(ci)
}
