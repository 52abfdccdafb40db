//! Categorical column summaries

use crate::{Error, Result};
use clt_core::ProportionSummary;
use polars::prelude::*;
use tracing::debug;

pub(super) fn summarise(column: &Column, success: &str) -> Result<ProportionSummary> {
    let labels = match column.dtype() {
        DataType::String => column.clone(),
        DataType::Boolean | DataType::Int64 | DataType::Int32 | DataType::UInt64 | DataType::UInt32 => {
            column.cast(&DataType::String)?
        }
        dt => {
            return Err(Error::TypeMismatch {
                column: column.name().to_string(),
                expected: "categorical (string, integer or boolean)".to_string(),
                got: format!("{:?}", dt),
            });
        }
    };

    let ca = labels.str()?;
    let summary = ProportionSummary::from_labels(ca.into_iter(), success)?;
    debug!(
        "Column {}: {} of {} non-null entries equal {:?}",
        column.name(),
        summary.successes,
        summary.n,
        success
    );
    Ok(summary)
}
