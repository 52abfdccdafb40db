//! CSV ingest
//!
//! Files are read with a header row. The literal `NA` and empty fields are
//! read as nulls, so survey exports with R-style missing codes load as-is.

use crate::Result;
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Tokens read as missing values
pub const NULL_TOKENS: [&str; 2] = ["NA", ""];

fn csv_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .map_parse_options(|options| {
            options.with_null_values(Some(NullValues::AllColumns(
                NULL_TOKENS.iter().map(|&token| token.into()).collect(),
            )))
        })
}

/// Load a CSV file into a DataFrame
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let path = path.as_ref();
    let df = csv_options()
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    debug!("Loaded {} rows x {} columns from {}", df.height(), df.width(), path.display());
    Ok(df)
}

/// Parse CSV text already held in memory
pub fn read_csv(content: &str) -> Result<DataFrame> {
    let df = csv_options()
        .into_reader_with_file_handle(Cursor::new(content.as_bytes().to_vec()))
        .finish()?;
    Ok(df)
}
