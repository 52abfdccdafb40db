//! Tests for CSV ingest

mod common;

use clt_polars::{load_csv, read_csv, CltIntervalsExt, Error};
use polars::prelude::*;

#[test]
fn test_na_tokens_become_nulls() {
    let df = read_csv(common::SURVEY_CSV).unwrap();
    assert_eq!(df.height(), 8);

    let hours = df.column("hrsrelax").unwrap();
    assert_eq!(hours.dtype(), &DataType::Int64);
    assert_eq!(hours.null_count(), 2);

    let outlook = df.column("getahead").unwrap();
    assert_eq!(outlook.dtype(), &DataType::String);
    assert_eq!(outlook.null_count(), 1);
}

#[test]
fn test_float_columns_inferred() {
    let df = read_csv(common::QUAKES_CSV).unwrap();
    assert_eq!(df.width(), 5);
    assert_eq!(df.column("mag").unwrap().dtype(), &DataType::Float64);

    let summary = df.sample_summary("depth").unwrap();
    assert_eq!(summary.n, 6);
    assert!((summary.mean - 454.0).abs() < 1e-9);
}

#[test]
fn test_missing_file_is_error() {
    let result = load_csv("definitely/not/here/survey.csv");
    assert!(matches!(result, Err(Error::Polars(_))));
}
