//! Tests for edge cases and error handling

mod common;

use clt_polars::{read_csv, CltIntervalsExt, ConfidenceMethod, Error, ProportionMethod};
use polars::prelude::*;

#[test]
fn test_empty_data() {
    let df = DataFrame::new(vec![
        Series::new(PlSmallStr::from("values"), Vec::<f64>::new()).into()
    ]).unwrap();

    let result = df.mean_interval("values", 0.95);
    assert!(matches!(
        result,
        Err(Error::Core(clt_core::Error::InsufficientData { expected: 2, actual: 0 }))
    ));
}

#[test]
fn test_single_value() {
    let df = common::create_test_df(&[42.0]);
    assert!(matches!(
        df.sample_summary("values"),
        Err(Error::Core(clt_core::Error::InsufficientData { expected: 2, actual: 1 }))
    ));
}

#[test]
fn test_entirely_missing_column() {
    let df = read_csv("hrsrelax,other\nNA,1\nNA,2\nNA,3\n").unwrap();
    assert!(matches!(
        df.mean_interval("hrsrelax", 0.95),
        Err(Error::Core(clt_core::Error::InsufficientData { actual: 0, .. }))
    ));
}

#[test]
fn test_invalid_column_error() {
    let df = common::create_test_df(&[1.0, 2.0, 3.0]);

    assert!(matches!(
        df.mean_interval("nonexistent", 0.95),
        Err(Error::InvalidColumn(_))
    ));
    assert!(matches!(
        df.confidence_intervals(&["values", "nonexistent"], 0.95, ConfidenceMethod::StudentsT),
        Err(Error::InvalidColumn(_))
    ));
}

#[test]
fn test_no_columns_requested() {
    let df = common::create_test_df(&[1.0, 2.0, 3.0]);
    assert!(matches!(
        df.confidence_intervals(&[], 0.95, ConfidenceMethod::StudentsT),
        Err(Error::InvalidParameter(_))
    ));
}

#[test]
fn test_non_numeric_column_error() {
    let df = DataFrame::new(vec![
        Series::new(PlSmallStr::from("strings"), vec!["a", "b", "c"]).into()
    ]).unwrap();

    assert!(matches!(
        df.mean_interval("strings", 0.95),
        Err(Error::TypeMismatch { .. })
    ));
}

#[test]
fn test_float_column_rejected_for_proportion() {
    let df = common::create_test_df(&[0.5, 1.5]);
    assert!(matches!(
        df.proportion_interval("values", "0.5", 0.95, ProportionMethod::Wald),
        Err(Error::TypeMismatch { .. })
    ));
}

#[test]
fn test_invalid_level_propagates() {
    let df = common::create_test_df(&[1.0, 2.0, 3.0]);
    assert!(matches!(
        df.mean_interval("values", 1.5),
        Err(Error::Core(clt_core::Error::InvalidParameter(_)))
    ));
}
