//! Tests for interval computation over DataFrames

mod common;

use approx::assert_abs_diff_eq;
use clt_confidence::{mean_confidence_interval, proportion_confidence_interval};
use clt_polars::{read_csv, CltIntervalsExt, ConfidenceMethod, ProportionMethod};

#[test]
fn test_mean_interval_drops_missing() -> anyhow::Result<()> {
    let df = read_csv(common::SURVEY_CSV)?;

    let ci = df.mean_interval("hrsrelax", 0.95)?;
    let expected = mean_confidence_interval(&[3.0, 5.0, 2.0, 4.0, 6.0, 1.0], 0.95)?;

    assert_abs_diff_eq!(ci.lower, expected.lower, epsilon = 1e-12);
    assert_abs_diff_eq!(ci.upper, expected.upper, epsilon = 1e-12);
    assert_abs_diff_eq!(ci.estimate, 3.5, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_proportion_interval_from_labels() -> anyhow::Result<()> {
    let df = read_csv(common::SURVEY_CSV)?;

    let summary = df.proportion_summary("getahead", "Hard work")?;
    assert_eq!(summary.successes, 4);
    assert_eq!(summary.n, 7);

    let ci = df.proportion_interval("getahead", "Hard work", 0.90, ProportionMethod::Wald)?;
    let expected = proportion_confidence_interval(4, 7, 0.90)?;
    assert_abs_diff_eq!(ci.lower, expected.lower, epsilon = 1e-12);
    assert_abs_diff_eq!(ci.upper, expected.upper, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_proportion_of_integer_codes() -> anyhow::Result<()> {
    let df = read_csv("code\n1\n2\n1\nNA\n3\n1\n")?;
    let summary = df.proportion_summary("code", "1")?;
    assert_eq!(summary.successes, 3);
    assert_eq!(summary.n, 5);
    Ok(())
}

#[test]
fn test_confidence_intervals_frame() {
    let df = common::create_test_df(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);

    let t_frame = df
        .confidence_intervals(&["values"], 0.95, ConfidenceMethod::StudentsT)
        .unwrap();
    let z_frame = df
        .confidence_intervals(&["values"], 0.95, ConfidenceMethod::Normal)
        .unwrap();

    assert_eq!(t_frame.width(), 4);
    assert_eq!(t_frame.height(), 1);
    assert_abs_diff_eq!(common::extract_single_value(&t_frame, "values_mean"), 5.0);

    let n = t_frame.column("values_n").unwrap().u64().unwrap().get(0).unwrap();
    assert_eq!(n, 8);

    let t_width = common::extract_single_value(&t_frame, "values_upper")
        - common::extract_single_value(&t_frame, "values_lower");
    let z_width = common::extract_single_value(&z_frame, "values_upper")
        - common::extract_single_value(&z_frame, "values_lower");
    assert!(t_width > z_width);
}
