//! Property-based tests for sample summaries

use approx::assert_relative_eq;
use clt_core::{ProportionSummary, SampleSummary};
use proptest::prelude::*;

proptest! {
    // Property: the mean lies between the sample extremes
    #[test]
    fn prop_mean_within_range(sample in prop::collection::vec(-1e6f64..1e6, 2..200)) {
        let summary = SampleSummary::from_sample(&sample).unwrap();
        let min = sample.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = sample.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(summary.mean >= min - 1e-6 && summary.mean <= max + 1e-6);
        prop_assert!(summary.std_dev >= 0.0);
    }

    // Property: shifting every observation moves the mean but not the spread
    #[test]
    fn prop_shift_invariant_spread(
        sample in prop::collection::vec(-100.0f64..100.0, 2..100),
        shift in -1000.0f64..1000.0,
    ) {
        let base = SampleSummary::from_sample(&sample).unwrap();
        let shifted: Vec<f64> = sample.iter().map(|x| x + shift).collect();
        let moved = SampleSummary::from_sample(&shifted).unwrap();

        prop_assert!((moved.mean - (base.mean + shift)).abs() < 1e-6);
        prop_assert!((moved.std_dev - base.std_dev).abs() < 1e-6);
    }

    // Property: missing entries never change the summary of what remains
    #[test]
    fn prop_missing_entries_ignored(
        sample in prop::collection::vec(-100.0f64..100.0, 2..100),
        gaps in prop::collection::vec(any::<bool>(), 0..100),
    ) {
        let mut column: Vec<Option<f64>> = sample.iter().map(|&x| Some(x)).collect();
        for (i, &gap) in gaps.iter().enumerate() {
            if gap {
                column.insert(i.min(column.len()), None);
            }
        }

        let complete = SampleSummary::from_sample(&sample).unwrap();
        let with_gaps = SampleSummary::from_observations(column).unwrap();
        prop_assert_eq!(complete.n, with_gaps.n);
        prop_assert!((complete.mean - with_gaps.mean).abs() < 1e-9);
    }

    // Property: p̂ stays in [0, 1] and the standard error peaks at one half
    #[test]
    fn prop_proportion_bounds(n in 1usize..5000, frac in 0.0f64..=1.0) {
        let successes = ((n as f64) * frac).floor() as usize;
        let summary = ProportionSummary::new(successes, n).unwrap();
        prop_assert!((0.0..=1.0).contains(&summary.p_hat()));
        prop_assert!(summary.standard_error() <= (0.25 / n as f64).sqrt() + 1e-12);
    }
}

#[test]
fn test_summary_serialises_field_names() {
    let summary = SampleSummary::new(1154, 3.68, 2.6).unwrap();
    let json = serde_json::to_value(summary).unwrap();
    assert_eq!(json["n"], 1154);
    assert_relative_eq!(json["mean"].as_f64().unwrap(), 3.68);
    assert_relative_eq!(json["std_dev"].as_f64().unwrap(), 2.6);
}
