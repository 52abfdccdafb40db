use approx::assert_relative_eq;
use clt_stats::{AnalysisKind, Evidence, Report, ReportConfig};
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

const SURVEY_CSV: &str = "\
id,hrsrelax,getahead
1,3,Hard work
2,NA,Both equally
3,5,Hard work
4,2,Luck or help
5,4,Hard work
6,NA,NA
7,6,Both equally
8,1,Hard work
";

const QUAKES_CSV: &str = "\
lat,long,depth,mag
-20.42,181.62,562,4.8
-20.62,181.03,650,4.2
-26.00,184.10,42,5.4
-17.97,181.66,626,4.1
-20.42,181.96,649,4.0
-19.68,184.31,195,4.0
";

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_lecture_report() {
    let dir = tempdir().unwrap();
    let survey = write_fixture(&dir, "survey.csv", SURVEY_CSV);
    let quakes = write_fixture(&dir, "quakes.csv", QUAKES_CSV);
    let config = ReportConfig::lecture(Some(survey), Some(quakes));

    let outcomes = Report::new().run(&config).unwrap();
    assert_eq!(outcomes.len(), 3);

    match outcomes[0].evidence {
        Evidence::Mean { n, mean, df, .. } => {
            assert_eq!(n, 6);
            assert_relative_eq!(mean, 3.5, epsilon = 1e-12);
            assert_eq!(df, 5.0);
        }
        other => panic!("unexpected evidence {other:?}"),
    }
    // Six observations triggers the small sample caveat
    assert!(!outcomes[0].caveats.is_empty());

    match outcomes[1].evidence {
        Evidence::Proportion { n, successes, p_hat } => {
            assert_eq!(n, 7);
            assert_eq!(successes, 4);
            assert_relative_eq!(p_hat, 4.0 / 7.0, epsilon = 1e-12);
        }
        other => panic!("unexpected evidence {other:?}"),
    }
    assert_relative_eq!(outcomes[1].critical_value, 1.6449, epsilon = 1e-3);
    assert!(outcomes[1].interval.contains(4.0 / 7.0));

    assert_relative_eq!(outcomes[2].interval.estimate, 454.0, epsilon = 1e-9);
    assert!(outcomes[2].interval.lower < 454.0 && outcomes[2].interval.upper > 454.0);
}

#[test]
fn test_outcomes_serialize_to_json() {
    let dir = tempdir().unwrap();
    let quakes = write_fixture(&dir, "quakes.csv", QUAKES_CSV);
    let config = ReportConfig::lecture(None, Some(quakes));
    let outcomes = Report::new().run(&config).unwrap();

    let json = serde_json::to_value(&outcomes).unwrap();
    assert_eq!(json[0]["evidence"]["statistic"], "mean");
    assert_eq!(json[0]["evidence"]["n"], 6);
    assert!(json[0]["interval"]["lower"].is_number());

    let text = outcomes[0].to_string();
    assert!(text.starts_with("## Seismic event depth (km)"));
    assert!(text.contains("95.0% CI"));
}

#[test]
fn test_missing_file_is_an_error() {
    let config = ReportConfig::lecture(Some(PathBuf::from("/nonexistent/survey.csv")), None);
    let err = Report::new().run(&config).unwrap_err();
    assert!(format!("{err:#}").contains("Hours of relaxation"));
}

#[test]
fn test_unknown_column_is_an_error() {
    let dir = tempdir().unwrap();
    let quakes = write_fixture(&dir, "quakes.csv", QUAKES_CSV);
    let mut config = ReportConfig::lecture(None, Some(quakes));
    config.analyses[0].kind = AnalysisKind::Mean {
        column: "magnitude".to_string(),
    };
    assert!(Report::new().run(&config).is_err());
}
