//! Common test utilities for clt-polars tests

use polars::prelude::*;

/// Survey extract with R-style `NA` missing codes
pub const SURVEY_CSV: &str = "\
id,hrsrelax,getahead,degree
1,3,Hard work,Bachelor
2,NA,Both equally,High school
3,5,Hard work,NA
4,2,Luck or help,Graduate
5,4,Hard work,High school
6,NA,NA,Bachelor
7,6,Both equally,High school
8,1,Hard work,Graduate
";

/// Seismic events extract
pub const QUAKES_CSV: &str = "\
lat,long,depth,mag,stations
-20.42,181.62,562,4.8,41
-20.62,181.03,650,4.2,15
-26.00,184.10,42,5.4,43
-17.97,181.66,626,4.1,19
-20.42,181.96,649,4.0,11
-19.68,184.31,195,4.0,12
";

/// Helper function to create a test DataFrame with specific values
pub fn create_test_df(values: &[f64]) -> DataFrame {
    df!["values" => values].unwrap()
}

/// Helper function to extract a single value from a result DataFrame
pub fn extract_single_value(df: &DataFrame, col_name: &str) -> f64 {
    df.column(col_name)
        .unwrap()
        .f64()
        .unwrap()
        .get(0)
        .unwrap()
}
